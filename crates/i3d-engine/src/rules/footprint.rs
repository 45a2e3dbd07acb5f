//! Keeps the `size` estimate current.

use i3d_core::{FieldId, FieldSet, Precision, Registry};

use crate::footprint::{estimate_bytes, format_bytes, FootprintInputs};
use crate::rule::{Change, Patch, Rule};
use crate::state::State;

/// Rewrites `size` whenever an input to the estimate changes.
#[derive(Debug)]
pub struct Footprint {
    precision: Precision,
    size: FieldId,
    numscalar: FieldId,
    nx: FieldId,
    ny: FieldId,
    nz: FieldId,
    nvisu: FieldId,
    itimescheme: FieldId,
    itype: FieldId,
    ifirst: FieldId,
    ilast: FieldId,
    icheckpoint: FieldId,
    ioutput: FieldId,
    iprocessing: FieldId,
}

impl Footprint {
    /// Rule over the standard schema, estimating for `precision`.
    pub fn new(registry: &Registry, precision: Precision) -> Self {
        let id = |name| registry.id(name);
        Self {
            precision,
            size: id("size"),
            numscalar: id("numscalar"),
            nx: id("nx"),
            ny: id("ny"),
            nz: id("nz"),
            nvisu: id("nvisu"),
            itimescheme: id("itimescheme"),
            itype: id("itype"),
            ifirst: id("ifirst"),
            ilast: id("ilast"),
            icheckpoint: id("icheckpoint"),
            ioutput: id("ioutput"),
            iprocessing: id("iprocessing"),
        }
    }

    /// Inputs to the estimate read from `state`.
    pub fn inputs(&self, state: &State) -> FootprintInputs {
        FootprintInputs {
            numscalar: state.int(self.numscalar),
            nx: state.int(self.nx),
            ny: state.int(self.ny),
            nz: state.int(self.nz),
            itimescheme: state.int(self.itimescheme),
            itype: state.int(self.itype),
            ilast: state.int(self.ilast),
            icheckpoint: state.int(self.icheckpoint),
            ioutput: state.int(self.ioutput),
            iprocessing: state.int(self.iprocessing),
        }
    }

    /// Rendered estimate for `state`.
    pub fn render(&self, state: &State) -> String {
        format_bytes(estimate_bytes(&self.inputs(state), self.precision))
    }

    /// The derived `size` field.
    pub fn size_field(&self) -> FieldId {
        self.size
    }
}

impl Rule for Footprint {
    fn name(&self) -> &'static str {
        "footprint"
    }

    fn triggers(&self) -> FieldSet {
        [
            self.numscalar,
            self.nx,
            self.ny,
            self.nz,
            self.nvisu,
            self.icheckpoint,
            self.ioutput,
            self.iprocessing,
            self.ifirst,
            self.ilast,
            self.itimescheme,
            self.itype,
        ]
        .into_iter()
        .collect()
    }

    fn writes(&self) -> FieldSet {
        [self.size].into_iter().collect()
    }

    fn apply(&self, _change: &Change, state: &State) -> Patch {
        let mut patch = Patch::new();
        patch.write(self.size, self.render(state));
        patch
    }
}

//! Processor-grid decomposition.

use i3d_core::{FieldId, FieldSet, Registry};
use i3d_mesh::divisors;

use crate::rule::{Change, Patch, Rule};
use crate::state::State;

/// Keeps `p_row · p_col == ncores` whenever both are nonzero.
///
/// A core-count change recomputes the candidate list and resets the grid to
/// `(0, 0)` (auto-tuning). Setting one side derives the other when it
/// divides the core count, and sets it to 0 otherwise.
#[derive(Debug)]
pub struct Decomposition {
    ncores: FieldId,
    p_row: FieldId,
    p_col: FieldId,
}

impl Decomposition {
    /// Rule over the standard schema's decomposition fields.
    pub fn new(registry: &Registry) -> Self {
        Self {
            ncores: registry.id("ncores"),
            p_row: registry.id("p_row"),
            p_col: registry.id("p_col"),
        }
    }
}

/// The side paired with `p` for `ncores` cores, or 0 if `p` does not divide.
pub fn complement(ncores: i64, p: i64) -> i64 {
    if p > 0 && ncores % p == 0 {
        ncores / p
    } else {
        0
    }
}

impl Rule for Decomposition {
    fn name(&self) -> &'static str {
        "decomposition"
    }

    fn triggers(&self) -> FieldSet {
        [self.ncores, self.p_row, self.p_col].into_iter().collect()
    }

    fn writes(&self) -> FieldSet {
        [self.p_row, self.p_col].into_iter().collect()
    }

    fn apply(&self, change: &Change, state: &State) -> Patch {
        let mut patch = Patch::new();
        let ncores = state.int(self.ncores);
        if change.field == self.ncores {
            patch
                .set_decomposition(divisors(ncores.max(0) as u64).collect())
                .write(self.p_row, 0)
                .write(self.p_col, 0);
        } else if change.field == self.p_row {
            patch.write(self.p_col, complement(ncores, state.int(self.p_row)));
        } else if change.field == self.p_col {
            patch.write(self.p_row, complement(ncores, state.int(self.p_col)));
        }
        patch
    }
}

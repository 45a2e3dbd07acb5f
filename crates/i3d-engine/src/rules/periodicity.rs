//! Point-count shift when an axis changes periodicity.

use i3d_core::{Axis, AxisFields, FieldSet};

use crate::rule::{Change, Patch, Rule};
use crate::state::State;

/// Keeps the interval count when the periodicity flag flips: `n − 1` on
/// becoming periodic, `n + 1` on leaving it. The resolution triad then
/// sees an unchanged interval count and leaves `d` and `l` alone.
#[derive(Debug)]
pub struct Periodicity {
    fields: AxisFields,
}

impl Periodicity {
    /// Rule for the axis described by `fields`.
    pub fn new(fields: AxisFields) -> Self {
        Self { fields }
    }
}

impl Rule for Periodicity {
    fn name(&self) -> &'static str {
        match self.fields.axis {
            Axis::X => "periodicity_x",
            Axis::Y => "periodicity_y",
            Axis::Z => "periodicity_z",
        }
    }

    fn triggers(&self) -> FieldSet {
        [self.fields.periodic].into_iter().collect()
    }

    fn writes(&self) -> FieldSet {
        [self.fields.point_count].into_iter().collect()
    }

    fn apply(&self, change: &Change, state: &State) -> Patch {
        let mut patch = Patch::new();
        if let Some(periodic) = change.new.as_bool() {
            let n = state.int(self.fields.point_count);
            patch.write(self.fields.point_count, if periodic { n - 1 } else { n + 1 });
        }
        patch
    }
}

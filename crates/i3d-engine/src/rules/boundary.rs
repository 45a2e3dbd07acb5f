//! Boundary-condition coupling along one axis.

use i3d_core::{Axis, AxisFields, FieldSet};

use crate::rule::{Change, Patch, Rule};
use crate::state::State;

/// BC code for a periodic boundary.
pub const PERIODIC: i64 = 0;

/// Moves the four boundary conditions of an axis together.
///
/// Entering periodic (new code 0) sets every sibling to 0 and raises the
/// axis flag. Leaving periodic (old code 0) broadcasts the new code to the
/// siblings and clears the flag. Changes between non-periodic codes touch
/// nothing else.
#[derive(Debug)]
pub struct BoundaryCoupling {
    fields: AxisFields,
}

impl BoundaryCoupling {
    /// Rule for the axis described by `fields`.
    pub fn new(fields: AxisFields) -> Self {
        Self { fields }
    }
}

impl Rule for BoundaryCoupling {
    fn name(&self) -> &'static str {
        match self.fields.axis {
            Axis::X => "boundary_coupling_x",
            Axis::Y => "boundary_coupling_y",
            Axis::Z => "boundary_coupling_z",
        }
    }

    fn triggers(&self) -> FieldSet {
        self.fields.boundary_fields().into_iter().collect()
    }

    fn writes(&self) -> FieldSet {
        let mut set: FieldSet = self.fields.boundary_fields().into_iter().collect();
        set.insert(self.fields.periodic);
        set
    }

    fn apply(&self, change: &Change, _state: &State) -> Patch {
        let mut patch = Patch::new();
        let (Some(old), Some(new)) = (change.old.as_int(), change.new.as_int()) else {
            return patch;
        };
        let periodic = if new == PERIODIC {
            true
        } else if old == PERIODIC {
            false
        } else {
            return patch;
        };
        for sibling in self.fields.boundary_fields() {
            if sibling != change.field {
                patch.write(sibling, new);
            }
        }
        patch.write(self.fields.periodic, periodic);
        patch
    }
}

//! Point count, resolution and domain length along one axis.

use i3d_core::{Axis, AxisFields, FieldSet};

use crate::rule::{Change, Patch, Rule};
use crate::state::State;

/// Keeps `d · m == l` along one axis, where `m` is the interval count
/// (`n` if periodic, `n − 1` otherwise).
///
/// A point-count or domain-length change recomputes the resolution; a
/// resolution change recomputes the domain length. The point count is never
/// derived.
#[derive(Debug)]
pub struct ResolutionTriad {
    fields: AxisFields,
}

impl ResolutionTriad {
    /// Rule for the axis described by `fields`.
    pub fn new(fields: AxisFields) -> Self {
        Self { fields }
    }
}

/// Interval count for `n` points.
pub fn intervals(n: i64, periodic: bool) -> i64 {
    if periodic {
        n
    } else {
        n - 1
    }
}

impl Rule for ResolutionTriad {
    fn name(&self) -> &'static str {
        match self.fields.axis {
            Axis::X => "resolution_triad_x",
            Axis::Y => "resolution_triad_y",
            Axis::Z => "resolution_triad_z",
        }
    }

    fn triggers(&self) -> FieldSet {
        self.fields.triad().into_iter().collect()
    }

    fn writes(&self) -> FieldSet {
        [self.fields.resolution, self.fields.domain_length]
            .into_iter()
            .collect()
    }

    fn apply(&self, change: &Change, state: &State) -> Patch {
        let f = &self.fields;
        let mut patch = Patch::new();
        let m = intervals(state.int(f.point_count), state.boolean(f.periodic));
        if m <= 0 {
            return patch;
        }
        let m = m as f64;
        let d = state.float(f.resolution);
        let l = state.float(f.domain_length);
        if change.field == f.resolution {
            let new_l = d * m;
            if new_l != l {
                patch.write(f.domain_length, new_l);
            }
        } else {
            let new_d = l / m;
            if new_d != d {
                patch.write(f.resolution, new_d);
            }
        }
        patch
    }
}

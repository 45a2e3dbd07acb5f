//! Read-only per-axis view.

use i3d_core::{Axis, AxisFields};
use i3d_engine::State;
use i3d_mesh::candidate_point_counts;

/// Mesh parameters along one axis.
#[derive(Clone, Copy, Debug)]
pub struct AxisView<'a> {
    fields: &'a AxisFields,
    state: &'a State,
}

impl<'a> AxisView<'a> {
    pub(crate) fn new(fields: &'a AxisFields, state: &'a State) -> Self {
        Self { fields, state }
    }

    /// Which axis.
    pub fn axis(&self) -> Axis {
        self.fields.axis
    }

    /// Number of mesh points (`nx`, `ny` or `nz`).
    pub fn point_count(&self) -> i64 {
        self.state.int(self.fields.point_count)
    }

    /// Mesh spacing (`dx`, `dy` or `dz`).
    pub fn resolution(&self) -> f64 {
        self.state.float(self.fields.resolution)
    }

    /// Domain length (`xlx`, `yly` or `zlz`).
    pub fn domain_length(&self) -> f64 {
        self.state.float(self.fields.domain_length)
    }

    /// Whether the axis is periodic.
    pub fn is_periodic(&self) -> bool {
        self.state.boolean(self.fields.periodic)
    }

    /// Number of intervals: the point count, less one if not periodic.
    pub fn intervals(&self) -> i64 {
        if self.is_periodic() {
            self.point_count()
        } else {
            self.point_count() - 1
        }
    }

    /// Velocity conditions at the start and end.
    pub fn velocity_bc(&self) -> (i64, i64) {
        (
            self.state.int(self.fields.velocity_start),
            self.state.int(self.fields.velocity_end),
        )
    }

    /// Scalar conditions at the start and end.
    pub fn scalar_bc(&self) -> (i64, i64) {
        (
            self.state.int(self.fields.scalar_start),
            self.state.int(self.fields.scalar_end),
        )
    }

    /// Legal point counts under the current periodicity.
    pub fn point_count_candidates(&self) -> &'static [u64] {
        candidate_point_counts(self.is_periodic())
    }
}

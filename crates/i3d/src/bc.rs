//! Boundary-condition descriptors for derivative operators.

use i3d_core::Axis;

/// Mesh stretching carried by the y entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stretching {
    /// Stretching mode (`istret`).
    pub istret: i64,
    /// Stretching parameter (`beta`).
    pub beta: f64,
}

/// Boundary conditions of one variable along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBc {
    /// Condition at the start of the axis.
    pub ncl1: i64,
    /// Condition at the end of the axis.
    pub ncln: i64,
    /// Parity: 0 for a variable antisymmetric about the boundary, 1
    /// otherwise.
    pub npaire: i64,
    /// Present on the y axis only.
    pub stretching: Option<Stretching>,
}

/// Per-axis boundary conditions of one variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryConditions {
    /// x axis.
    pub x: AxisBc,
    /// y axis, with stretching.
    pub y: AxisBc,
    /// z axis.
    pub z: AxisBc,
}

impl BoundaryConditions {
    /// Entry for `axis`.
    pub fn axis(&self, axis: Axis) -> &AxisBc {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

/// Which boundary fields a variable uses, and the axis along which it is
/// antisymmetric.
pub(crate) fn variable_kind(name: &str) -> (bool, Option<Axis>) {
    match name {
        "ux" => (false, Some(Axis::X)),
        "uy" => (false, Some(Axis::Y)),
        "uz" => (false, Some(Axis::Z)),
        "phi" => (true, None),
        _ => (false, None),
    }
}

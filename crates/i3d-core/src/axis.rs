//! Spatial axes and the per-axis field record.

use std::fmt;

use crate::id::FieldId;

/// A spatial axis of the computational box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Streamwise.
    X,
    /// Wall-normal (the only axis that supports stretching).
    Y,
    /// Spanwise.
    Z,
}

impl Axis {
    /// All three axes in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase letter used in field names and messages.
    pub fn letter(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
        }
    }

    /// Position in [`Axis::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The fields that describe one axis, resolved to ids once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisFields {
    /// The axis these fields belong to.
    pub axis: Axis,
    /// `nx` / `ny` / `nz`.
    pub point_count: FieldId,
    /// `dx` / `dy` / `dz`.
    pub resolution: FieldId,
    /// `xlx` / `yly` / `zlz`.
    pub domain_length: FieldId,
    /// `nclx1` / `ncly1` / `nclz1`.
    pub velocity_start: FieldId,
    /// `nclxn` / `nclyn` / `nclzn`.
    pub velocity_end: FieldId,
    /// `nclxS1` / `nclyS1` / `nclzS1`.
    pub scalar_start: FieldId,
    /// `nclxSn` / `nclySn` / `nclzSn`.
    pub scalar_end: FieldId,
    /// Derived periodicity flag `nclx` / `ncly` / `nclz`.
    pub periodic: FieldId,
}

impl AxisFields {
    /// The four boundary-condition fields, velocity first.
    pub fn boundary_fields(&self) -> [FieldId; 4] {
        [
            self.velocity_start,
            self.velocity_end,
            self.scalar_start,
            self.scalar_end,
        ]
    }

    /// The point count, resolution and domain length.
    pub fn triad(&self) -> [FieldId; 3] {
        [self.point_count, self.resolution, self.domain_length]
    }

    /// Whether `field` is one of the two scalar boundary conditions.
    pub fn is_scalar_boundary(&self, field: FieldId) -> bool {
        field == self.scalar_start || field == self.scalar_end
    }
}

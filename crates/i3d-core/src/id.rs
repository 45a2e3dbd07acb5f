//! Strongly-typed field identifiers.

use std::fmt;

/// Identifies a field within the parameter registry.
///
/// Fields are declared once in the standard schema and assigned sequential
/// IDs. `FieldId(n)` corresponds to the n-th declared field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl FieldId {
    /// Position of this field in registry declaration order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

//! What a bulk apply left out.

use std::fmt;

/// Why a known key was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Auxiliary input found in a file. Files only carry grouped fields.
    Auxiliary,
    /// Derived field found in a file.
    Derived,
    /// The field is locked by another field's value.
    Locked,
    /// A non-periodic boundary condition for an axis made periodic by
    /// another entry of the same apply.
    BoundaryConflict,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auxiliary => "auxiliary parameter",
            Self::Derived => "derived parameter",
            Self::Locked => "locked parameter",
            Self::BoundaryConflict => "conflicts with a periodic boundary condition",
        })
    }
}

/// A key that was recognised but not applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    /// Parameter name as given.
    pub key: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Outcome of a successful bulk apply.
///
/// Unknown and skipped keys are not errors; they are logged with
/// `tracing::warn!` and collected here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Keys that name no parameter, in source order.
    pub unknown: Vec<String>,
    /// Known keys that were left out, in the order they were considered.
    pub skipped: Vec<Skipped>,
}

impl ApplyReport {
    /// Whether every key was applied.
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.skipped.is_empty()
    }

    pub(crate) fn merge(&mut self, other: ApplyReport) {
        self.unknown.extend(other.unknown);
        self.skipped.extend(other.skipped);
    }
}

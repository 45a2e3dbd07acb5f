//! Error types shared by the registry and the constraint engine.
//!
//! Organized by failure class: lookup (unknown names), validation (a single
//! value rejected before anything changes), and invariant (propagation could
//! not reach a consistent state).

use thiserror::Error;

use crate::field::FieldKind;

/// A field name is not declared in the registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown parameter '{name}'")]
pub struct LookupError {
    /// The name that was looked up.
    pub name: String,
}

/// A single assignment was rejected. Nothing was changed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    /// The value's kind cannot be coerced to the field's kind.
    #[error("parameter '{field}' expects {expected}, got {found}")]
    KindMismatch {
        /// Field being assigned.
        field: String,
        /// Kind declared in the registry.
        expected: FieldKind,
        /// Kind of the supplied value.
        found: FieldKind,
    },
    /// A float (or list element) is NaN or infinite.
    #[error("parameter '{field}' must be finite, got {value}")]
    NonFinite {
        /// Field being assigned.
        field: String,
        /// The offending value.
        value: f64,
    },
    /// The value lies outside the declared bounds.
    #[error("parameter '{field}' = {value} is outside [{}, {}]", fmt_bound(.min), fmt_bound(.max))]
    OutOfBounds {
        /// Field being assigned.
        field: String,
        /// The offending value.
        value: f64,
        /// Lower bound, if any.
        min: Option<f64>,
        /// Upper bound, if any.
        max: Option<f64>,
    },
    /// A mesh point count is not FFT-compatible for the axis's periodicity.
    #[error("invalid point count {value} for '{field}': {reason}")]
    InvalidPointCount {
        /// Point-count field (`nx`, `ny` or `nz`).
        field: String,
        /// The rejected count.
        value: i64,
        /// Why the count was rejected.
        reason: String,
    },
    /// The field is derived and maintained by the engine only.
    #[error("parameter '{field}' is derived and cannot be assigned")]
    ReadOnly {
        /// Field being assigned.
        field: String,
    },
    /// The field is temporarily not editable (e.g. LES disabled).
    #[error("parameter '{field}' is not editable in the current configuration")]
    Locked {
        /// Field being assigned.
        field: String,
    },
    /// A non-periodic scalar boundary condition on a periodic axis.
    #[error("scalar boundary condition '{field}' = {value} conflicts with periodic axis {axis}")]
    PeriodicAxis {
        /// Scalar BC field being assigned.
        field: String,
        /// The rejected BC code.
        value: i64,
        /// Axis name (`x`, `y` or `z`).
        axis: char,
    },
}

fn fmt_bound(b: &Option<f64>) -> String {
    b.map_or_else(|| "..".to_string(), |v| v.to_string())
}

/// Propagation could not reach a consistent state. The staged changes were
/// discarded.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvariantError {
    /// The change queue did not drain within the step budget.
    #[error("propagation did not settle within {max_steps} steps")]
    StepLimit {
        /// Configured budget.
        max_steps: usize,
    },
    /// A rule produced a value the registry rejects.
    #[error("rule '{rule}' produced an invalid value for '{field}'")]
    RejectedWrite {
        /// Name of the rule.
        rule: &'static str,
        /// Field written.
        field: String,
        /// Why the write was rejected.
        #[source]
        source: ValidationError,
    },
    /// A rule wrote a field it does not declare.
    #[error("rule '{rule}' wrote undeclared field '{field}'")]
    UndeclaredWrite {
        /// Name of the rule.
        rule: &'static str,
        /// Field written.
        field: String,
    },
    /// The post-propagation audit found an inconsistency.
    #[error("inconsistent parameters after propagation: {detail}")]
    Inconsistent {
        /// What the audit found.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn out_of_bounds_message_shows_open_bound() {
        let e = ValidationError::OutOfBounds {
            field: "xlx".into(),
            value: -1.0,
            min: Some(0.0),
            max: None,
        };
        assert_eq!(e.to_string(), "parameter 'xlx' = -1 is outside [0, ..]");
    }

    #[test]
    fn rejected_write_chains_source() {
        let e = InvariantError::RejectedWrite {
            rule: "triad-x",
            field: "dx".into(),
            source: ValidationError::NonFinite {
                field: "dx".into(),
                value: f64::INFINITY,
            },
        };
        assert!(e.source().is_some());
    }
}

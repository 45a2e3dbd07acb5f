//! Error types for mesh validation.

use thiserror::Error;

/// Why a point count was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Too few points for the derivative stencil.
    #[error("{n} points is below the minimum of {min}")]
    BelowMinimum {
        /// Rejected count.
        n: u64,
        /// Minimum for the axis's periodicity.
        min: u64,
    },
    /// The interval count is not of the form `2^(1+a) · 3^b · 5^c`.
    #[error("{n} points gives {intervals} intervals (periodic: {periodic}), which is not 2^(1+a)·3^b·5^c")]
    NotFftCompatible {
        /// Rejected count.
        n: u64,
        /// `n` for periodic axes, `n − 1` otherwise.
        intervals: u64,
        /// Periodicity the count was checked under.
        periodic: bool,
    },
}

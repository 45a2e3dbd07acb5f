//! Engine configuration.

use i3d_core::Precision;

/// Default propagation step budget per assignment.
pub const DEFAULT_MAX_STEPS: usize = 64;

/// Configuration for an [`Engine`](crate::Engine).
///
/// Precision is explicit configuration rather than ambient state: two
/// parameter sets built with different precisions report different
/// footprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Solver precision used by the footprint estimate. Default: `F64`.
    pub precision: Precision,
    /// Maximum rule applications per assignment before propagation is
    /// abandoned. Default: 64.
    pub max_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

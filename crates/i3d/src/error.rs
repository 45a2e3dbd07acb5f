//! Facade error type.

use i3d_core::LookupError;
use i3d_engine::SetError;
use i3d_namelist::{FormatError, UnsupportedFormat};
use thiserror::Error;

/// Errors from building, loading or saving a parameter set.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The source text is malformed. Nothing was applied.
    #[error("malformed parameter file: {0}")]
    Format(#[from] FormatError),
    /// The file extension is not `.i3d` or `.prm` (or not `.i3d` on save).
    #[error(transparent)]
    Unsupported(#[from] UnsupportedFormat),
    /// Unknown parameter name.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// One assignment of a bulk apply failed. Nothing was applied.
    #[error("cannot assign '{key}': {source}")]
    Assignment {
        /// Parameter being assigned.
        key: String,
        /// Why the engine refused it.
        #[source]
        source: SetError,
    },
}

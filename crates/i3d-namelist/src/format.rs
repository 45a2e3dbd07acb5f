//! Format selection by file extension.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{FormatError, UnsupportedFormat};
use crate::legacy::parse_prm;
use crate::reader::parse_i3d;
use crate::value::RawValue;

/// A supported parameter file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Sectioned namelist, `.i3d`. Read and written.
    Primary,
    /// One `value #key` per line, `.prm`. Read only.
    Legacy,
}

impl Format {
    /// Pick the format from the extension of `path`, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("i3d") => Ok(Self::Primary),
            Some("prm") => Ok(Self::Legacy),
            _ => Err(UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Primary => "i3d",
            Self::Legacy => "prm",
        }
    }

    /// Parse `text` into one flat mapping in source order.
    pub fn parse(self, text: &str) -> Result<IndexMap<String, RawValue>, FormatError> {
        match self {
            Self::Primary => parse_i3d(text).map(|doc| doc.into_flat()),
            Self::Legacy => parse_prm(text),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

//! Floating-point precision of the solver build.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Precision the solver was compiled with. Only affects the disk-footprint
/// estimate.
///
/// ```
/// use i3d_core::Precision;
///
/// assert_eq!(Precision::default(), Precision::F64);
/// let p: Precision = "single".parse().unwrap();
/// assert_eq!(p.size_bytes(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// Single precision (4 bytes per value).
    F32,
    /// Double precision (8 bytes per value).
    #[default]
    F64,
}

impl Precision {
    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Bytes per stored value.
    pub fn size_bytes(self) -> u64 {
        match self {
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised precision name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown precision '{0}' (expected f32/single or f64/double)")]
pub struct PrecisionParseError(pub String);

impl FromStr for Precision {
    type Err = PrecisionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f32" | "float" | "single" => Ok(Self::F32),
            "f64" | "double" => Ok(Self::F64),
            _ => Err(PrecisionParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_agree() {
        for p in [Precision::F32, Precision::F64] {
            assert_eq!(p.to_string().parse::<Precision>(), Ok(p));
        }
        assert!("quad".parse::<Precision>().is_err());
    }
}

//! Error types for namelist parsing.

use std::path::PathBuf;

use thiserror::Error;

/// What went wrong on a malformed line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// A section was opened and never closed.
    #[error("section '&{name}' is never closed with /End")]
    UnterminatedSection {
        /// Name of the open section.
        name: String,
    },
    /// `/End` with no open section.
    #[error("/End without an open section")]
    UnexpectedEnd,
    /// A section opened while another is still open.
    #[error("section '&{name}' opened before the previous section was closed")]
    NestedSection {
        /// Name of the new section.
        name: String,
    },
    /// `&` with no name after it.
    #[error("section header has no name")]
    MissingSectionName,
    /// A `key = value` entry outside any section.
    #[error("entry outside of a section")]
    OutsideSection,
    /// An entry line with no `=`.
    #[error("expected 'key = value'")]
    MissingEquals,
    /// An entry with nothing before `=` (or, in legacy files, after `#`).
    #[error("entry has an empty key")]
    EmptyKey,
    /// An indexed key whose index is not a positive integer.
    #[error("bad index in '{key}'")]
    BadIndex {
        /// The key as written.
        key: String,
    },
    /// A value that is not a quoted string, logical, integer or real.
    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue {
        /// The key as written.
        key: String,
        /// The value as written.
        value: String,
    },
    /// A legacy line that is not `value #key`.
    #[error("expected 'value #key'")]
    MalformedLegacyLine,
}

/// Malformed namelist text. Nothing from the source is applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}{}: {kind}", in_section(.section))]
pub struct FormatError {
    /// 1-based line number.
    pub line: usize,
    /// Section the line belongs to, if any.
    pub section: Option<String>,
    /// What went wrong.
    #[source]
    pub kind: FormatErrorKind,
}

fn in_section(section: &Option<String>) -> String {
    section
        .as_ref()
        .map_or_else(String::new, |s| format!(" (in &{s})"))
}

/// A file extension the codec does not handle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unsupported format for '{}': expected .i3d or .prm", .path.display())]
pub struct UnsupportedFormat {
    /// The offending path.
    pub path: PathBuf,
}

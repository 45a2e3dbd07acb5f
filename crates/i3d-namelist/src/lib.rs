//! Namelist codec for i3d parameter files.
//!
//! Reads the sectioned `.i3d` format and the older one-per-line `.prm`
//! format into a flat, ordered `name → value` mapping, and writes `.i3d`.
//! Values stay untyped ([`RawValue`]) here; checking them against the
//! schema is the caller's job.
//!
//! ```
//! use i3d_namelist::{Format, RawValue};
//!
//! let map = Format::Primary
//!     .parse("&BasicParam\n  nx = 181 ! points\n/End\n")
//!     .unwrap();
//! assert_eq!(map["nx"], RawValue::Int(181));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod legacy;
pub mod reader;
pub mod value;
pub mod writer;

pub use error::{FormatError, FormatErrorKind, UnsupportedFormat};
pub use format::Format;
pub use legacy::{legacy_names, parse_prm};
pub use reader::{parse_i3d, Document};
pub use value::{format_real, parse_scalar, RawValue};
pub use writer::{write_i3d, EntryOut, SectionOut};

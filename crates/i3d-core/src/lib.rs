//! Core types for i3d parameter sets.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! static parameter schema ([`Registry`]), field ids and values, namelist
//! groups, spatial axes, solver precision, and the error types shared by the
//! rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod field;
pub mod group;
pub mod id;
pub mod precision;
pub mod registry;

pub use axis::{Axis, AxisFields};
pub use error::{InvariantError, LookupError, ValidationError};
pub use field::{
    Bounds, FieldDescriptor, FieldKind, FieldRole, FieldSet, FieldSetIter, FieldValue,
};
pub use group::Group;
pub use id::FieldId;
pub use precision::{Precision, PrecisionParseError};
pub use registry::Registry;

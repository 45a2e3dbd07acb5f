//! i3d: typed, self-consistent parameter sets for the Xcompact3d
//! incompressible-flow solver.
//!
//! This is the top-level facade crate. It re-exports the sub-crates and adds
//! [`ParameterSet`], which ties the schema, the constraint engine and the
//! namelist codec together.
//!
//! # Quick start
//!
//! ```rust
//! use i3d::prelude::*;
//!
//! let mut params = ParameterSet::new();
//! params.set("nx", 129).unwrap();
//! params.set("xlx", 8.0).unwrap();
//! assert_eq!(params.axis(Axis::X).resolution(), 0.0625);
//!
//! // Periodic in y: all four y conditions follow, and ny drops by one.
//! params.set("ncly1", 0).unwrap();
//! assert_eq!(params.int("nclySn"), Some(0));
//! assert_eq!(params.int("ny"), Some(16));
//!
//! let text = params.to_i3d();
//! let mut copy = ParameterSet::new();
//! copy.load_str(&text, Format::Primary).unwrap();
//! assert_eq!(copy.int("nx"), Some(129));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `i3d-core` | Schema, field values, axes, groups, error types |
//! | [`mesh`] | `i3d-mesh` | Point-count rules and divisor sequences |
//! | [`engine`] | `i3d-engine` | Rules, propagation, footprint estimate |
//! | [`namelist`] | `i3d-namelist` | `.i3d` / `.prm` parsing and `.i3d` output |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod apply;
pub mod bc;
pub mod builder;
pub mod error;
pub mod params;
pub mod report;
pub mod view;

/// Schema, values and error types (`i3d-core`).
pub use i3d_core as types;

/// FFT-compatible point counts and divisor sequences (`i3d-mesh`).
pub use i3d_mesh as mesh;

/// Rule table, propagation and footprint estimate (`i3d-engine`).
///
/// Custom rules implement [`engine::Rule`] and run through
/// [`engine::Engine::with_rules`].
pub use i3d_engine as engine;

/// Namelist reader and writer (`i3d-namelist`).
pub use i3d_namelist as namelist;

pub use bc::{AxisBc, BoundaryConditions, Stretching};
pub use builder::ParameterSetBuilder;
pub use error::ParameterError;
pub use params::ParameterSet;
pub use report::{ApplyReport, SkipReason, Skipped};
pub use view::AxisView;

/// Common imports.
///
/// ```rust
/// use i3d::prelude::*;
/// ```
pub mod prelude {
    // Facade
    pub use crate::{
        ApplyReport, AxisView, BoundaryConditions, ParameterError, ParameterSet,
        ParameterSetBuilder,
    };

    // Schema
    pub use i3d_core::{Axis, FieldKind, FieldValue, Group, Precision, Registry};

    // Errors
    pub use i3d_core::{InvariantError, LookupError, ValidationError};
    pub use i3d_engine::SetError;

    // Engine and codec
    pub use i3d_engine::EngineConfig;
    pub use i3d_namelist::{Format, FormatError, RawValue};
}

//! Constraint engine for i3d parameter sets.
//!
//! Holds the rule table that keeps interdependent parameters consistent:
//! mesh resolution against domain size, boundary conditions per axis,
//! processor-grid decomposition, LES dissipation settings and the disk
//! footprint estimate. [`Engine::set`] validates an assignment, runs the
//! triggered rules to a fixed point on a staged copy, audits the result and
//! commits it only if everything holds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod footprint;
pub mod rule;
pub mod rules;
pub mod state;
pub mod table;

pub use config::{EngineConfig, DEFAULT_MAX_STEPS};
pub use engine::{Engine, SetError, TRIAD_TOLERANCE};
pub use footprint::{estimate_bytes, format_bytes, FootprintInputs};
pub use rule::{Change, Origin, Patch, Rule};
pub use state::State;
pub use table::{RuleTable, RuleTableError, WriteConflict};

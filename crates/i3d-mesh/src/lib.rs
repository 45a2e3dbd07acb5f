//! Mesh feasibility checks for i3d.
//!
//! Pure functions over integers: whether a point count is accepted by the
//! solver's FFT library, the table of legal counts offered to users, and the
//! divisor sequence used to propose processor-grid shapes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod divisors;
pub mod error;
pub mod points;

pub use divisors::{divisors, Divisors};
pub use error::MeshError;
pub use points::{
    candidate_point_counts, is_valid_point_count, min_point_count, validate_point_count,
    MAX_TABLE_POINTS,
};

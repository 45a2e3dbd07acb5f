//! Test utilities and fixtures for i3d development.
//!
//! Provides sample parameter files ([`fixtures`]) and small helpers shared by
//! the integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use i3d_core::Registry;

pub use fixtures::{CHANNEL_PRM, LOCK_EXCHANGE_I3D, MALFORMED, PERIODIC_BOX_I3D};

/// Relative closeness, for derived floats.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Names of every serialized field, in output order.
pub fn grouped_names() -> Vec<&'static str> {
    let reg = Registry::standard();
    i3d_core::Group::ALL
        .iter()
        .flat_map(|&g| reg.all_in_group(g))
        .collect()
}

/// A `.i3d` document with one section holding `entries` verbatim.
pub fn one_section(section: &str, entries: &[(&str, &str)]) -> String {
    let mut text = format!("&{section}\n");
    for (key, value) in entries {
        text.push_str(&format!("{key} = {value}\n"));
    }
    text.push_str("/End\n");
    text
}

//! The standard rule set.
//!
//! One triad, boundary-coupling and periodicity rule per axis, plus the
//! decomposition, LES and footprint rules.

mod boundary;
mod decomposition;
mod footprint;
mod les;
mod periodicity;
mod triad;

pub use boundary::{BoundaryCoupling, PERIODIC};
pub use decomposition::{complement, Decomposition};
pub use footprint::Footprint;
pub use les::LesToggle;
pub use periodicity::Periodicity;
pub use triad::{intervals, ResolutionTriad};

use i3d_core::{Precision, Registry};

use crate::rule::Rule;

/// Every standard rule, in dispatch order.
pub fn standard_rules(registry: &Registry, precision: Precision) -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = Vec::new();
    for axis in registry.axes() {
        rules.push(Box::new(BoundaryCoupling::new(*axis)));
        rules.push(Box::new(Periodicity::new(*axis)));
        rules.push(Box::new(ResolutionTriad::new(*axis)));
    }
    rules.push(Box::new(Decomposition::new(registry)));
    rules.push(Box::new(LesToggle::new(registry)));
    rules.push(Box::new(Footprint::new(registry, precision)));
    rules
}

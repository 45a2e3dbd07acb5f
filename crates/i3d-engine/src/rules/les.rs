//! Dissipation settings tied to the LES switch.

use i3d_core::{FieldId, FieldSet, Registry};

use crate::rule::{Change, Patch, Rule};
use crate::state::State;

/// Values forced while LES is disabled.
const NU0NU: f64 = 4.0;
const CNU: f64 = 0.44;
const ISECONDDER: i64 = 4;

/// Disabling LES (`ilesmod = 0`) forces `nu0nu`, `cnu` and `isecondder` to
/// their defaults and locks them; enabling it unlocks them without touching
/// their values.
#[derive(Debug)]
pub struct LesToggle {
    ilesmod: FieldId,
    nu0nu: FieldId,
    cnu: FieldId,
    isecondder: FieldId,
}

impl LesToggle {
    /// Rule over the standard schema's LES fields.
    pub fn new(registry: &Registry) -> Self {
        Self {
            ilesmod: registry.id("ilesmod"),
            nu0nu: registry.id("nu0nu"),
            cnu: registry.id("cnu"),
            isecondder: registry.id("isecondder"),
        }
    }

    /// The fields locked while LES is disabled.
    pub fn controlled(&self) -> [FieldId; 3] {
        [self.nu0nu, self.cnu, self.isecondder]
    }

    /// Patch that brings the controlled fields in line with `enabled`.
    pub fn patch_for(&self, enabled: bool) -> Patch {
        let mut patch = Patch::new();
        if enabled {
            for f in self.controlled() {
                patch.unlock(f);
            }
        } else {
            patch
                .write(self.nu0nu, NU0NU)
                .write(self.cnu, CNU)
                .write(self.isecondder, ISECONDDER);
            for f in self.controlled() {
                patch.lock(f);
            }
        }
        patch
    }
}

impl Rule for LesToggle {
    fn name(&self) -> &'static str {
        "les_toggle"
    }

    fn triggers(&self) -> FieldSet {
        [self.ilesmod].into_iter().collect()
    }

    fn writes(&self) -> FieldSet {
        self.controlled().into_iter().collect()
    }

    fn apply(&self, _change: &Change, state: &State) -> Patch {
        self.patch_for(state.int(self.ilesmod) != 0)
    }
}

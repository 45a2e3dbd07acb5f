//! Current values of one parameter set.

use i3d_core::{FieldId, FieldSet, FieldValue};

/// Field values indexed by [`FieldId`], plus engine bookkeeping.
///
/// Only the engine mutates a `State`; everything else reads it. Typed
/// getters assume the value already conforms to the field's kind, which the
/// engine guarantees, and return a zero value otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    values: Vec<FieldValue>,
    locked: FieldSet,
    decomposition: Vec<u64>,
}

impl State {
    pub(crate) fn new(values: Vec<FieldValue>) -> Self {
        Self {
            values,
            locked: FieldSet::empty(),
            decomposition: Vec::new(),
        }
    }

    /// Value of `field`.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a registry id.
    pub fn get(&self, field: FieldId) -> &FieldValue {
        &self.values[field.index()]
    }

    /// Integer value of `field`.
    pub fn int(&self, field: FieldId) -> i64 {
        self.get(field).as_int().unwrap_or_default()
    }

    /// Float value of `field`.
    pub fn float(&self, field: FieldId) -> f64 {
        self.get(field).as_float().unwrap_or_default()
    }

    /// Boolean value of `field`.
    pub fn boolean(&self, field: FieldId) -> bool {
        self.get(field).as_bool().unwrap_or_default()
    }

    /// All values in registry order.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Whether `field` is currently not editable by callers.
    pub fn is_locked(&self, field: FieldId) -> bool {
        self.locked.contains(field)
    }

    /// Fields currently not editable by callers.
    pub fn locked(&self) -> &FieldSet {
        &self.locked
    }

    /// Legal `p_row` / `p_col` values for the current core count.
    pub fn decomposition_candidates(&self) -> &[u64] {
        &self.decomposition
    }

    pub(crate) fn replace(&mut self, field: FieldId, value: FieldValue) -> FieldValue {
        std::mem::replace(&mut self.values[field.index()], value)
    }

    pub(crate) fn set_locked(&mut self, field: FieldId, locked: bool) {
        if locked {
            self.locked.insert(field);
        } else {
            self.locked.remove(field);
        }
    }

    pub(crate) fn set_decomposition(&mut self, candidates: Vec<u64>) {
        self.decomposition = candidates;
    }
}

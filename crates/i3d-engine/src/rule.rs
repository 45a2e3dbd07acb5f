//! The [`Rule`] trait and the values it exchanges with the engine.

use i3d_core::{FieldId, FieldSet, FieldValue};
use smallvec::SmallVec;

use crate::state::State;

/// Who produced a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// A caller assignment (interactive `set`, builder, or file load).
    User,
    /// A rule, identified by its index in the [`RuleTable`](crate::RuleTable).
    Rule(usize),
}

/// One committed value change, as seen by triggered rules.
///
/// By the time a rule sees a change, `new` is already stored in the state.
#[derive(Clone, Debug, PartialEq)]
pub struct Change {
    /// Field that changed.
    pub field: FieldId,
    /// Previous value.
    pub old: FieldValue,
    /// Current value.
    pub new: FieldValue,
    /// Producer of the change.
    pub origin: Origin,
}

/// Effects requested by a rule.
///
/// Writes equal to the current value are dropped by the engine and do not
/// trigger further rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Patch {
    writes: SmallVec<[(FieldId, FieldValue); 4]>,
    locks: SmallVec<[(FieldId, bool); 3]>,
    decomposition: Option<Vec<u64>>,
}

impl Patch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request `field = value`.
    pub fn write(&mut self, field: FieldId, value: impl Into<FieldValue>) -> &mut Self {
        self.writes.push((field, value.into()));
        self
    }

    /// Make `field` not editable by callers.
    pub fn lock(&mut self, field: FieldId) -> &mut Self {
        self.locks.push((field, true));
        self
    }

    /// Make `field` editable again.
    pub fn unlock(&mut self, field: FieldId) -> &mut Self {
        self.locks.push((field, false));
        self
    }

    /// Replace the decomposition candidate list.
    pub fn set_decomposition(&mut self, candidates: Vec<u64>) -> &mut Self {
        self.decomposition = Some(candidates);
        self
    }

    /// Requested writes, in order.
    pub fn writes(&self) -> &[(FieldId, FieldValue)] {
        &self.writes
    }

    /// Requested lock changes, in order.
    pub fn locks(&self) -> &[(FieldId, bool)] {
        &self.locks
    }

    /// Requested decomposition candidates, if any.
    pub fn decomposition(&self) -> Option<&[u64]> {
        self.decomposition.as_deref()
    }

    /// Whether the patch requests nothing.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.locks.is_empty() && self.decomposition.is_none()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        SmallVec<[(FieldId, FieldValue); 4]>,
        SmallVec<[(FieldId, bool); 3]>,
        Option<Vec<u64>>,
    ) {
        (self.writes, self.locks, self.decomposition)
    }
}

/// A propagation rule: reacts to changes of its trigger fields by requesting
/// writes to its output fields.
///
/// Rules are pure: `apply` reads the staged state and returns a [`Patch`];
/// the engine validates and applies it. A rule is never re-fired by changes
/// it produced itself.
///
/// # Example
///
/// ```
/// use i3d_core::{FieldId, FieldSet};
/// use i3d_engine::{Change, Patch, Rule, State};
///
/// struct Mirror {
///     from: FieldId,
///     to: FieldId,
/// }
///
/// impl Rule for Mirror {
///     fn name(&self) -> &'static str {
///         "mirror"
///     }
///     fn triggers(&self) -> FieldSet {
///         [self.from].into_iter().collect()
///     }
///     fn writes(&self) -> FieldSet {
///         [self.to].into_iter().collect()
///     }
///     fn apply(&self, change: &Change, _state: &State) -> Patch {
///         let mut patch = Patch::new();
///         patch.write(self.to, change.new.clone());
///         patch
///     }
/// }
///
/// let rule = Mirror { from: FieldId(0), to: FieldId(1) };
/// assert_eq!(rule.name(), "mirror");
/// ```
pub trait Rule: Send + Sync + 'static {
    /// Name for error reporting and logs.
    fn name(&self) -> &'static str;

    /// Fields whose changes fire this rule.
    fn triggers(&self) -> FieldSet;

    /// Fields this rule may write. Writes outside this set are rejected.
    fn writes(&self) -> FieldSet;

    /// React to `change`.
    fn apply(&self, change: &Change, state: &State) -> Patch;
}

//! Rule table construction and validation.
//!
//! [`RuleTable::new`] runs once when an engine is built. It checks the rule
//! list for structural errors and precomputes the trigger index, so dispatch
//! during propagation is a single slice lookup per change.

use i3d_core::{FieldId, Registry};
use indexmap::IndexMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::rule::Rule;

// ── Errors ─────────────────────────────────────────────────────────

/// A detected write-write conflict between two rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteConflict {
    /// The contested field.
    pub field: FieldId,
    /// Name of the first writer (earlier in table order).
    pub first_writer: &'static str,
    /// Name of the second writer.
    pub second_writer: &'static str,
}

/// Errors from rule table validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleTableError {
    /// Two or more rules write the same field.
    #[error("write-write conflicts: {}", fmt_conflicts(.0))]
    WriteConflict(Vec<WriteConflict>),

    /// A rule references a field not declared in the registry.
    #[error("rule '{rule}' references undefined field {field}")]
    UndefinedField {
        /// Which rule.
        rule: &'static str,
        /// The missing field.
        field: FieldId,
    },
}

fn fmt_conflicts(conflicts: &[WriteConflict]) -> String {
    conflicts
        .iter()
        .map(|c| {
            format!(
                "field {} written by '{}' and '{}'",
                c.field, c.first_writer, c.second_writer
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Table ──────────────────────────────────────────────────────────

/// Validated rules with a precomputed trigger index.
pub struct RuleTable {
    rules: Vec<Box<dyn Rule>>,
    /// `by_trigger[field]` lists the rules fired by a change of `field`,
    /// in table order.
    by_trigger: Vec<SmallVec<[usize; 2]>>,
}

impl RuleTable {
    /// Validate `rules` against `registry` and build the trigger index.
    ///
    /// Checks performed:
    ///
    /// 1. No write-write conflicts (two rules writing the same field).
    /// 2. Every trigger and written field exists in `registry`.
    pub fn new(rules: Vec<Box<dyn Rule>>, registry: &Registry) -> Result<Self, RuleTableError> {
        // 1. Write-write conflicts
        {
            let mut last_writer: IndexMap<FieldId, usize> = IndexMap::new();
            let mut conflicts = Vec::new();
            for (i, rule) in rules.iter().enumerate() {
                for field in rule.writes().iter() {
                    if let Some(&j) = last_writer.get(&field) {
                        conflicts.push(WriteConflict {
                            field,
                            first_writer: rules[j].name(),
                            second_writer: rule.name(),
                        });
                    }
                    last_writer.insert(field, i);
                }
            }
            if !conflicts.is_empty() {
                return Err(RuleTableError::WriteConflict(conflicts));
            }
        }

        // 2. Field reference existence
        for rule in &rules {
            for field in rule.triggers().iter().chain(rule.writes().iter()) {
                if registry.get(field).is_none() {
                    return Err(RuleTableError::UndefinedField {
                        rule: rule.name(),
                        field,
                    });
                }
            }
        }

        // 3. Trigger index
        let mut by_trigger = vec![SmallVec::new(); registry.len()];
        for (i, rule) in rules.iter().enumerate() {
            for field in rule.triggers().iter() {
                by_trigger[field.index()].push(i);
            }
        }

        Ok(Self { rules, by_trigger })
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at `index`.
    pub fn rule(&self, index: usize) -> &dyn Rule {
        self.rules[index].as_ref()
    }

    /// Indices of the rules fired by a change of `field`.
    pub fn triggered_by(&self, field: FieldId) -> &[usize] {
        self.by_trigger
            .get(field.index())
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    /// Rule names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name())
    }
}

impl std::fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleTable")
            .field("rules", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

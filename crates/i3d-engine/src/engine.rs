//! Assignment, fixed-point propagation and the post-propagation audit.
//!
//! Every [`Engine::set`] is all-or-nothing: the assignment and everything it
//! triggers are applied to a staged copy of the state, audited, and only
//! then committed. On any error the caller's state is untouched.

use std::collections::VecDeque;

use i3d_core::{
    AxisFields, FieldId, FieldValue, InvariantError, LookupError, Registry, ValidationError,
};
use i3d_mesh::{divisors, validate_point_count};
use thiserror::Error;
use tracing::debug;

use crate::config::EngineConfig;
use crate::rule::{Change, Origin, Patch, Rule};
use crate::rules::{intervals, standard_rules, Footprint, LesToggle, PERIODIC};
use crate::state::State;
use crate::table::{RuleTable, RuleTableError};

/// Relative tolerance of the `d · m == l` audit.
pub const TRIAD_TOLERANCE: f64 = 1e-9;

/// Why an assignment failed. The state is unchanged.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetError {
    /// Unknown field name.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// The value was rejected before anything changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Propagation could not reach a consistent state.
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

/// Validates assignments and propagates their consequences.
#[derive(Debug)]
pub struct Engine {
    registry: &'static Registry,
    rules: RuleTable,
    config: EngineConfig,
    les: LesToggle,
    footprint: Footprint,
}

impl Engine {
    /// Engine over the standard schema and rule set.
    pub fn new(config: EngineConfig) -> Self {
        let registry = Registry::standard();
        Self::with_rules(config, standard_rules(registry, config.precision))
            .expect("standard rule table has no conflicts")
    }

    /// Engine over the standard schema with a custom rule list.
    pub fn with_rules(
        config: EngineConfig,
        rules: Vec<Box<dyn Rule>>,
    ) -> Result<Self, RuleTableError> {
        let registry = Registry::standard();
        Ok(Self {
            registry,
            rules: RuleTable::new(rules, registry)?,
            config,
            les: LesToggle::new(registry),
            footprint: Footprint::new(registry, config.precision),
        })
    }

    /// The schema this engine validates against.
    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    /// The validated rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registry defaults with every derived field and lock initialised.
    pub fn initial_state(&self) -> State {
        let reg = self.registry;
        let mut state = State::new(reg.defaults());
        for axis in reg.axes() {
            let periodic = axis
                .boundary_fields()
                .iter()
                .all(|&f| state.int(f) == PERIODIC);
            state.replace(axis.periodic, periodic.into());
        }
        let ncores = state.int(reg.id("ncores"));
        state.set_decomposition(divisors(ncores.max(0) as u64).collect());
        let les_enabled = state.int(reg.id("ilesmod")) != 0;
        let (writes, locks, _) = self.les.patch_for(les_enabled).into_parts();
        for (field, value) in writes {
            state.replace(field, value);
        }
        for (field, locked) in locks {
            state.set_locked(field, locked);
        }
        let size = self.footprint.render(&state);
        state.replace(self.footprint.size_field(), size.into());
        state
    }

    /// Assign `value` to the field called `name`.
    pub fn set(
        &self,
        state: &mut State,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), SetError> {
        let id = self.registry.id_of(name)?;
        self.set_id(state, id, value.into())
    }

    /// Assign `value` to `field`.
    ///
    /// Checks, in order: the value equals the current one (no-op, never an
    /// error), kind and bounds, derived fields, locked fields, mesh validity
    /// of point counts, and scalar boundary conditions on periodic axes.
    pub fn set_id(
        &self,
        state: &mut State,
        field: FieldId,
        value: FieldValue,
    ) -> Result<(), SetError> {
        let desc = self.registry.get(field).ok_or_else(|| LookupError {
            name: field.to_string(),
        })?;
        if let Ok(v) = value.clone().coerce_to(desc.kind) {
            if &v == state.get(field) {
                return Ok(());
            }
        }
        let value = desc.check(value)?;
        if desc.is_derived() {
            return Err(ValidationError::ReadOnly {
                field: desc.name.to_string(),
            }
            .into());
        }
        if state.is_locked(field) {
            return Err(ValidationError::Locked {
                field: desc.name.to_string(),
            }
            .into());
        }
        if let Some(axis) = self.registry.axis_of(field) {
            self.check_point_count(state, axis, field, &value)?;
            if axis.is_scalar_boundary(field) && state.boolean(axis.periodic) {
                let code = value.as_int().unwrap_or_default();
                if code != PERIODIC {
                    return Err(ValidationError::PeriodicAxis {
                        field: desc.name.to_string(),
                        value: code,
                        axis: axis.axis.letter(),
                    }
                    .into());
                }
            }
        }

        let mut staged = state.clone();
        self.propagate(&mut staged, field, value)?;
        self.audit(&staged)?;
        *state = staged;
        Ok(())
    }

    fn check_point_count(
        &self,
        state: &State,
        axis: &AxisFields,
        field: FieldId,
        value: &FieldValue,
    ) -> Result<(), ValidationError> {
        if field != axis.point_count {
            return Ok(());
        }
        let n = value.as_int().unwrap_or_default();
        validate_point_count(n.max(0) as u64, state.boolean(axis.periodic)).map_err(|e| {
            ValidationError::InvalidPointCount {
                field: self.registry.descriptor(field).name.to_string(),
                value: n,
                reason: e.to_string(),
            }
        })
    }

    fn propagate(
        &self,
        staged: &mut State,
        field: FieldId,
        value: FieldValue,
    ) -> Result<(), InvariantError> {
        let mut queue = VecDeque::new();
        let old = staged.replace(field, value.clone());
        queue.push_back(Change {
            field,
            old,
            new: value,
            origin: Origin::User,
        });

        let mut steps = 0;
        while let Some(change) = queue.pop_front() {
            for &index in self.rules.triggered_by(change.field) {
                if change.origin == Origin::Rule(index) {
                    continue;
                }
                steps += 1;
                if steps > self.config.max_steps {
                    return Err(InvariantError::StepLimit {
                        max_steps: self.config.max_steps,
                    });
                }
                let rule = self.rules.rule(index);
                let patch = rule.apply(&change, staged);
                self.apply_patch(staged, index, patch, &mut queue)?;
            }
        }
        Ok(())
    }

    fn apply_patch(
        &self,
        staged: &mut State,
        index: usize,
        patch: Patch,
        queue: &mut VecDeque<Change>,
    ) -> Result<(), InvariantError> {
        let rule = self.rules.rule(index);
        let declared = rule.writes();
        let (writes, locks, decomposition) = patch.into_parts();
        for (field, value) in writes {
            let desc = match self.registry.get(field) {
                Some(desc) if declared.contains(field) => desc,
                _ => {
                    return Err(InvariantError::UndeclaredWrite {
                        rule: rule.name(),
                        field: self
                            .registry
                            .get(field)
                            .map_or_else(|| field.to_string(), |d| d.name.to_string()),
                    })
                }
            };
            let rejected = |source| InvariantError::RejectedWrite {
                rule: rule.name(),
                field: desc.name.to_string(),
                source,
            };
            let value = desc.check(value).map_err(rejected)?;
            if let Some(axis) = self.registry.axis_of(field) {
                self.check_point_count(staged, axis, field, &value)
                    .map_err(rejected)?;
            }
            if staged.get(field) == &value {
                continue;
            }
            debug!(rule = rule.name(), field = desc.name, %value, "propagated write");
            let old = staged.replace(field, value.clone());
            queue.push_back(Change {
                field,
                old,
                new: value,
                origin: Origin::Rule(index),
            });
        }
        for (field, locked) in locks {
            staged.set_locked(field, locked);
        }
        if let Some(candidates) = decomposition {
            staged.set_decomposition(candidates);
        }
        Ok(())
    }

    /// Check the cross-field invariants of `state`.
    ///
    /// Run after every propagation; also useful on states assembled by hand.
    pub fn audit(&self, state: &State) -> Result<(), InvariantError> {
        let reg = self.registry;
        let inconsistent = |detail: String| InvariantError::Inconsistent { detail };
        for axis in reg.axes() {
            let letter = axis.axis.letter();
            let codes = axis.boundary_fields().map(|f| state.int(f));
            let zeros = codes.iter().filter(|&&c| c == PERIODIC).count();
            let periodic = state.boolean(axis.periodic);
            let coherent = (zeros == 0 && !periodic) || (zeros == codes.len() && periodic);
            if !coherent {
                return Err(inconsistent(format!(
                    "axis {letter}: boundary conditions {codes:?} with periodic flag {periodic}"
                )));
            }

            let n = state.int(axis.point_count);
            validate_point_count(n.max(0) as u64, periodic)
                .map_err(|e| inconsistent(format!("axis {letter}: {e}")))?;

            let m = intervals(n, periodic) as f64;
            let d = state.float(axis.resolution);
            let l = state.float(axis.domain_length);
            let derived = d * m;
            if (derived - l).abs() > TRIAD_TOLERANCE * l.abs().max(derived.abs()) {
                return Err(inconsistent(format!(
                    "axis {letter}: resolution {d} × {m} intervals != domain length {l}"
                )));
            }
        }

        let ncores = state.int(reg.id("ncores"));
        let p_row = state.int(reg.id("p_row"));
        let p_col = state.int(reg.id("p_col"));
        if p_row != 0 && p_col != 0 && p_row * p_col != ncores {
            return Err(inconsistent(format!(
                "decomposition {p_row} × {p_col} != {ncores} cores"
            )));
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

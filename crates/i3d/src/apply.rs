//! Bulk assignment ordering.
//!
//! A bulk apply runs in three phases:
//!
//! 1. Boundary conditions, per axis. If any entry makes the axis periodic,
//!    that entry wins and the axis's non-periodic entries are skipped.
//!    Otherwise velocity entries are applied, then scalar entries, each in
//!    source order.
//! 2. `ncores`: an explicit entry, or the product of a fully nonzero
//!    `p_row`/`p_col` pair read from a file.
//! 3. Everything else in source order.
//!
//! Point counts are validated against the periodicity in force when they
//! are applied, which is why boundary conditions go first.

use i3d_core::{FieldId, FieldValue, ValidationError};
use i3d_engine::{Engine, SetError, State};
use tracing::warn;

use crate::error::ParameterError;
use crate::report::{ApplyReport, SkipReason, Skipped};

/// Where an entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Source {
    /// Read from a parameter file. Only grouped fields are applied.
    File,
    /// Given explicitly by the caller.
    Override,
}

/// One `key = value` to apply.
#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) key: String,
    pub(crate) value: FieldValue,
    pub(crate) source: Source,
}

impl Entry {
    pub(crate) fn new(key: impl Into<String>, value: FieldValue, source: Source) -> Self {
        Self {
            key: key.into(),
            value,
            source,
        }
    }
}

struct Resolved {
    entry: Entry,
    id: FieldId,
    done: bool,
}

/// Apply `entries` to `state` in bulk order. Stops at the first failing
/// assignment; the caller decides whether to keep the partial state.
pub(crate) fn apply_bulk(
    engine: &Engine,
    state: &mut State,
    entries: Vec<Entry>,
) -> Result<ApplyReport, ParameterError> {
    let reg = engine.registry();
    let mut report = ApplyReport::default();

    let mut resolved = Vec::with_capacity(entries.len());
    for entry in entries {
        let Ok(id) = reg.id_of(&entry.key) else {
            warn!(key = %entry.key, "unknown parameter, ignored");
            report.unknown.push(entry.key);
            continue;
        };
        let desc = reg.descriptor(id);
        if entry.source == Source::File && !desc.is_grouped() {
            let reason = if desc.is_derived() {
                SkipReason::Derived
            } else {
                SkipReason::Auxiliary
            };
            skip(&mut report, entry.key, reason);
            continue;
        }
        resolved.push(Resolved {
            entry,
            id,
            done: false,
        });
    }

    // Phase 1: boundary conditions.
    for axis in reg.axes() {
        let on_axis: Vec<usize> = (0..resolved.len())
            .filter(|&i| axis.boundary_fields().contains(&resolved[i].id))
            .collect();
        let periodic = on_axis
            .iter()
            .copied()
            .find(|&i| resolved[i].entry.value.as_int() == Some(0));
        let order: Vec<usize> = match periodic {
            Some(winner) => {
                for &i in &on_axis {
                    let r = &mut resolved[i];
                    if i != winner && r.entry.value.as_int() != Some(0) {
                        warn!(
                            key = %r.entry.key,
                            axis = %axis.axis,
                            "axis is periodic in this apply, non-periodic condition skipped"
                        );
                        r.done = true;
                        report.skipped.push(Skipped {
                            key: r.entry.key.clone(),
                            reason: SkipReason::BoundaryConflict,
                        });
                    }
                }
                std::iter::once(winner)
                    .chain(on_axis.iter().copied().filter(|&i| i != winner))
                    .filter(|&i| !resolved[i].done)
                    .collect()
            }
            None => {
                let (scalar, velocity): (Vec<usize>, Vec<usize>) = on_axis
                    .iter()
                    .partition(|&&i| axis.is_scalar_boundary(resolved[i].id));
                velocity.into_iter().chain(scalar).collect()
            }
        };
        for i in order {
            apply_one(engine, state, &mut resolved[i], &mut report)?;
        }
    }

    // Phase 2: core count.
    let ncores = reg.id("ncores");
    let explicit: Vec<usize> = (0..resolved.len())
        .filter(|&i| resolved[i].id == ncores)
        .collect();
    if explicit.is_empty() {
        if let Some(product) = inferred_ncores(engine, &resolved) {
            engine
                .set_id(state, ncores, FieldValue::Int(product))
                .map_err(|source| ParameterError::Assignment {
                    key: "ncores".to_string(),
                    source,
                })?;
        }
    } else {
        for i in explicit {
            apply_one(engine, state, &mut resolved[i], &mut report)?;
        }
    }

    // Phase 3: the rest.
    for r in resolved.iter_mut() {
        apply_one(engine, state, r, &mut report)?;
    }
    Ok(report)
}

/// `p_row · p_col` when a file supplies both as nonzero integers.
fn inferred_ncores(engine: &Engine, resolved: &[Resolved]) -> Option<i64> {
    let reg = engine.registry();
    let last_from_file = |id: FieldId| {
        resolved
            .iter()
            .rev()
            .find(|r| r.id == id && r.entry.source == Source::File)
            .and_then(|r| r.entry.value.as_int())
    };
    let p_row = last_from_file(reg.id("p_row"))?;
    let p_col = last_from_file(reg.id("p_col"))?;
    (p_row > 0 && p_col > 0).then(|| p_row.saturating_mul(p_col))
}

fn apply_one(
    engine: &Engine,
    state: &mut State,
    r: &mut Resolved,
    report: &mut ApplyReport,
) -> Result<(), ParameterError> {
    if r.done {
        return Ok(());
    }
    r.done = true;
    match engine.set_id(state, r.id, r.entry.value.clone()) {
        Ok(()) => Ok(()),
        Err(SetError::Validation(ValidationError::Locked { .. })) => {
            skip(report, r.entry.key.clone(), SkipReason::Locked);
            Ok(())
        }
        Err(SetError::Validation(ValidationError::PeriodicAxis { .. })) => {
            skip(report, r.entry.key.clone(), SkipReason::BoundaryConflict);
            Ok(())
        }
        Err(source) => Err(ParameterError::Assignment {
            key: r.entry.key.clone(),
            source,
        }),
    }
}

fn skip(report: &mut ApplyReport, key: String, reason: SkipReason) {
    warn!(key = %key, reason = %reason, "parameter skipped");
    report.skipped.push(Skipped { key, reason });
}

//! Builder for [`ParameterSet`].

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use i3d_core::{FieldValue, Precision, Registry};
use i3d_engine::{Engine, EngineConfig};
use i3d_namelist::Format;

use crate::apply::{apply_bulk, Entry, Source};
use crate::error::ParameterError;
use crate::params::{file_entries, ParameterSet};
use crate::report::ApplyReport;

/// Collects overrides, an optional file and engine settings, then builds a
/// [`ParameterSet`] in one bulk apply.
///
/// With a file, boundary-condition overrides are applied first, then the
/// file, then every override again, so explicit values win over the file.
///
/// ```
/// use i3d::prelude::*;
///
/// let (params, report) = ParameterSet::builder()
///     .set("nx", 128)
///     .set("xlx", 8.0)
///     .set("nclx1", 0)
///     .precision(Precision::F32)
///     .build()
///     .unwrap();
/// assert!(report.is_clean());
/// assert!(params.is_periodic(Axis::X));
/// assert_eq!(params.int("nx"), Some(128));
/// assert!((params.float("dx").unwrap() - 0.0625).abs() < 1e-12);
/// ```
#[derive(Debug, Default)]
pub struct ParameterSetBuilder {
    overrides: Vec<(String, FieldValue)>,
    file: Option<PathBuf>,
    config: EngineConfig,
}

impl ParameterSetBuilder {
    /// Override one parameter. Later overrides of the same key win.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.overrides.push((name.into(), value.into()));
        self
    }

    /// Load this `.i3d` or `.prm` file.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Solver precision for the footprint estimate.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.config.precision = precision;
        self
    }

    /// Propagation step budget per assignment.
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.config.max_steps = max_steps;
        self
    }

    /// Build the set. Unknown keys and skipped keys are reported, not
    /// errors.
    pub fn build(self) -> Result<(ParameterSet, ApplyReport), ParameterError> {
        let engine = Arc::new(Engine::new(self.config));
        let mut state = engine.initial_state();

        let overrides: Vec<Entry> = self
            .overrides
            .into_iter()
            .map(|(key, value)| Entry::new(key, value, Source::Override))
            .collect();

        let report = match self.file {
            None => apply_bulk(&engine, &mut state, overrides)?,
            Some(path) => {
                let format = Format::from_path(&path)?;
                let text = fs::read_to_string(&path)?;
                let from_file = file_entries(&text, format)?;

                // The file is read under the overridden periodicity, and the
                // boundary overrides are applied again so the file cannot
                // undo them. The final pass reports them once.
                let bc: Vec<Entry> = overrides
                    .iter()
                    .filter(|e| is_boundary_field(&e.key))
                    .cloned()
                    .collect();
                apply_bulk(&engine, &mut state, bc)?;
                let mut report = apply_bulk(&engine, &mut state, from_file)?;
                report.merge(apply_bulk(&engine, &mut state, overrides)?);
                report
            }
        };
        Ok((ParameterSet::from_parts(engine, state), report))
    }
}

fn is_boundary_field(name: &str) -> bool {
    let reg = Registry::standard();
    reg.id_of(name)
        .is_ok_and(|id| reg.axes().iter().any(|a| a.boundary_fields().contains(&id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use i3d_core::Axis;

    #[test]
    fn overrides_apply_in_bulk_order() {
        // nx = 16 is only legal because the BC phase runs first.
        let (p, report) = ParameterSet::builder()
            .set("nx", 16)
            .set("nclxn", 0)
            .build()
            .unwrap();
        assert!(report.is_clean());
        assert!(p.is_periodic(Axis::X));
        assert_eq!(p.int("nx"), Some(16));
    }

    #[test]
    fn unknown_keys_are_reported() {
        let (p, report) = ParameterSet::builder()
            .set("nx", 33)
            .set("not_a_parameter", 1)
            .build()
            .unwrap();
        assert_eq!(report.unknown, ["not_a_parameter"]);
        assert_eq!(p.int("nx"), Some(33));
    }

    #[test]
    fn explicit_ncores_before_decomposition() {
        let (p, _) = ParameterSet::builder()
            .set("p_row", 4)
            .set("ncores", 16)
            .build()
            .unwrap();
        assert_eq!(p.int("p_row"), Some(4));
        assert_eq!(p.int("p_col"), Some(4));
    }

    #[test]
    fn precision_and_step_budget_reach_the_engine() {
        let (p, _) = ParameterSet::builder()
            .precision(Precision::F32)
            .max_steps(128)
            .build()
            .unwrap();
        assert_eq!(p.precision(), Precision::F32);
        assert_eq!(p.config().max_steps, 128);
    }

    #[test]
    fn failing_override_names_its_key() {
        match ParameterSet::builder().set("itype", 11).build() {
            Err(ParameterError::Assignment { key, .. }) => assert_eq!(key, "itype"),
            other => panic!("expected Assignment error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match ParameterSet::builder().file("does/not/exist.i3d").build() {
            Err(ParameterError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}

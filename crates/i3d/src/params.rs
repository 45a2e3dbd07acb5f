//! The parameter set.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use i3d_core::{Axis, FieldValue, Group, LookupError, Precision, Registry};
use i3d_engine::{Engine, EngineConfig, SetError, State};
use i3d_namelist::{write_i3d, EntryOut, Format, RawValue, SectionOut, UnsupportedFormat};
use tracing::info;

use crate::apply::{apply_bulk, Entry, Source};
use crate::bc::{variable_kind, AxisBc, BoundaryConditions, Stretching};
use crate::builder::ParameterSetBuilder;
use crate::error::ParameterError;
use crate::report::ApplyReport;
use crate::view::AxisView;

/// A complete, consistent solver configuration.
///
/// Every mutation goes through the constraint engine and is all-or-nothing:
/// after any call, successful or not, every invariant holds.
///
/// ```
/// use i3d::prelude::*;
///
/// let mut params = ParameterSet::new();
/// params.set("nx", 181).unwrap();
/// params.set("xlx", 18.0).unwrap();
/// assert!((params.float("dx").unwrap() - 0.1).abs() < 1e-12);
///
/// // 180 points leave 179 intervals, which no FFT can handle.
/// assert!(params.set("nx", 180).is_err());
/// assert_eq!(params.int("nx"), Some(181));
/// ```
#[derive(Clone)]
pub struct ParameterSet {
    engine: Arc<Engine>,
    state: State,
}

impl ParameterSet {
    /// Defaults, with derived fields initialised.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Defaults under a custom engine configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let engine = Arc::new(Engine::new(config));
        let state = engine.initial_state();
        Self { engine, state }
    }

    /// Start a builder.
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::default()
    }

    fn registry(&self) -> &'static Registry {
        self.engine.registry()
    }

    // ── Mutation ──────────────────────────────────────────────────

    /// Assign one parameter and propagate its consequences.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), SetError> {
        self.engine.set(&mut self.state, name, value)
    }

    /// Load a `.i3d` or `.prm` file.
    ///
    /// Nothing is applied unless the whole file is. Auxiliary and derived
    /// keys are skipped; unknown keys are reported.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<ApplyReport, ParameterError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let report = self.load_str(&text, format)?;
        info!(path = %path.display(), "parameters loaded");
        Ok(report)
    }

    /// Load from text in the given format. Same semantics as [`load`](Self::load).
    pub fn load_str(&mut self, text: &str, format: Format) -> Result<ApplyReport, ParameterError> {
        let entries = file_entries(text, format)?;
        let mut staged = self.state.clone();
        let report = apply_bulk(&self.engine, &mut staged, entries)?;
        self.state = staged;
        Ok(report)
    }

    /// Write the canonical `.i3d` text to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ParameterError> {
        let path = path.as_ref();
        if Format::from_path(path)? != Format::Primary {
            return Err(UnsupportedFormat {
                path: path.to_path_buf(),
            }
            .into());
        }
        fs::write(path, self.to_i3d())?;
        info!(path = %path.display(), "parameters saved");
        Ok(())
    }

    /// Canonical `.i3d` text: every grouped field, group by group, in
    /// declaration order.
    pub fn to_i3d(&self) -> String {
        let reg = self.registry();
        let sections: Vec<SectionOut<'_>> = Group::ALL
            .iter()
            .map(|&group| SectionOut {
                name: group.section_name(),
                entries: reg
                    .all_in_group(group)
                    .into_iter()
                    .map(|name| {
                        let id = reg.id(name);
                        EntryOut {
                            key: name,
                            value: RawValue::from(self.state.get(id)),
                            description: reg.descriptor(id).description,
                        }
                    })
                    .collect(),
            })
            .collect();
        write_i3d(&sections)
    }

    // ── Views ─────────────────────────────────────────────────────

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Result<&FieldValue, LookupError> {
        let id = self.registry().id_of(name)?;
        Ok(self.state.get(id))
    }

    /// Integer value of `name`, or `None` if unknown or not an integer.
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).ok()?.as_int()
    }

    /// Float value of `name`, or `None` if unknown or not a float.
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).ok()?.as_float()
    }

    /// Boolean value of `name`, or `None` if unknown or not a boolean.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).ok()?.as_bool()
    }

    /// String value of `name`, or `None` if unknown or not a string.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).ok()?.as_str()
    }

    /// List value of `name`, or `None` if unknown or not a list.
    pub fn float_list(&self, name: &str) -> Option<&[f64]> {
        self.get(name).ok()?.as_float_list()
    }

    /// Mesh parameters along `axis`.
    pub fn axis(&self, axis: Axis) -> AxisView<'_> {
        AxisView::new(self.registry().axis(axis), &self.state)
    }

    /// Whether `axis` is periodic.
    pub fn is_periodic(&self, axis: Axis) -> bool {
        self.axis(axis).is_periodic()
    }

    /// Legal point counts along `axis` under its current periodicity.
    pub fn point_count_candidates(&self, axis: Axis) -> &'static [u64] {
        self.axis(axis).point_count_candidates()
    }

    /// Legal `p_row`/`p_col` values for the current `ncores`, `0` first.
    pub fn decomposition_candidates(&self) -> &[u64] {
        self.state.decomposition_candidates()
    }

    /// Whether `name` can be assigned a new value right now.
    pub fn is_editable(&self, name: &str) -> Result<bool, LookupError> {
        let id = self.registry().id_of(name)?;
        Ok(!self.registry().descriptor(id).is_derived() && !self.state.is_locked(id))
    }

    /// Estimated disk usage of the run, e.g. `"400.0 MB"`.
    pub fn footprint(&self) -> &str {
        self.string("size").unwrap_or_default()
    }

    /// Every parameter and its value, in declaration order.
    pub fn mapping(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.registry()
            .iter()
            .map(|(id, desc)| (desc.name, self.state.get(id)))
    }

    /// Precision the footprint is computed for.
    pub fn precision(&self) -> Precision {
        self.engine.config().precision
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    /// Boundary conditions for the variable `name` (`ux`, `uy`, `uz`, `pp`
    /// or `phi`).
    ///
    /// Velocity components are antisymmetric (`npaire = 0`) along their own
    /// axis. `phi` uses the scalar conditions. Any other name gets the
    /// velocity conditions with `npaire = 1` throughout.
    pub fn boundary_condition_for(&self, name: &str) -> BoundaryConditions {
        let (scalar, antisymmetric) = variable_kind(name);
        let entry = |axis: Axis| {
            let view = self.axis(axis);
            let (ncl1, ncln) = if scalar {
                view.scalar_bc()
            } else {
                view.velocity_bc()
            };
            let stretching = (axis == Axis::Y).then(|| Stretching {
                istret: self.int("istret").unwrap_or_default(),
                beta: self.float("beta").unwrap_or_default(),
            });
            AxisBc {
                ncl1,
                ncln,
                npaire: if antisymmetric == Some(axis) { 0 } else { 1 },
                stretching,
            }
        };
        BoundaryConditions {
            x: entry(Axis::X),
            y: entry(Axis::Y),
            z: entry(Axis::Z),
        }
    }

    pub(crate) fn from_parts(engine: Arc<Engine>, state: State) -> Self {
        Self { engine, state }
    }
}

/// Flat mapping of `text` as file-sourced entries.
pub(crate) fn file_entries(text: &str, format: Format) -> Result<Vec<Entry>, ParameterError> {
    Ok(format
        .parse(text)?
        .into_iter()
        .map(|(key, raw)| Entry::new(key, raw.into(), Source::File))
        .collect())
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ParameterSet {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.config() == other.config()
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_i3d())
    }
}

impl fmt::Debug for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.mapping()).finish()
    }
}

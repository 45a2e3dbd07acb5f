//! The standard parameter schema.
//!
//! [`Registry::standard`] builds the schema once per process and hands out a
//! `&'static` reference. Lookup is by name through an [`IndexMap`], so
//! iteration follows declaration order, which is also serialization order
//! within a group.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::axis::{Axis, AxisFields};
use crate::error::LookupError;
use crate::field::{FieldDescriptor, FieldValue};
use crate::group::Group;
use crate::id::FieldId;

/// Immutable table of field descriptors.
#[derive(Debug)]
pub struct Registry {
    fields: Vec<FieldDescriptor>,
    by_name: IndexMap<&'static str, FieldId>,
    axes: [AxisFields; 3],
}

static STANDARD: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// The standard schema, built on first use.
    pub fn standard() -> &'static Registry {
        STANDARD.get_or_init(|| Self::from_descriptors(standard_fields()))
    }

    fn from_descriptors(fields: Vec<FieldDescriptor>) -> Self {
        let by_name: IndexMap<&'static str, FieldId> = fields
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name, FieldId(i as u32)))
            .collect();
        debug_assert_eq!(by_name.len(), fields.len(), "duplicate field name");
        let resolve = |name: &str| by_name[name];
        let axis = |axis: Axis, n, d, l, s1, sn, ss1, ssn, p| AxisFields {
            axis,
            point_count: resolve(n),
            resolution: resolve(d),
            domain_length: resolve(l),
            velocity_start: resolve(s1),
            velocity_end: resolve(sn),
            scalar_start: resolve(ss1),
            scalar_end: resolve(ssn),
            periodic: resolve(p),
        };
        let axes = [
            axis(
                Axis::X,
                "nx",
                "dx",
                "xlx",
                "nclx1",
                "nclxn",
                "nclxS1",
                "nclxSn",
                "nclx",
            ),
            axis(
                Axis::Y,
                "ny",
                "dy",
                "yly",
                "ncly1",
                "nclyn",
                "nclyS1",
                "nclySn",
                "ncly",
            ),
            axis(
                Axis::Z,
                "nz",
                "dz",
                "zlz",
                "nclz1",
                "nclzn",
                "nclzS1",
                "nclzSn",
                "nclz",
            ),
        ];
        Self {
            fields,
            by_name,
            axes,
        }
    }

    /// Descriptor for `name`.
    pub fn describe(&self, name: &str) -> Result<&FieldDescriptor, LookupError> {
        self.id_of(name).map(|id| self.descriptor(id))
    }

    /// Id for `name`.
    pub fn id_of(&self, name: &str) -> Result<FieldId, LookupError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| LookupError {
                name: name.to_string(),
            })
    }

    /// Descriptor for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn descriptor(&self, id: FieldId) -> &FieldDescriptor {
        &self.fields[id.index()]
    }

    /// Descriptor for `id`, or `None` if out of range.
    pub fn get(&self, id: FieldId) -> Option<&FieldDescriptor> {
        self.fields.get(id.index())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false` for the standard schema.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All descriptors with their ids, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldDescriptor)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, d)| (FieldId(i as u32), d))
    }

    /// Names of the fields in `group`, in declaration order.
    pub fn all_in_group(&self, group: Group) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|d| d.group == Some(group))
            .map(|d| d.name)
            .collect()
    }

    /// Field ids for one axis.
    pub fn axis(&self, axis: Axis) -> &AxisFields {
        &self.axes[axis.index()]
    }

    /// Field ids for all three axes.
    pub fn axes(&self) -> &[AxisFields; 3] {
        &self.axes
    }

    /// The axis `field` belongs to, if it is one of the per-axis fields.
    pub fn axis_of(&self, field: FieldId) -> Option<&AxisFields> {
        self.axes.iter().find(|a| {
            a.triad().contains(&field) || a.boundary_fields().contains(&field) || a.periodic == field
        })
    }

    /// Id for a name known to be declared.
    ///
    /// # Panics
    ///
    /// Panics if the name is not declared.
    pub fn id(&self, name: &str) -> FieldId {
        self.by_name[name]
    }

    /// Default value of every field, indexed by [`FieldId`].
    pub fn defaults(&self) -> Vec<FieldValue> {
        self.fields.iter().map(|d| d.default.clone()).collect()
    }
}

fn standard_fields() -> Vec<FieldDescriptor> {
    use Group::*;
    fn f(
        name: &'static str,
        default: impl Into<FieldValue>,
        group: Option<Group>,
        description: &'static str,
    ) -> FieldDescriptor {
        FieldDescriptor::new(name, default, group, description)
    }
    let bc = |name, description| f(name, 2, Some(BasicParam), description).within(0.0, 2.0);
    let scalar_bc = |name, description| f(name, 2, Some(ScalarParam), description).within(0.0, 2.0);
    let list = |name, description| f(name, Vec::<f64>::new(), Some(ScalarParam), description);

    vec![
        // ── BasicParam ──────────────────────────────────────────
        f("p_row", 0, Some(BasicParam), "Domain decomposition for parallel computation").at_least(0.0),
        f("p_col", 0, Some(BasicParam), "Domain decomposition for parallel computation").at_least(0.0),
        f("itype", 10, Some(BasicParam), "Flow configuration (Taylor-Green Vortex, Flow around a Cylinder...)")
            .within(0.0, 10.0),
        f("iin", 0, Some(BasicParam), "Defines perturbation at initial condition").within(0.0, 2.0),
        f("nx", 17, Some(BasicParam), "Number of mesh points in x direction").at_least(0.0),
        f("ny", 17, Some(BasicParam), "Number of mesh points in y direction").at_least(0.0),
        f("nz", 17, Some(BasicParam), "Number of mesh points in z direction").at_least(0.0),
        f("xlx", 1.0, Some(BasicParam), "Domain size in x direction").at_least(0.0),
        f("yly", 1.0, Some(BasicParam), "Domain size in y direction").at_least(0.0),
        f("zlz", 1.0, Some(BasicParam), "Domain size in z direction").at_least(0.0),
        bc("nclx1", "Velocity boundary condition at begin of x direction"),
        bc("nclxn", "Velocity boundary condition at end of x direction"),
        bc("ncly1", "Velocity boundary condition at begin of y direction"),
        bc("nclyn", "Velocity boundary condition at end of y direction"),
        bc("nclz1", "Velocity boundary condition at begin of z direction"),
        bc("nclzn", "Velocity boundary condition at end of z direction"),
        f("istret", 0, Some(BasicParam), "Mesh refinement in y direction at certain location")
            .within(0.0, 3.0),
        f("beta", 1.0, Some(BasicParam), "Refinement parameter").at_least(0.0),
        f("dt", 1e-3, Some(BasicParam), "Value to time step").at_least(0.0),
        f("ifirst", 0, Some(BasicParam), "Value to first iteration").at_least(0.0),
        f("ilast", 0, Some(BasicParam), "Value to last iteration").at_least(0.0),
        f("re", 1e3, Some(BasicParam), "Reynolds number"),
        f("init_noise", 0.0, Some(BasicParam), "Value to initial noise, turbulence intensity"),
        f("inflow_noise", 0.0, Some(BasicParam), "Random amplitude value at inflow boundary, turbulence intensity"),
        f("ilesmod", 1, Some(BasicParam), "Enables Large-Eddy methodologies").within(0.0, 1.0),
        f("ivisu", 1, Some(BasicParam), "Enable store snapshots").within(0.0, 1.0),
        f("ipost", 1, Some(BasicParam), "Enables online postprocessing").within(0.0, 1.0),
        f("iibm", 0, Some(BasicParam), "Immersed boundary configuration for velocity").within(0.0, 2.0),
        f("ilmn", false, Some(BasicParam), "Enables Low Mach Number methodology (compressible flows)"),
        f("numscalar", 0, Some(BasicParam), "Number of scalar fractions").within(0.0, 9.0),
        f("gravx", 0.0, Some(BasicParam), "Value to x component in gravity unitary vector"),
        f("gravy", 0.0, Some(BasicParam), "Value to y component in gravity unitary vector"),
        f("gravz", 0.0, Some(BasicParam), "Value to z component in gravity unitary vector"),
        // ── NumOptions ──────────────────────────────────────────
        f("ifirstder", 4, Some(NumOptions), "Scheme for first order derivative").within(1.0, 4.0),
        f("isecondder", 4, Some(NumOptions), "Scheme for second order derivative").within(1.0, 5.0),
        f("ipinter", 3, Some(NumOptions), "Interpolation scheme between velocity and pressure meshes")
            .within(1.0, 3.0),
        f("itimescheme", 3, Some(NumOptions), "Scheme for time integration").within(1.0, 7.0),
        f("nu0nu", 4.0, Some(NumOptions), "Ratio between hyperviscosity/viscosity at nu (dissipation factor intensity)")
            .at_least(0.0),
        f("cnu", 0.44, Some(NumOptions), "Ratio between hyperviscosity at km=2/3pi and kc=pi (dissipation factor range)")
            .at_least(0.0),
        // ── InOutParam ──────────────────────────────────────────
        f("irestart", 0, Some(InOutParam), "Flag to read initial flow field").within(0.0, 1.0),
        f("nvisu", 1, Some(InOutParam), "Size for visual collection").at_least(1.0),
        f("icheckpoint", 1000, Some(InOutParam), "Frequency for writing backup file").at_least(1.0),
        f("ioutput", 1000, Some(InOutParam), "Frequency for visualization file").at_least(1.0),
        f("iprocessing", 1000, Some(InOutParam), "Frequency for online postprocessing").at_least(1.0),
        // ── ScalarParam ─────────────────────────────────────────
        list("sc", "Schmidt number(s)"),
        list("ri", "Richardson number(s)"),
        list("uset", "Settling velocity(ies)"),
        list("cp", "Initial concentration(s)"),
        list("scalar_lbound", "Lower scalar bound"),
        list("scalar_ubound", "Upper scalar bound"),
        f("iibmS", 0, Some(ScalarParam), "Immersed boundary configuration for scalar (alpha version)")
            .within(0.0, 3.0),
        scalar_bc("nclxS1", "Scalar boundary condition at begin of x direction"),
        scalar_bc("nclxSn", "Scalar boundary condition at end of x direction"),
        scalar_bc("nclyS1", "Scalar boundary condition at begin of y direction"),
        scalar_bc("nclySn", "Scalar boundary condition at end of y direction"),
        scalar_bc("nclzS1", "Scalar boundary condition at begin of z direction"),
        scalar_bc("nclzSn", "Scalar boundary condition at end of z direction"),
        // ── LESModel ────────────────────────────────────────────
        f("jles", 0, Some(LesModel), "LES model").within(0.0, 4.0),
        // ── ibmstuff ────────────────────────────────────────────
        f("nobjmax", 1, Some(IbmStuff), "Maximum number of objects in any direction").at_least(0.0),
        f("nraf", 10, Some(IbmStuff), "Refinement constant which each axis will be multiplicated")
            .at_least(1.0),
        // ── Auxiliary inputs ────────────────────────────────────
        f("filename", "input.i3d", None, "Filename for the .i3d file"),
        f("dx", 0.0625, None, "Mesh resolution in x direction").at_least(0.0),
        f("dy", 0.0625, None, "Mesh resolution in y direction").at_least(0.0),
        f("dz", 0.0625, None, "Mesh resolution in z direction").at_least(0.0),
        f("ncores", 4, None, "Number of computational cores").at_least(1.0),
        f("ifilenameformat", 9, None, "Number of digits in snapshot filenames").at_least(1.0),
        // ── Derived ─────────────────────────────────────────────
        f("nclx", false, None, "Periodic boundary condition in x direction").derived(),
        f("ncly", false, None, "Periodic boundary condition in y direction").derived(),
        f("nclz", false, None, "Periodic boundary condition in z direction").derived(),
        f("size", "", None, "Estimated disk space for the simulation output").derived(),
    ]
}

//! Sample parameter files.
//!
//! - [`LOCK_EXCHANGE_I3D`]: a realistic `.i3d` with comments, unknown keys,
//!   indexed lists and a locked field set against its lock.
//! - [`PERIODIC_BOX_I3D`]: fully periodic cube with scalars.
//! - [`CHANNEL_PRM`]: legacy `.prm` with renamed keys.
//! - [`MALFORMED`]: broken inputs with the line each error is reported at.

/// Lock-exchange case.
///
/// `C_filter` and `ilist` are not parameters. `isecondder = 5` is skipped
/// because `ilesmod = 0` locks it.
pub const LOCK_EXCHANGE_I3D: &str = "\
! -*- mode: f90 -*-

!===================
&BasicParam
!===================

! Flow type (1=Lock-exchange, 2=TGV, 3=Channel, 4=Periodic hill, 5=Cylinder, 6=dbg-schemes)
itype = 1

C_filter = 0.49

! Domain decomposition
p_row=0               ! Row partition
p_col=0               ! Column partition

! Mesh
nx=181               ! X-direction nodes
ny=33                ! Y-direction nodes
nz=25                ! Z-direction nodes
istret = 0            ! y mesh refinement (0:no, 1:center, 2:both sides, 3:bottom)
beta = 0.259065151    ! Refinement parameter (beta)

! Domain
xlx = 18.0            ! Lx (Size of the box in x-direction)
yly = 2.0             ! Ly (Size of the box in y-direction)
zlz = 2.0             ! Lz (Size of the box in z-direction)

! Gravity vector
gravx = 0.0
gravy = -1.0
gravz = 0.0

! Boundary conditions
nclx1 = 1
nclxn = 1
ncly1 = 2
nclyn = 1
nclz1 = 1
nclzn = 1

! Flow parameters
iin = 1               ! Inflow conditions (1: classic, 2: turbinit)
re = 2236.0           ! nu=1/re (Kinematic Viscosity)
init_noise = 0.01     ! Turbulence intensity (1=100%) !! Initial condition
inflow_noise = 0.0    ! Turbulence intensity (1=100%) !! Inflow condition

! Time stepping
dt = 0.0048           ! Time step
ifirst = 1            ! First iteration
ilast = 100000        ! Last iteration

! Enable modelling tools
ilesmod=0             ! if 0 then DNS
numscalar=1           ! Number of scalars
iibm=0                ! Flag for immersed boundary method
ilmn = .TRUE.         ! Enable low Mach number

! Enable io
ivisu=1               ! Store snapshots
ipost=1               ! Do online postprocessing
/End

!====================
&NumOptions
!====================

! Spatial derivatives
ifirstder = 4         ! (1->2nd central, 2->4th central, 3->4th compact, 4-> 6th compact)
isecondder = 5        ! (5->hyperviscous 6th)
ipinter = 3
! Time scheme
itimescheme = 2       ! Time integration scheme (1->Euler,2->AB2, 3->AB3, 4->AB4,5->RK3,6->RK4)
! Dissipation control
nu0nu = 4.0           ! Ratio between hyperviscosity/viscosity at nu
cnu = 0.44            ! Ratio between hypervisvosity at k_m=2/3pi and k_c= pi

/End

!=================
&ScalarParam
!=================

!! Schmidt numbers
sc(1) = 1.0

!! Richardson numbers
ri(1) = 1.0

!! Settling velocities
uset(1) = 0.02

!! Initial concentrations
cp(1) = 1.0

/End

!=================
&InOutParam
!=================

! Basic I/O
irestart = 0          ! Read initial flow field ?
icheckpoint = 5000    ! Frequency for writing backup file
ioutput = 1667        ! Frequency for visualization
ilist = 25            ! Frequency for writing on screen
nvisu = 1             ! Size for visualisation collection
iprocessing = 20

/End
";

/// Periodic cube, 64³, two scalars, 2 × 4 decomposition.
pub const PERIODIC_BOX_I3D: &str = "\
&BasicParam
p_row = 2
p_col = 4
itype = 2
nx = 64
ny = 64
nz = 64
xlx = 6.283185307179586
yly = 6.283185307179586
zlz = 6.283185307179586
nclx1 = 0
nclxn = 0
ncly1 = 0
nclyn = 0
nclz1 = 0
nclzn = 0
numscalar = 2
/End
&ScalarParam
sc(1) = 1.0
sc(2) = 0.7
nclxS1 = 0
nclxSn = 0
nclyS1 = 0
nclySn = 0
nclzS1 = 0
nclzSn = 0
/End
";

/// Channel flow in the legacy format.
pub const CHANNEL_PRM: &str = "\
#
# INCOMPACT 3D parameters - Channel flow configuration
#
3        #itype
4.       #xlx   # Lx (Size of the box in x-direction)
2.       #yly
2.       #zlz
4200.    #re    # Reynolds number
0.125    #noise # Turbulence intensity (1=100%) !! Initial condition
0.005    #dt
128      #nx
65       #ny
32       #nz
0        #nclx
2        #ncly
0        #nclz
2        #nscheme
500      #isave
100      #imodulo
1        #ilit
9        #iprint
";

/// Broken inputs as `(text, is_i3d, line)`: `is_i3d` is false for legacy
/// text, `line` is the 1-based line the error is reported at.
pub const MALFORMED: &[(&str, bool, usize)] = &[
    ("&BasicParam\nnx = 17\n", true, 1),
    ("&BasicParam\nnx = 17\n/End\n/End\n", true, 4),
    ("&BasicParam\n&NumOptions\n/End\n", true, 2),
    ("nx = 17\n", true, 1),
    ("&BasicParam\nnx 17\n/End\n", true, 2),
    ("&BasicParam\nnx = seventeen\n/End\n", true, 2),
    ("&ScalarParam\nsc(0) = 1.0\n/End\n", true, 2),
    ("17 #nx\n17\n", false, 2),
];

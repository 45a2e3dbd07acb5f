//! Disk-footprint estimate for a run.
//!
//! Counts restart checkpoints, 3-D snapshots and, for the flow configuration
//! with online statistics planes, 2-D planes. Arithmetic is integer with
//! floor division, matching the solver's own bookkeeping.

use i3d_core::Precision;

/// Inputs to [`estimate_bytes`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FootprintInputs {
    /// Number of scalar fractions.
    pub numscalar: i64,
    /// Point counts per axis.
    pub nx: i64,
    /// See `nx`.
    pub ny: i64,
    /// See `nx`.
    pub nz: i64,
    /// Time-integration scheme.
    pub itimescheme: i64,
    /// Flow configuration.
    pub itype: i64,
    /// Last iteration.
    pub ilast: i64,
    /// Checkpoint frequency.
    pub icheckpoint: i64,
    /// Snapshot frequency.
    pub ioutput: i64,
    /// Online postprocessing frequency.
    pub iprocessing: i64,
}

/// Flow configuration that writes 2-D statistics planes.
const PLANES_ITYPE: i64 = 10;

/// Estimated bytes written by the run.
///
/// Frequencies of zero are treated as "never" rather than dividing by zero.
/// An estimate too large to represent saturates at `u128::MAX`.
pub fn estimate_bytes(inputs: &FootprintInputs, precision: Precision) -> u128 {
    checked_estimate(inputs, precision).map_or(u128::MAX, |count| count.max(0) as u128)
}

fn checked_estimate(inputs: &FootprintInputs, precision: Precision) -> Option<i128> {
    let FootprintInputs {
        numscalar,
        nx,
        ny,
        nz,
        itimescheme,
        itype,
        ilast,
        icheckpoint,
        ioutput,
        iprocessing,
    } = *inputs;
    let [ns, nx, ny, nz, ilast] = [numscalar, nx, ny, nz, ilast].map(|v| v.max(0) as i128);
    let prec = precision.size_bytes() as i128;
    let div = |num: i128, den: i64| if den > 0 { num / den as i128 } else { 0 };
    let product = |terms: &[i128]| {
        terms
            .iter()
            .try_fold(1i128, |acc, &t| acc.checked_mul(t))
    };

    // restart: velocity + scalars, times the scheme's history depth, plus pressure
    let mut count = 3 + ns;
    match itimescheme {
        3 | 7 => count *= 3,
        2 => count *= 2,
        _ => {}
    }
    count += 1;
    let checkpoints = (div(ilast, icheckpoint) - 1).max(0);
    count = product(&[count, nx, ny, nz, prec, checkpoints])?;

    // 3-D snapshots: velocity, pressure, scalars
    let snapshots = product(&[4 + ns, nx, ny, nz, prec, ilast])?;
    count = count.checked_add(div(snapshots, ioutput))?;

    if itype == PLANES_ITYPE {
        let xy = product(&[2 * (3 + ns), nx, ny, prec, ilast])?;
        let xz = product(&[3 * (3 + ns), nx, nz, prec, ilast])?;
        count = count
            .checked_add(div(xy, iprocessing))?
            .checked_add(div(xz, iprocessing))?;
    }
    Some(count)
}

/// Human-readable size: one decimal, units stepping by 1000, terabytes
/// absorbing anything larger.
pub fn format_bytes(bytes: u128) -> String {
    const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

//! FFT-compatible mesh point counts.
//!
//! The solver's FFT library accepts `2^(1+a) · 3^b · 5^c` intervals along an
//! axis. A periodic axis with `n` points has `n` intervals; a non-periodic
//! axis has `n − 1`. The derivative stencil additionally needs at least 8
//! intervals.

use std::sync::OnceLock;

use crate::error::MeshError;

/// Largest count in the non-periodic candidate table.
pub const MAX_TABLE_POINTS: u64 = 9001;

/// Smallest legal point count for the given periodicity.
pub fn min_point_count(periodic: bool) -> u64 {
    if periodic {
        8
    } else {
        9
    }
}

/// Whether `n` points are legal along an axis with the given periodicity.
pub fn is_valid_point_count(n: u64, periodic: bool) -> bool {
    validate_point_count(n, periodic).is_ok()
}

/// Check `n` and report why it is rejected.
pub fn validate_point_count(n: u64, periodic: bool) -> Result<(), MeshError> {
    let min = min_point_count(periodic);
    if n < min {
        return Err(MeshError::BelowMinimum { n, min });
    }
    let intervals = if periodic { n } else { n - 1 };
    if intervals % 2 != 0 || strip_factors(intervals / 2) != 1 {
        return Err(MeshError::NotFftCompatible {
            n,
            intervals,
            periodic,
        });
    }
    Ok(())
}

fn strip_factors(mut m: u64) -> u64 {
    for p in [2, 3, 5] {
        while m % p == 0 {
            m /= p;
        }
    }
    m
}

static NON_PERIODIC: OnceLock<Vec<u64>> = OnceLock::new();
static PERIODIC: OnceLock<Vec<u64>> = OnceLock::new();

/// Every legal point count up to the table limit, ascending.
///
/// The non-periodic table ends at [`MAX_TABLE_POINTS`]; the periodic table
/// is the same list shifted down by one.
pub fn candidate_point_counts(periodic: bool) -> &'static [u64] {
    let (cell, limit) = if periodic {
        (&PERIODIC, MAX_TABLE_POINTS - 1)
    } else {
        (&NON_PERIODIC, MAX_TABLE_POINTS)
    };
    cell.get_or_init(|| {
        (min_point_count(periodic)..=limit)
            .filter(|&n| is_valid_point_count(n, periodic))
            .collect()
    })
}

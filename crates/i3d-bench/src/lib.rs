//! Benchmark profiles for i3d.
//!
//! - [`reference_set`]: a channel-like configuration with scalars, used as
//!   the starting point for assignment benchmarks.
//! - [`reference_text`]: its canonical `.i3d` serialization.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use i3d::ParameterSet;

/// Channel-like set: 257 × 129 × 64, x and z periodic, three scalars,
/// 4 × 8 decomposition.
pub fn reference_set() -> ParameterSet {
    let (params, _) = ParameterSet::builder()
        .set("nclx1", 0)
        .set("nclz1", 0)
        .set("nx", 256)
        .set("ny", 129)
        .set("nz", 64)
        .set("xlx", 25.132741228718345)
        .set("yly", 2.0)
        .set("zlz", 8.377580409572781)
        .set("itype", 3)
        .set("numscalar", 3)
        .set("sc", vec![1.0, 0.7, 0.5])
        .set("ri", vec![0.0, 0.0, 0.0])
        .set("ncores", 32)
        .set("p_row", 4)
        .set("ilast", 200_000)
        .set("icheckpoint", 10_000)
        .set("ioutput", 2_000)
        .build()
        .expect("reference profile is consistent");
    params
}

/// Canonical `.i3d` text of [`reference_set`].
pub fn reference_text() -> String {
    reference_set().to_i3d()
}

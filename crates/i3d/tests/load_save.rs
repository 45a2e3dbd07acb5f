//! Loading fixtures and saving through the filesystem.

use i3d::prelude::*;
use i3d::{SkipReason, Skipped};
use i3d_test_utils::{
    approx_eq, one_section, CHANNEL_PRM, LOCK_EXCHANGE_I3D, MALFORMED, PERIODIC_BOX_I3D,
};
use tempfile::tempdir;

#[test]
fn lock_exchange_loads_with_report() {
    let mut p = ParameterSet::new();
    let report = p.load_str(LOCK_EXCHANGE_I3D, Format::Primary).unwrap();

    assert_eq!(report.unknown, ["C_filter", "ilist"]);
    assert_eq!(
        report.skipped,
        [Skipped {
            key: "isecondder".into(),
            reason: SkipReason::Locked
        }]
    );

    assert_eq!(p.int("nx"), Some(181));
    assert!(approx_eq(p.float("dx").unwrap(), 0.1));
    assert!(approx_eq(p.float("dy").unwrap(), 2.0 / 32.0));
    assert!(approx_eq(p.float("dz").unwrap(), 2.0 / 24.0));
    assert_eq!(p.int("isecondder"), Some(4));
    assert_eq!(p.boolean("ilmn"), Some(true));
    assert_eq!(p.float_list("sc"), Some(&[1.0][..]));
    assert_eq!(p.float_list("uset"), Some(&[0.02][..]));
    assert_eq!(p.axis(Axis::Y).velocity_bc(), (2, 1));
    assert!(p.footprint().ends_with("MB"), "{}", p.footprint());
}

#[test]
fn periodic_box_infers_core_count() {
    let mut p = ParameterSet::new();
    let report = p.load_str(PERIODIC_BOX_I3D, Format::Primary).unwrap();
    assert!(report.is_clean(), "{report:?}");
    for axis in Axis::ALL {
        let view = p.axis(axis);
        assert!(view.is_periodic());
        assert_eq!(view.point_count(), 64);
        assert!(approx_eq(view.resolution(), std::f64::consts::TAU / 64.0));
    }
    assert_eq!(p.int("ncores"), Some(8));
    assert_eq!((p.int("p_row"), p.int("p_col")), (Some(2), Some(4)));
    assert_eq!(p.decomposition_candidates(), [0, 1, 2, 4, 8]);
    assert_eq!(p.float_list("sc"), Some(&[1.0, 0.7][..]));
}

#[test]
fn legacy_channel_maps_renamed_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("incompact3d.prm");
    std::fs::write(&path, CHANNEL_PRM).unwrap();

    let mut p = ParameterSet::new();
    let report = p.load(&path).unwrap();
    assert!(report.unknown.is_empty(), "unmapped legacy keys never reach the report");

    assert_eq!(p.int("itimescheme"), Some(2));
    assert_eq!(p.int("icheckpoint"), Some(500));
    assert_eq!(p.int("ioutput"), Some(100));
    assert_eq!(p.int("irestart"), Some(1));
    assert_eq!(p.float("init_noise"), Some(0.125));
    assert!(p.is_periodic(Axis::X));
    assert!(!p.is_periodic(Axis::Y));
    assert!(p.is_periodic(Axis::Z));
    assert_eq!(p.int("nx"), Some(128));
    assert_eq!(p.int("nz"), Some(32));
}

#[test]
fn save_then_load_through_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.i3d");

    let mut original = ParameterSet::new();
    original.load_str(PERIODIC_BOX_I3D, Format::Primary).unwrap();
    original.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, original.to_i3d());
    assert_eq!(text, original.to_string());
    assert!(text.starts_with("! -*- mode: f90 -*-\n"));

    let (loaded, _) = ParameterSet::builder().file(&path).build().unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn builder_overrides_win_over_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lock.i3d");
    std::fs::write(&path, LOCK_EXCHANGE_I3D).unwrap();

    let (p, report) = ParameterSet::builder()
        .file(&path)
        .set("re", 5000.0)
        .set("nx", 361)
        .build()
        .unwrap();
    assert_eq!(report.unknown, ["C_filter", "ilist"]);
    assert_eq!(p.float("re"), Some(5000.0));
    assert_eq!(p.int("nx"), Some(361));
    assert!(approx_eq(p.float("dx").unwrap(), 0.05));
}

#[test]
fn builder_boundary_overrides_come_before_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mesh.i3d");
    // 16 points along x are only legal on a periodic axis.
    std::fs::write(&path, "&BasicParam\nnx = 16\n/End\n").unwrap();

    let (p, _) = ParameterSet::builder()
        .file(&path)
        .set("nclx1", 0)
        .build()
        .unwrap();
    assert!(p.is_periodic(Axis::X));
    assert_eq!(p.int("nx"), Some(16));
}

#[test]
fn builder_boundary_overrides_win_over_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("walls.i3d");
    let text = one_section(
        "BasicParam",
        &[("nx", "65"), ("nclx1", "2"), ("nclxn", "2"), ("ncly1", "1")],
    );
    std::fs::write(&path, text).unwrap();

    let (p, report) = ParameterSet::builder()
        .file(&path)
        .set("nclx1", 0)
        .build()
        .unwrap();
    assert!(report.is_clean(), "{report:?}");
    assert!(p.is_periodic(Axis::X));
    assert_eq!(p.int("nclx1"), Some(0));
    assert_eq!(p.int("nclxn"), Some(0));
    assert_eq!(p.int("nx"), Some(64));
    // boundary keys without an override still come from the file
    assert_eq!(p.int("ncly1"), Some(1));
}

#[test]
fn malformed_sources_report_lines_and_apply_nothing() {
    for &(text, is_i3d, line) in MALFORMED {
        let format = if is_i3d { Format::Primary } else { Format::Legacy };
        let mut p = ParameterSet::new();
        let before = p.clone();
        match p.load_str(text, format) {
            Err(ParameterError::Format(e)) => assert_eq!(e.line, line, "{text:?}"),
            other => panic!("expected a format error for {text:?}, got {other:?}"),
        }
        assert_eq!(p, before);
    }
}

#[test]
fn unsupported_extensions() {
    let mut p = ParameterSet::new();
    for name in ["params.txt", "params"] {
        match p.load(name) {
            Err(ParameterError::Unsupported(e)) => assert_eq!(e.path.to_str(), Some(name)),
            other => panic!("expected Unsupported for {name}, got {other:?}"),
        }
    }
    let dir = tempdir().unwrap();
    assert!(matches!(
        p.save(dir.path().join("out.prm")),
        Err(ParameterError::Unsupported(_))
    ));
}

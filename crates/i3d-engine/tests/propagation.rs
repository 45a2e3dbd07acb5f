//! Propagation scenarios and properties over the standard rule set.

use i3d_core::{Axis, FieldValue, Registry};
use i3d_engine::{Engine, SetError, State};
use i3d_mesh::candidate_point_counts;
use proptest::prelude::*;

fn value(e: &Engine, s: &State, name: &str) -> FieldValue {
    s.get(e.registry().id(name)).clone()
}

#[test]
fn resolution_scenario() {
    let e = Engine::default();
    let mut s = e.initial_state();
    e.set(&mut s, "nx", 181).unwrap();
    e.set(&mut s, "xlx", 18.0).unwrap();
    let dx = s.float(e.registry().id("dx"));
    assert!((dx - 0.1).abs() < 1e-12);

    e.set(&mut s, "dx", 0.2).unwrap();
    let xlx = s.float(e.registry().id("xlx"));
    assert!((xlx - 36.0).abs() < 1e-9);
    assert_eq!(value(&e, &s, "nx"), FieldValue::Int(181));
}

#[test]
fn integer_values_widen_for_float_fields() {
    let e = Engine::default();
    let mut s = e.initial_state();
    e.set(&mut s, "yly", 2).unwrap();
    assert_eq!(value(&e, &s, "yly"), FieldValue::Float(2.0));
    assert_eq!(value(&e, &s, "dy"), FieldValue::Float(0.125));
}

#[test]
fn sequential_bc_writes_last_wins() {
    let e = Engine::default();
    let mut s = e.initial_state();
    e.set(&mut s, "nclx1", 0).unwrap();
    e.set(&mut s, "nclxn", 1).unwrap();
    let x = e.registry().axis(Axis::X);
    assert!(!s.boolean(x.periodic));
    for f in x.boundary_fields() {
        assert_eq!(s.int(f), 1);
    }
}

#[test]
fn out_of_bounds_leaves_state_untouched() {
    let e = Engine::default();
    let mut s = e.initial_state();
    let before = s.clone();
    match e.set(&mut s, "itimescheme", 9) {
        Err(SetError::Validation(_)) => {}
        other => panic!("expected Validation, got {other:?}"),
    }
    assert_eq!(s, before);
}

#[test]
fn very_large_meshes_keep_a_footprint() {
    let e = Engine::default();
    let mut s = e.initial_state();
    let n = (1i64 << 42) + 1;
    for axis in ["nx", "ny", "nz"] {
        e.set(&mut s, axis, n).unwrap();
    }
    assert_eq!(value(&e, &s, "nz"), FieldValue::Int(n));
    match value(&e, &s, "size") {
        FieldValue::Str(size) => assert!(size.ends_with(" TB"), "{size}"),
        other => panic!("expected a rendered size, got {other:?}"),
    }
}

fn arb_assignment() -> impl Strategy<Value = (&'static str, FieldValue)> {
    let np = candidate_point_counts(false);
    prop_oneof![
        (0..np.len()).prop_map(move |i| ("ny", FieldValue::Int(np[i] as i64))),
        (0.1f64..100.0).prop_map(|v| ("yly", FieldValue::Float(v))),
        (0.001f64..1.0).prop_map(|v| ("dy", FieldValue::Float(v))),
        (0i64..=2).prop_map(|v| ("ncly1", FieldValue::Int(v))),
        (0i64..=2).prop_map(|v| ("nclyn", FieldValue::Int(v))),
        (1i64..=64).prop_map(|v| ("ncores", FieldValue::Int(v))),
        (0i64..=16).prop_map(|v| ("p_row", FieldValue::Int(v))),
        (0i64..=16).prop_map(|v| ("p_col", FieldValue::Int(v))),
        (0i64..=1).prop_map(|v| ("ilesmod", FieldValue::Int(v))),
        (0i64..=9).prop_map(|v| ("numscalar", FieldValue::Int(v))),
    ]
}

proptest! {
    #[test]
    fn every_committed_state_passes_audit(
        assignments in prop::collection::vec(arb_assignment(), 1..24)
    ) {
        let e = Engine::default();
        let mut s = e.initial_state();
        for (name, v) in assignments {
            let before = s.clone();
            if e.set(&mut s, name, v).is_err() {
                prop_assert_eq!(&s, &before);
            }
            prop_assert_eq!(e.audit(&s), Ok(()));
        }
    }

    #[test]
    fn assigning_current_value_is_a_no_op(
        assignments in prop::collection::vec(arb_assignment(), 0..8)
    ) {
        let e = Engine::default();
        let mut s = e.initial_state();
        for (name, v) in assignments {
            let _ = e.set(&mut s, name, v);
        }
        let reg = Registry::standard();
        for (id, d) in reg.iter() {
            let before = s.clone();
            let current = s.get(id).clone();
            prop_assert_eq!(e.set(&mut s, d.name, current), Ok(()));
            prop_assert_eq!(&s, &before);
        }
    }
}

//! Whole-schema checks over the standard registry.

use i3d_core::{FieldKind, FieldValue, Group, Registry};
use proptest::prelude::*;

#[test]
fn every_default_passes_its_own_check() {
    let reg = Registry::standard();
    for (_, d) in reg.iter() {
        assert_eq!(d.check(d.default.clone()), Ok(d.default.clone()), "{}", d.name);
    }
}

#[test]
fn every_grouped_field_is_listed_exactly_once() {
    let reg = Registry::standard();
    let listed: usize = Group::ALL.iter().map(|g| reg.all_in_group(*g).len()).sum();
    let grouped = reg.iter().filter(|(_, d)| d.is_grouped()).count();
    assert_eq!(listed, grouped);
}

#[test]
fn ids_round_trip_through_names() {
    let reg = Registry::standard();
    for (id, d) in reg.iter() {
        assert_eq!(reg.id_of(d.name), Ok(id));
    }
}

proptest! {
    #[test]
    fn integers_widen_into_float_fields(v in 0i64..1_000_000) {
        let reg = Registry::standard();
        let xlx = reg.describe("xlx").unwrap();
        prop_assert_eq!(xlx.check(FieldValue::Int(v)), Ok(FieldValue::Float(v as f64)));
    }

    #[test]
    fn bc_codes_outside_range_are_rejected(v in prop_oneof![i64::MIN..0, 3i64..i64::MAX]) {
        let reg = Registry::standard();
        let d = reg.describe("nclyn").unwrap();
        prop_assert_eq!(d.kind, FieldKind::Integer);
        prop_assert!(d.check(FieldValue::Int(v)).is_err());
    }
}

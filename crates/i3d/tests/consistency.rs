//! Cross-cutting laws of the facade: serialization round trip and bulk
//! versus sequential assignment.

use i3d::prelude::*;
use i3d::mesh::candidate_point_counts;
use i3d_test_utils::grouped_names;
use proptest::prelude::*;

#[test]
fn bulk_load_keeps_the_periodic_write() {
    let text = "&BasicParam\nnclx1 = 0\nnclxn = 1\n/End\n";
    let mut bulk = ParameterSet::new();
    let report = bulk.load_str(text, Format::Primary).unwrap();
    assert!(bulk.is_periodic(Axis::X));
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].key, "nclxn");

    let mut sequential = ParameterSet::new();
    sequential.set("nclx1", 0).unwrap();
    sequential.set("nclxn", 1).unwrap();
    assert!(!sequential.is_periodic(Axis::X));
    for name in ["nclx1", "nclxn", "nclxS1", "nclxSn"] {
        assert_eq!(sequential.int(name), Some(1), "{name}");
    }
}

#[test]
fn periodicity_flip_preserves_resolution_and_length() {
    let mut p = ParameterSet::new();
    p.set("nx", 201).unwrap();
    let (dx, xlx) = (p.float("dx"), p.float("xlx"));

    p.set("nclx1", 0).unwrap();
    assert_eq!(p.int("nx"), Some(200));
    assert_eq!((p.float("dx"), p.float("xlx")), (dx, xlx));
    assert_eq!(p.point_count_candidates(Axis::X), candidate_point_counts(true));

    p.set("nclx1", 2).unwrap();
    assert_eq!(p.int("nx"), Some(201));
    assert_eq!((p.float("dx"), p.float("xlx")), (dx, xlx));
}

#[test]
fn precision_halves_the_footprint() {
    let build = |precision| {
        ParameterSet::builder()
            .set("nx", 101)
            .set("ny", 101)
            .set("nz", 101)
            .set("ilast", 10000)
            .set("icheckpoint", 5000)
            .set("ioutput", 1000)
            .set("itype", 3)
            .precision(precision)
            .build()
            .unwrap()
            .0
    };
    assert_eq!(build(Precision::F64).footprint(), "412.1 MB");
    assert_eq!(build(Precision::F32).footprint(), "206.1 MB");
}

#[test]
fn mapping_covers_every_field_in_order() {
    let p = ParameterSet::new();
    let names: Vec<&str> = p.mapping().map(|(name, _)| name).collect();
    let registry: Vec<&str> = Registry::standard().iter().map(|(_, d)| d.name).collect();
    assert_eq!(names, registry);
}

#[derive(Clone, Debug)]
enum Op {
    Set(&'static str, FieldValue),
    /// `ncores`, then `p_row` picked among its candidates.
    Decompose(i64, prop::sample::Index),
}

impl Op {
    fn apply(self, p: &mut ParameterSet) {
        match self {
            Op::Set(name, value) => {
                let _ = p.set(name, value);
            }
            Op::Decompose(ncores, pick) => {
                if p.set("ncores", ncores).is_ok() {
                    let candidates = p.decomposition_candidates();
                    let p_row = candidates[pick.index(candidates.len())] as i64;
                    let _ = p.set("p_row", p_row);
                }
            }
        }
    }
}

fn arb_op() -> impl Strategy<Value = Op> {
    let periodic = candidate_point_counts(true);
    let open = candidate_point_counts(false);
    prop_oneof![
        (0..open.len()).prop_map(move |i| Op::Set("nx", FieldValue::Int(open[i] as i64))),
        (0..periodic.len()).prop_map(move |i| Op::Set("nz", FieldValue::Int(periodic[i] as i64))),
        (0.5f64..50.0).prop_map(|v| Op::Set("xlx", FieldValue::Float(v))),
        (0.001f64..0.5).prop_map(|v| Op::Set("dy", FieldValue::Float(v))),
        (0i64..=2).prop_map(|v| Op::Set("nclx1", FieldValue::Int(v))),
        (0i64..=2).prop_map(|v| Op::Set("nclyn", FieldValue::Int(v))),
        (0i64..=2).prop_map(|v| Op::Set("nclz1", FieldValue::Int(v))),
        (0i64..=2).prop_map(|v| Op::Set("nclzSn", FieldValue::Int(v))),
        (1i64..=48, any::<prop::sample::Index>()).prop_map(|(n, i)| Op::Decompose(n, i)),
        (0i64..=1).prop_map(|v| Op::Set("ilesmod", FieldValue::Int(v))),
        (0.0f64..10.0).prop_map(|v| Op::Set("nu0nu", FieldValue::Float(v))),
        (1i64..=5).prop_map(|v| Op::Set("isecondder", FieldValue::Int(v))),
        (0i64..=9).prop_map(|v| Op::Set("numscalar", FieldValue::Int(v))),
        prop::collection::vec(-5.0f64..5.0, 0..4)
            .prop_map(|v| Op::Set("sc", FieldValue::FloatList(v))),
        any::<bool>().prop_map(|v| Op::Set("ilmn", FieldValue::Bool(v))),
        (0.0f64..1.0).prop_map(|v| Op::Set("beta", FieldValue::Float(v))),
    ]
}

proptest! {
    #[test]
    fn serialized_sets_reload_to_the_same_grouped_values(
        ops in prop::collection::vec(arb_op(), 0..20)
    ) {
        let mut original = ParameterSet::new();
        for op in ops {
            op.apply(&mut original);
        }

        let mut reloaded = ParameterSet::new();
        reloaded.load_str(&original.to_i3d(), Format::Primary).unwrap();
        for name in grouped_names() {
            prop_assert_eq!(reloaded.get(name), original.get(name), "{}", name);
        }
        prop_assert_eq!(reloaded.to_i3d(), original.to_i3d());
    }

    #[test]
    fn assigning_the_current_value_never_fails(
        ops in prop::collection::vec(arb_op(), 0..12)
    ) {
        let mut p = ParameterSet::new();
        for op in ops {
            op.apply(&mut p);
        }
        let snapshot: Vec<(&'static str, FieldValue)> =
            p.mapping().map(|(n, v)| (n, v.clone())).collect();
        for (name, value) in snapshot {
            let before = p.clone();
            prop_assert!(p.set(name, value).is_ok());
            prop_assert_eq!(&p, &before);
        }
    }
}

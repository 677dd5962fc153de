//! Building loads from named arguments

use beammech::prelude::*;
use serde_json::{json, Value};

fn args(value: Value) -> LoadArgs {
    value.as_object().cloned().unwrap()
}

fn point(value: Value) -> LoadResult<PointLoad> {
    PointLoad::from_args(&args(value))
}

#[test]
fn mass_and_force_agree() {
    let by_mass = point(json!({"kg": 1, "pos": 200})).unwrap();
    assert_eq!(by_mass.size(), -9.81);
    assert_eq!(by_mass.pos, 200);

    let by_force = point(json!({"force": -9.81, "pos": 200})).unwrap();
    assert_eq!((by_mass.size(), by_mass.pos), (by_force.size(), by_force.pos));

    let by_force = point(json!({"force": -20, "pos": 300})).unwrap();
    assert_eq!(by_force.size(), -20.0);
    assert_eq!(by_force.pos, 300);

    assert_eq!(PointLoad::from_mass(1.0, 200), by_mass);
}

#[test]
fn numeric_strings_are_accepted() {
    let load = point(json!({"kg": "1", "pos": "200"})).unwrap();
    assert_eq!(load.size(), -9.81);
    assert_eq!(load.pos, 200);

    let dist = DistLoad::from_args(&args(json!({"force": "-500", "start": "0", "end": 1000})))
        .unwrap();
    assert_eq!(dist, DistLoad::new(-500.0, 0, 1000));

    let moment = MomentLoad::from_values(&json!("2.5e5"), &json!("1000")).unwrap();
    assert_eq!(moment, MomentLoad::new(2.5e5, 1000));
}

#[test]
fn fractional_stations_truncate() {
    let load = point(json!({"force": -1, "pos": 1000.0 / 2.0 + 0.7})).unwrap();
    assert_eq!(load.pos, 500);
}

#[test]
fn missing_arguments() {
    for bad in [
        json!({}),
        json!({"kg": -20}),
        json!({"pos": 231}),
        json!({"forse": -200, "pos": 300}),
    ] {
        let err = point(bad.clone()).unwrap_err();
        assert!(err.is_argument_error(), "{bad} gave {err}");
    }

    let err = TriangleLoad::from_args(&args(json!({"force": -1, "start": 0}))).unwrap_err();
    assert_eq!(
        err,
        LoadError::Argument {
            key: "end".to_string(),
            reason: "required argument is missing".to_string()
        }
    );
}

#[test]
fn force_and_mass_together_is_an_argument_error() {
    let err = point(json!({"force": -1, "kg": 1, "pos": 0})).unwrap_err();
    assert!(err.is_argument_error());
}

#[test]
fn unconvertible_values() {
    for bad in [
        json!({"force": -120, "pos": "end"}),
        json!({"force": "-q", "pos": 200}),
        json!({"kg": true, "pos": 200}),
        json!({"force": -1, "pos": -5}),
    ] {
        let err = point(bad.clone()).unwrap_err();
        assert!(err.is_value_error(), "{bad} gave {err}");
    }

    let err = DistLoad::from_args(&args(json!({"force": 1, "start": "x", "end": 3}))).unwrap_err();
    assert!(matches!(err, LoadError::Value { ref key, .. } if key == "start"));

    assert!(MomentLoad::from_values(&json!(1), &json!(null))
        .unwrap_err()
        .is_value_error());
}

#[test]
fn load_errors_convert_to_beam_errors() {
    fn build() -> BeamResult<Load> {
        let load = point(json!({"force": -1}))?;
        Ok(load.into())
    }
    assert!(matches!(build(), Err(BeamError::Load(ref e)) if e.is_argument_error()));
}

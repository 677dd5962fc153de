//! Problem files in JSON

use approx::assert_relative_eq;
use beammech::prelude::*;
use serde_json::{json, Value};

const L: usize = 100;

fn problem_json(supports: Value, loads: Value) -> String {
    json!({
        "length": L,
        "EI": vec![1.0e9; L + 1],
        "GA": vec![1.0e5; L + 1],
        "top": vec![10.0; L + 1],
        "bot": vec![-10.0; L + 1],
        "supports": supports,
        "shear": false,
        "loads": loads,
    })
    .to_string()
}

#[test]
fn solve_from_json() {
    let json = problem_json(
        json!([0, L]),
        json!([
            {"type": "point", "force": -100.0, "pos": 50},
            {"type": "dist", "force": -200.0, "start": 0, "end": 100}
        ]),
    );
    let mut problem = Problem::from_json(&json).unwrap();
    assert_eq!(problem.supports, Boundary::simply_supported(0, L));
    problem.solve().unwrap();

    let solution = problem.solution().unwrap();
    assert_relative_eq!(solution.total_reaction(), 300.0, epsilon = 1e-9);
    assert_eq!(solution.reactions.len(), 2);
    assert_relative_eq!(solution.reactions[0].force, 150.0, epsilon = 1e-9);

    // Midspan moment of a pinned beam, sagging: |P|·L/4 + |q|·L²/8
    let expected = 100.0 * 100.0 / 4.0 + 2.0 * 100.0 * 100.0 / 8.0;
    assert_relative_eq!(solution.moment[50], expected, max_relative = 1e-9);
}

#[test]
fn solution_is_written_back() {
    let json = problem_json(Value::Null, json!({"type": "point", "force": -1.0, "pos": 100}));
    let mut problem = Problem::from_json(&json).unwrap();

    let unsolved: Value = serde_json::from_str(&problem.to_json().unwrap()).unwrap();
    assert!(unsolved.get("solution").is_none());

    problem.solve().unwrap();
    let solved: Value = serde_json::from_str(&problem.to_json().unwrap()).unwrap();
    for key in ["V", "M", "dy", "y"] {
        assert_eq!(solved["solution"][key].as_array().unwrap().len(), L + 1, "{key}");
    }
    assert_eq!(solved["supports"], Value::Null);
}

#[test]
fn from_reader_matches_from_json() {
    let json = problem_json(json!([10, 90]), json!([]));
    let a = Problem::from_json(&json).unwrap();
    let b = Problem::from_reader(json.as_bytes()).unwrap();
    assert_eq!(a.supports, b.supports);
    assert_eq!(a.ei, b.ei);
    assert!(b.loads.is_empty());
}

#[test]
fn optional_fields_default() {
    let json = json!({"length": 2, "EI": [1.0, 1.0, 1.0]}).to_string();
    let problem = Problem::from_json(&json).unwrap();
    assert!(problem.supports.is_cantilever());
    assert!(!problem.shear);
    assert_eq!(problem.shear_factor, RECTANGULAR_SHEAR_FACTOR);
    assert!(problem.ga.is_empty());
    assert!(problem.loads.is_empty());
}

#[test]
fn rejects_bad_problem_files() {
    // Only two support stations are supported
    let json = problem_json(json!([0, 50, 100]), json!([]));
    assert!(matches!(
        Problem::from_json(&json),
        Err(BeamError::SerializationError(_))
    ));

    let json = problem_json(json!([0, 200]), json!([]));
    assert!(matches!(
        Problem::from_json(&json),
        Err(BeamError::InvalidSupports(_))
    ));

    let json = problem_json(Value::Null, json!({"type": "point", "force": -1.0, "pos": 101}));
    assert!(matches!(Problem::from_json(&json), Err(BeamError::InvalidLoad(_))));

    let json = problem_json(Value::Null, json!({"type": "dist", "force": -1.0, "start": 50, "end": 50}));
    assert!(matches!(Problem::from_json(&json), Err(BeamError::InvalidLoad(_))));

    let json = json!({"length": 2, "EI": [1.0, 1.0, 1.0], "shear": true}).to_string();
    assert!(matches!(
        Problem::from_json(&json),
        Err(BeamError::InvalidGeometry(_))
    ));

    // No grid of length + 1 stations exists
    let json = json!({"length": usize::MAX, "EI": []}).to_string();
    assert!(matches!(
        Problem::from_json(&json),
        Err(BeamError::InvalidGeometry(_))
    ));

    assert!(Problem::from_json("{ not json").is_err());
}

#[test]
fn shear_flag_from_json() {
    let mut value: Value = serde_json::from_str(&problem_json(
        json!([0, L]),
        json!({"type": "point", "force": -100.0, "pos": 50}),
    ))
    .unwrap();

    let mut bending = Problem::from_json(&value.to_string()).unwrap();
    bending.solve().unwrap();

    value["shear"] = json!(true);
    value["shear_factor"] = json!(1.2);
    let mut with_shear = Problem::from_json(&value.to_string()).unwrap();
    assert_eq!(with_shear.shear_factor, 1.2);
    with_shear.solve().unwrap();

    let extra = with_shear.deflection().unwrap()[50] - bending.deflection().unwrap()[50];
    let expected = 1.2 * -100.0 / 2.0 * 50.0 / 1.0e5;
    assert_relative_eq!(extra, expected, max_relative = 0.02);
}

//! Keyword-argument front end for building loads
//!
//! Loads can be described as a map of named arguments, the way a problem
//! file or a scripting layer hands them over. Values may be JSON numbers or
//! numeric-looking strings. Naming the wrong key and giving a bad value are
//! reported as different [`LoadError`] kinds.

use serde_json::{Map, Value};

use crate::error::{LoadError, LoadResult};

/// Named arguments for a load constructor
pub type LoadArgs = Map<String, Value>;

/// Gravitational acceleration used to turn a mass in kg into a force, in m/s²
pub const GRAVITY: f64 = 9.81;

/// Force exerted by a mass resting on the beam (downward, hence negative)
pub fn weight(kg: f64) -> f64 {
    -GRAVITY * kg
}

/// Reject any key not in `allowed`.
pub(crate) fn check_keys(args: &LoadArgs, allowed: &[&str]) -> LoadResult<()> {
    match args.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(key) => Err(LoadError::unrecognized(key)),
        None => Ok(()),
    }
}

/// Required numeric argument.
pub(crate) fn number(args: &LoadArgs, key: &str) -> LoadResult<f64> {
    let value = args.get(key).ok_or_else(|| LoadError::missing(key))?;
    to_number(key, value)
}

/// Required station argument.
pub(crate) fn station(args: &LoadArgs, key: &str) -> LoadResult<usize> {
    let value = args.get(key).ok_or_else(|| LoadError::missing(key))?;
    to_station(key, value)
}

/// Interpret a JSON value as a finite number.
pub fn to_number(key: &str, value: &Value) -> LoadResult<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::value(key, value)),
    }
}

/// Interpret a JSON value as a station index, truncating toward zero.
pub fn to_station(key: &str, value: &Value) -> LoadResult<usize> {
    let x = to_number(key, value)?;
    if x < 0.0 || x > usize::MAX as f64 {
        return Err(LoadError::value(key, value));
    }
    Ok(x.trunc() as usize)
}

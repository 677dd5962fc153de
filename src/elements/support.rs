//! Support conditions

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// How the beam is held.
///
/// In problem files this is the `supports` field: `null` for a cantilever,
/// or a pair of stations for a simply-supported beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "Option<Vec<usize>>", into = "Option<[usize; 2]>")]
pub enum Boundary {
    /// Fixed (zero slope, zero deflection) at station 0, free at the far end
    #[default]
    Cantilever,
    /// Pinned (zero deflection, free rotation) at stations `a` and `b`
    SimplySupported { a: usize, b: usize },
}

impl Boundary {
    /// Create a cantilever clamped at station 0
    pub fn cantilever() -> Self {
        Boundary::Cantilever
    }

    /// Create a simply-supported beam pinned at `a` and `b`
    pub fn simply_supported(a: usize, b: usize) -> Self {
        Boundary::SimplySupported { a, b }
    }

    /// Check the support stations fit on a beam of `length`
    pub fn validate(&self, length: usize) -> BeamResult<()> {
        match *self {
            Boundary::Cantilever => Ok(()),
            Boundary::SimplySupported { a, b } if a == b => Err(BeamError::SingularSupports),
            Boundary::SimplySupported { a, b } if a > b => Err(BeamError::InvalidSupports(format!(
                "supports must be ordered, got ({}, {})",
                a, b
            ))),
            Boundary::SimplySupported { a, b } if b > length => {
                Err(BeamError::InvalidSupports(format!(
                    "support at {} lies beyond the beam end {} (supports ({}, {}))",
                    b, length, a, b
                )))
            }
            Boundary::SimplySupported { .. } => Ok(()),
        }
    }

    /// Support stations, if any
    pub fn stations(&self) -> Option<(usize, usize)> {
        match *self {
            Boundary::Cantilever => None,
            Boundary::SimplySupported { a, b } => Some((a, b)),
        }
    }

    /// Check if this is a cantilever
    pub fn is_cantilever(&self) -> bool {
        matches!(self, Boundary::Cantilever)
    }
}

impl TryFrom<Option<Vec<usize>>> for Boundary {
    type Error = String;

    fn try_from(supports: Option<Vec<usize>>) -> Result<Self, Self::Error> {
        match supports.as_deref() {
            None => Ok(Boundary::Cantilever),
            Some(&[a, b]) => Ok(Boundary::SimplySupported { a, b }),
            Some(other) => Err(format!(
                "expected exactly two support stations, got {}",
                other.len()
            )),
        }
    }
}

impl From<Boundary> for Option<[usize; 2]> {
    fn from(boundary: Boundary) -> Self {
        boundary.stations().map(|(a, b)| [a, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate() {
        assert!(Boundary::cantilever().validate(10).is_ok());
        assert!(Boundary::simply_supported(0, 10).validate(10).is_ok());
        assert!(Boundary::simply_supported(2, 8).validate(10).is_ok());
        assert!(matches!(
            Boundary::simply_supported(4, 4).validate(10),
            Err(BeamError::SingularSupports)
        ));
        assert!(Boundary::simply_supported(8, 2).validate(10).is_err());
        assert!(Boundary::simply_supported(0, 11).validate(10).is_err());
    }

    #[test]
    fn test_json_form() {
        let b: Boundary = serde_json::from_value(json!(null)).unwrap();
        assert!(b.is_cantilever());
        let b: Boundary = serde_json::from_value(json!([0, 1000])).unwrap();
        assert_eq!(b.stations(), Some((0, 1000)));
        assert!(serde_json::from_value::<Boundary>(json!([0, 500, 1000])).is_err());
        assert_eq!(serde_json::to_value(b).unwrap(), json!([0, 1000]));
    }
}

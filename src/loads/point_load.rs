//! Concentrated forces

use serde::{Deserialize, Serialize};

use super::args::{self, LoadArgs};
use crate::analysis::LoadField;
use crate::error::{BeamError, BeamResult, LoadError, LoadResult};

/// A concentrated transverse force at a station
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PointLoad {
    /// Force, positive upward
    pub force: f64,
    /// Station where the force acts
    pub pos: usize,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(force: f64, pos: usize) -> Self {
        Self { force, pos }
    }

    /// The weight of a mass in kg resting on the beam at `pos`
    pub fn from_mass(kg: f64, pos: usize) -> Self {
        Self::new(args::weight(kg), pos)
    }

    /// Build from keyword arguments: exactly one of `force` or `kg`, plus `pos`.
    ///
    /// # Example
    /// ```
    /// use beammech::loads::PointLoad;
    /// use serde_json::json;
    ///
    /// let args = json!({"kg": "1", "pos": "200"});
    /// let load = PointLoad::from_args(args.as_object().unwrap()).unwrap();
    /// assert_eq!(load, PointLoad::new(-9.81, 200));
    /// ```
    pub fn from_args(args: &LoadArgs) -> LoadResult<Self> {
        args::check_keys(args, &["force", "kg", "pos"])?;
        let force = match (args.get("force"), args.get("kg")) {
            (Some(force), None) => args::to_number("force", force)?,
            (None, Some(kg)) => args::weight(args::to_number("kg", kg)?),
            (Some(_), Some(_)) => {
                return Err(LoadError::Argument {
                    key: "kg".to_string(),
                    reason: "give either 'force' or 'kg', not both".to_string(),
                })
            }
            (None, None) => return Err(LoadError::missing("force")),
        };
        let pos = args::station(args, "pos")?;
        Ok(Self::new(force, pos))
    }

    /// Load magnitude
    pub fn size(&self) -> f64 {
        self.force
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.force * factor, self.pos)
    }

    pub(crate) fn validate(&self, length: usize) -> BeamResult<()> {
        if !self.force.is_finite() {
            return Err(BeamError::InvalidLoad(format!(
                "point load at {} has non-finite force",
                self.pos
            )));
        }
        if self.pos > length {
            return Err(BeamError::InvalidLoad(format!(
                "point load at {} lies beyond the beam end {}",
                self.pos, length
            )));
        }
        Ok(())
    }

    /// A step of `force` in the shear from `pos` onward
    pub(crate) fn accumulate(&self, field: &mut LoadField) {
        field.add_force(self.pos, self.force);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mass_matches_force() {
        assert_eq!(PointLoad::from_mass(1.0, 200), PointLoad::new(-9.81, 200));
    }

    #[test]
    fn test_both_force_and_kg_rejected() {
        let args = json!({"force": -10, "kg": 1, "pos": 3});
        let err = PointLoad::from_args(args.as_object().unwrap()).unwrap_err();
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_validate_position() {
        assert!(PointLoad::new(-1.0, 10).validate(10).is_ok());
        assert!(PointLoad::new(-1.0, 11).validate(10).is_err());
        assert!(PointLoad::new(f64::NAN, 1).validate(10).is_err());
    }
}

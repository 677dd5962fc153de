//! Concentrated couples

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::args;
use crate::analysis::LoadField;
use crate::error::{BeamError, BeamResult, LoadResult};

/// A concentrated external couple at a station, counter-clockwise positive.
///
/// The internal bending moment drops by `value` across `pos`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MomentLoad {
    /// Couple, counter-clockwise positive
    pub value: f64,
    /// Station where the couple acts
    pub pos: usize,
}

impl MomentLoad {
    /// Create a new moment load
    pub fn new(value: f64, pos: usize) -> Self {
        Self { value, pos }
    }

    /// Build from two positional values: the couple and its station
    pub fn from_values(value: &Value, pos: &Value) -> LoadResult<Self> {
        let value = args::to_number("value", value)?;
        let pos = args::to_station("pos", pos)?;
        Ok(Self::new(value, pos))
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.value * factor, self.pos)
    }

    pub(crate) fn validate(&self, length: usize) -> BeamResult<()> {
        if !self.value.is_finite() {
            return Err(BeamError::InvalidLoad(format!(
                "moment load at {} has non-finite value",
                self.pos
            )));
        }
        if self.pos > length {
            return Err(BeamError::InvalidLoad(format!(
                "moment load at {} lies beyond the beam end {}",
                self.pos, length
            )));
        }
        Ok(())
    }

    pub(crate) fn accumulate(&self, field: &mut LoadField) {
        field.add_couple(self.pos, self.value);
    }
}

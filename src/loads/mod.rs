//! Load types and the keyword-argument front end

mod args;
mod distributed;
mod moment_load;
mod point_load;

pub use args::{to_number, to_station, weight, LoadArgs, GRAVITY};
pub use distributed::{DistLoad, TriangleLoad};
pub use moment_load::MomentLoad;
pub use point_load::PointLoad;

use serde::{Deserialize, Serialize};

use crate::analysis::LoadField;
use crate::error::BeamResult;

/// Any load that can act on the beam
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Load {
    /// Concentrated force
    Point(PointLoad),
    /// Uniformly distributed force
    Dist(DistLoad),
    /// Linearly varying distributed force
    Triangle(TriangleLoad),
    /// Concentrated couple
    Moment(MomentLoad),
}

impl Load {
    /// Check the load fits on a beam of `length`
    pub fn validate(&self, length: usize) -> BeamResult<()> {
        match self {
            Load::Point(l) => l.validate(length),
            Load::Dist(l) => l.validate(length),
            Load::Triangle(l) => l.validate(length),
            Load::Moment(l) => l.validate(length),
        }
    }

    /// Add this load's shear density, shear jump or moment jump to `field`
    pub fn accumulate(&self, field: &mut LoadField) {
        match self {
            Load::Point(l) => l.accumulate(field),
            Load::Dist(l) => l.accumulate(field),
            Load::Triangle(l) => l.accumulate(field),
            Load::Moment(l) => l.accumulate(field),
        }
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Load::Point(l) => Load::Point(l.scaled(factor)),
            Load::Dist(l) => Load::Dist(l.scaled(factor)),
            Load::Triangle(l) => Load::Triangle(l.scaled(factor)),
            Load::Moment(l) => Load::Moment(l.scaled(factor)),
        }
    }

    /// Net transverse force; zero for a couple
    pub fn total_force(&self) -> f64 {
        match self {
            Load::Point(l) => l.force,
            Load::Dist(l) => l.force,
            Load::Triangle(l) => l.force,
            Load::Moment(_) => 0.0,
        }
    }
}

impl From<PointLoad> for Load {
    fn from(load: PointLoad) -> Self {
        Load::Point(load)
    }
}

impl From<DistLoad> for Load {
    fn from(load: DistLoad) -> Self {
        Load::Dist(load)
    }
}

impl From<TriangleLoad> for Load {
    fn from(load: TriangleLoad) -> Self {
        Load::Triangle(load)
    }
}

impl From<MomentLoad> for Load {
    fn from(load: MomentLoad) -> Self {
        Load::Moment(load)
    }
}

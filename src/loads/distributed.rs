//! Distributed loads: uniform and linearly varying

use serde::{Deserialize, Serialize};

use super::args::{self, LoadArgs};
use crate::analysis::LoadField;
use crate::error::{BeamError, BeamResult, LoadResult};

/// A total force spread uniformly over `[start, end]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DistLoad {
    /// Total force, positive upward
    pub force: f64,
    /// First loaded station
    pub start: usize,
    /// Last loaded station
    pub end: usize,
}

impl DistLoad {
    /// Create a new uniform load
    pub fn new(force: f64, start: usize, end: usize) -> Self {
        Self { force, start, end }
    }

    /// Build from keyword arguments `force`, `start` and `end`
    pub fn from_args(args: &LoadArgs) -> LoadResult<Self> {
        args::check_keys(args, &["force", "start", "end"])?;
        let force = args::number(args, "force")?;
        let start = args::station(args, "start")?;
        let end = args::station(args, "end")?;
        Ok(Self::new(force, start, end))
    }

    /// Load per unit length; not finite for an empty span
    pub fn density(&self) -> f64 {
        self.force / self.end.saturating_sub(self.start) as f64
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.force * factor, self.start, self.end)
    }

    pub(crate) fn validate(&self, length: usize) -> BeamResult<()> {
        validate_span("distributed", self.force, self.start, self.end, length)
    }

    pub(crate) fn accumulate(&self, field: &mut LoadField) {
        // An empty or reversed span carries nothing
        if self.end <= self.start {
            return;
        }
        let samples = vec![self.density(); self.end - self.start + 1];
        field.add_density(self.start, &samples);
    }
}

/// A total force spread as a linear ramp over `[start, end]`.
///
/// The density is zero at `start` and largest at `end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TriangleLoad {
    /// Total force, positive upward
    pub force: f64,
    /// Station where the density is zero
    pub start: usize,
    /// Station where the density peaks
    pub end: usize,
}

impl TriangleLoad {
    /// Create a new triangular load
    pub fn new(force: f64, start: usize, end: usize) -> Self {
        Self { force, start, end }
    }

    /// Build from keyword arguments `force`, `start` and `end`
    pub fn from_args(args: &LoadArgs) -> LoadResult<Self> {
        args::check_keys(args, &["force", "start", "end"])?;
        let force = args::number(args, "force")?;
        let start = args::station(args, "start")?;
        let end = args::station(args, "end")?;
        Ok(Self::new(force, start, end))
    }

    /// Density at station `x`
    pub fn density_at(&self, x: usize) -> f64 {
        if x < self.start || x > self.end || self.end == self.start {
            return 0.0;
        }
        let span = (self.end - self.start) as f64;
        2.0 * self.force * (x - self.start) as f64 / (span * span)
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.force * factor, self.start, self.end)
    }

    pub(crate) fn validate(&self, length: usize) -> BeamResult<()> {
        validate_span("triangle", self.force, self.start, self.end, length)
    }

    pub(crate) fn accumulate(&self, field: &mut LoadField) {
        if self.end <= self.start {
            return;
        }
        let samples: Vec<f64> = (self.start..=self.end).map(|x| self.density_at(x)).collect();
        field.add_density(self.start, &samples);
    }
}

fn validate_span(kind: &str, force: f64, start: usize, end: usize, length: usize) -> BeamResult<()> {
    if !force.is_finite() {
        return Err(BeamError::InvalidLoad(format!(
            "{} load over [{}, {}] has non-finite force",
            kind, start, end
        )));
    }
    if start >= end {
        return Err(BeamError::InvalidLoad(format!(
            "{} load must start before it ends, got [{}, {}]",
            kind, start, end
        )));
    }
    if end > length {
        return Err(BeamError::InvalidLoad(format!(
            "{} load over [{}, {}] extends beyond the beam end {}",
            kind, start, end, length
        )));
    }
    Ok(())
}

//! Shear force and bending moment from a load superposition
//!
//! Integration runs from station 0 toward the far end with zero initial
//! values. The continuous part of the shear (from distributed loads) is kept
//! apart from concentrated forces and couples, so that the jumps they cause
//! can be integrated exactly instead of being smeared over a cell.

use crate::loads::Load;
use crate::math::{add_ramp, add_step, cumulative_trapezoid};

/// Accumulator for the effect of every load on the beam
#[derive(Debug, Clone)]
pub struct LoadField {
    /// Shear from distributed loads, per station
    continuous: Vec<f64>,
    /// Concentrated forces as (station, force)
    forces: Vec<(usize, f64)>,
    /// Concentrated couples as (station, counter-clockwise value)
    couples: Vec<(usize, f64)>,
}

impl LoadField {
    /// Create an empty field for a beam of `length` (`length + 1` stations)
    pub fn new(length: usize) -> Self {
        Self {
            continuous: vec![0.0; length + 1],
            forces: Vec::new(),
            couples: Vec::new(),
        }
    }

    /// Create a field holding the superposition of `loads`
    pub fn from_loads<'a>(length: usize, loads: impl IntoIterator<Item = &'a Load>) -> Self {
        let mut field = Self::new(length);
        for load in loads {
            load.accumulate(&mut field);
        }
        field
    }

    /// Number of stations
    pub fn stations(&self) -> usize {
        self.continuous.len()
    }

    /// Add a load density sampled at stations `start..start + samples.len()`.
    ///
    /// The samples are integrated over their own span only; past the span the
    /// shear carries their total as a constant.
    pub fn add_density(&mut self, start: usize, samples: &[f64]) {
        let local = cumulative_trapezoid(samples);
        let total = local.last().copied().unwrap_or(0.0);
        for (x, v) in self.continuous.iter_mut().enumerate().skip(start) {
            *v += local.get(x - start).copied().unwrap_or(total);
        }
    }

    /// Add a concentrated force at `pos`
    pub fn add_force(&mut self, pos: usize, force: f64) {
        self.forces.push((pos, force));
    }

    /// Add a concentrated counter-clockwise couple at `pos`
    pub fn add_couple(&mut self, pos: usize, value: f64) {
        self.couples.push((pos, value));
    }

    /// Shear force at each station; a force at `pos` is included from `pos` onward
    pub fn shear(&self) -> Vec<f64> {
        let mut shear = self.continuous.clone();
        for &(pos, force) in &self.forces {
            add_step(&mut shear, pos, force);
        }
        shear
    }

    /// Bending moment at each station, sagging positive
    pub fn moment(&self) -> Vec<f64> {
        let mut moment = cumulative_trapezoid(&self.continuous);
        for &(pos, force) in &self.forces {
            add_ramp(&mut moment, pos, force);
        }
        for &(pos, value) in &self.couples {
            add_step(&mut moment, pos, -value);
        }
        moment
    }

    /// Shear and moment at the last station
    pub fn end_values(&self) -> (f64, f64) {
        let shear = self.shear().last().copied().unwrap_or(0.0);
        let moment = self.moment().last().copied().unwrap_or(0.0);
        (shear, moment)
    }
}

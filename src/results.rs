//! Result types for beam analysis

use serde::{Deserialize, Serialize};

use crate::error::BeamResult;

/// Force and couple exerted by a support on the beam
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Reaction {
    /// Station of the support
    pub station: usize,
    /// Reaction force, positive upward
    pub force: f64,
    /// Reaction couple, counter-clockwise positive (zero for a pin)
    pub moment: f64,
}

/// Everything a solve writes back, one entry per station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Solution {
    /// Shear force `V`
    #[serde(rename = "V")]
    pub shear: Vec<f64>,
    /// Bending moment `M`, sagging positive
    #[serde(rename = "M")]
    pub moment: Vec<f64>,
    /// Slope of the deflection curve
    #[serde(rename = "dy")]
    pub slope: Vec<f64>,
    /// Transverse deflection `y`, positive upward
    #[serde(rename = "y")]
    pub deflection: Vec<f64>,
    /// Support reactions
    pub reactions: Vec<Reaction>,
}

impl Solution {
    /// Station and value of the largest deflection by magnitude
    pub fn max_deflection(&self) -> (usize, f64) {
        max_abs(&self.deflection)
    }

    /// Station and value of the largest bending moment by magnitude
    pub fn max_moment(&self) -> (usize, f64) {
        max_abs(&self.moment)
    }

    /// Station and value of the largest shear force by magnitude
    pub fn max_shear(&self) -> (usize, f64) {
        max_abs(&self.shear)
    }

    /// Sum of all reaction forces
    pub fn total_reaction(&self) -> f64 {
        self.reactions.iter().map(|r| r.force).sum()
    }
}

/// Summary of a solution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Largest deflection by magnitude
    pub max_deflection: f64,
    /// Station of the largest deflection
    pub max_deflection_station: usize,
    /// Largest bending moment by magnitude
    pub max_moment: f64,
    /// Station of the largest bending moment
    pub max_moment_station: usize,
    /// Largest shear force by magnitude
    pub max_shear: f64,
    /// Station of the largest shear force
    pub max_shear_station: usize,
    /// Number of stations
    pub num_stations: usize,
}

impl From<&Solution> for Summary {
    fn from(solution: &Solution) -> Self {
        let (max_deflection_station, max_deflection) = solution.max_deflection();
        let (max_moment_station, max_moment) = solution.max_moment();
        let (max_shear_station, max_shear) = solution.max_shear();
        Self {
            max_deflection,
            max_deflection_station,
            max_moment,
            max_moment_station,
            max_shear,
            max_shear_station,
            num_stations: solution.deflection.len(),
        }
    }
}

/// JSON envelope returned by the HTTP and WASM front ends
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Solution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    /// Timing information in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ms_elapsed: Option<u64>,
}

impl SolveResponse {
    /// Wrap the outcome of a solve
    pub fn from_result(result: BeamResult<Solution>) -> Self {
        match result {
            Ok(solution) => Self {
                success: true,
                error: None,
                summary: Some(Summary::from(&solution)),
                solution: Some(solution),
                ms_elapsed: None,
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }

    /// A failed response carrying `error`
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            solution: None,
            summary: None,
            ms_elapsed: None,
        }
    }
}

fn max_abs(values: &[f64]) -> (usize, f64) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0), |best, (x, v)| if v.abs() > best.1.abs() { (x, v) } else { best })
}

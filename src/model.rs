//! Beam problem - the unit of work handed to the solver

use std::io::Read;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis;
use crate::elements::{Boundary, Material, Section};
use crate::error::{BeamError, BeamResult};
use crate::loads::Load;
use crate::results::Solution;

/// Shape factor for shear deformation of a rectangular section
pub const RECTANGULAR_SHEAR_FACTOR: f64 = 1.5;

fn default_shear_factor() -> f64 {
    RECTANGULAR_SHEAR_FACTOR
}

/// A straight beam on a unit-spaced grid of `length + 1` stations, with its
/// supports and loads.
///
/// `solve()` writes a [`Solution`] back into the problem. Every solve starts
/// from scratch, so loads, supports or the shear flag may be changed between
/// calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Beam length in grid units
    pub length: usize,
    /// Bending stiffness at each station
    #[serde(rename = "EI")]
    pub ei: Vec<f64>,
    /// Shear stiffness at each station; only read when `shear` is set
    #[serde(rename = "GA", default)]
    pub ga: Vec<f64>,
    /// Distance from the neutral axis to the top fiber
    #[serde(default)]
    pub top: Vec<f64>,
    /// Distance from the neutral axis to the bottom fiber
    #[serde(default)]
    pub bot: Vec<f64>,
    /// Support condition
    #[serde(default)]
    pub supports: Boundary,
    /// Include shear deformation
    #[serde(default)]
    pub shear: bool,
    /// Shape factor applied to the shear slope
    #[serde(default = "default_shear_factor")]
    pub shear_factor: f64,
    /// Loads acting on the beam; a single load or a list in problem files
    #[serde(default, deserialize_with = "one_or_many")]
    pub loads: Vec<Load>,

    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    solution: Option<Solution>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Load),
    Many(Vec<Load>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Load>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(load) => vec![load],
        OneOrMany::Many(loads) => loads,
    })
}

impl Problem {
    /// Create a cantilever without loads from per-station arrays.
    ///
    /// `top` and `bot` may be empty; they are carried along for callers that
    /// compute fiber stresses.
    pub fn new(
        length: usize,
        ei: Vec<f64>,
        ga: Vec<f64>,
        top: Vec<f64>,
        bot: Vec<f64>,
    ) -> BeamResult<Self> {
        let problem = Self {
            length,
            ei,
            ga,
            top,
            bot,
            supports: Boundary::Cantilever,
            shear: false,
            shear_factor: RECTANGULAR_SHEAR_FACTOR,
            loads: Vec::new(),
            solution: None,
        };
        problem.validate()?;
        Ok(problem)
    }

    /// Create a prismatic beam of one material and one section
    pub fn uniform(length: usize, material: &Material, section: &Section) -> BeamResult<Self> {
        let n = station_count(length)?;
        Self::new(
            length,
            vec![material.e * section.ix; n],
            vec![material.g * section.shear_area; n],
            vec![section.top; n],
            vec![section.bot; n],
        )
    }

    /// Load a problem from JSON and validate it
    pub fn from_json(json: &str) -> BeamResult<Self> {
        let problem: Self = serde_json::from_str(json)?;
        problem.validate()?;
        Ok(problem)
    }

    /// Load a problem from a JSON reader and validate it
    pub fn from_reader<R: Read>(reader: R) -> BeamResult<Self> {
        let problem: Self = serde_json::from_reader(reader)?;
        problem.validate()?;
        Ok(problem)
    }

    /// Serialize the problem, including its solution if solved
    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the support condition
    pub fn with_boundary(mut self, supports: Boundary) -> Self {
        self.supports = supports;
        self
    }

    /// Pin the beam at stations `a` and `b`
    pub fn with_supports(self, a: usize, b: usize) -> Self {
        self.with_boundary(Boundary::simply_supported(a, b))
    }

    /// Enable or disable shear deformation
    pub fn with_shear(mut self, shear: bool) -> Self {
        self.shear = shear;
        self
    }

    /// Set the shear shape factor
    pub fn with_shear_factor(mut self, factor: f64) -> Self {
        self.shear_factor = factor;
        self
    }

    /// Add a load
    pub fn with_load(mut self, load: impl Into<Load>) -> Self {
        self.loads.push(load.into());
        self
    }

    /// Add several loads
    pub fn with_loads<L: Into<Load>>(mut self, loads: impl IntoIterator<Item = L>) -> Self {
        self.loads.extend(loads.into_iter().map(Into::into));
        self
    }

    /// Add a load to an existing problem
    pub fn add_load(&mut self, load: impl Into<Load>) {
        self.loads.push(load.into());
    }

    /// Number of stations; saturates for a length no grid can hold, which
    /// `validate` rejects
    pub fn stations(&self) -> usize {
        self.length.saturating_add(1)
    }

    /// Check the problem is well formed
    pub fn validate(&self) -> BeamResult<()> {
        if self.length == 0 {
            return Err(BeamError::InvalidGeometry(
                "beam length must be at least 1".to_string(),
            ));
        }
        let n = station_count(self.length)?;
        check_len("EI", &self.ei, n, false)?;
        check_len("GA", &self.ga, n, !self.shear)?;
        check_len("top", &self.top, n, true)?;
        check_len("bot", &self.bot, n, true)?;

        check_positive("EI", &self.ei)?;
        if self.shear {
            check_positive("GA", &self.ga)?;
            if !(self.shear_factor.is_finite() && self.shear_factor > 0.0) {
                return Err(BeamError::InvalidStiffness(format!(
                    "shear factor must be positive, got {}",
                    self.shear_factor
                )));
            }
        }

        self.supports.validate(self.length)?;
        for load in &self.loads {
            load.validate(self.length)?;
        }
        Ok(())
    }

    /// Solve for shear, moment, slope and deflection.
    ///
    /// On error no solution is stored.
    pub fn solve(&mut self) -> BeamResult<()> {
        self.solution = None;
        self.validate()?;
        let solution = analysis::solve(self)?;
        debug!(
            "max deflection {:.6e} at station {}",
            solution.max_deflection().1,
            solution.max_deflection().0
        );
        self.solution = Some(solution);
        Ok(())
    }

    /// Check if the problem has been solved
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// The last solution
    pub fn solution(&self) -> BeamResult<&Solution> {
        self.solution.as_ref().ok_or(BeamError::NotSolved)
    }

    /// Deflection `y` at each station
    pub fn deflection(&self) -> BeamResult<&[f64]> {
        Ok(&self.solution()?.deflection)
    }

    /// Slope at each station
    pub fn slope(&self) -> BeamResult<&[f64]> {
        Ok(&self.solution()?.slope)
    }

    /// Shear force `V` at each station
    pub fn shear_force(&self) -> BeamResult<&[f64]> {
        Ok(&self.solution()?.shear)
    }

    /// Bending moment `M` at each station
    pub fn moment(&self) -> BeamResult<&[f64]> {
        Ok(&self.solution()?.moment)
    }
}

fn station_count(length: usize) -> BeamResult<usize> {
    length.checked_add(1).ok_or_else(|| {
        BeamError::InvalidGeometry(format!("beam length {} has no station grid", length))
    })
}

fn check_len(name: &str, values: &[f64], n: usize, may_be_empty: bool) -> BeamResult<()> {
    if values.len() == n || (may_be_empty && values.is_empty()) {
        return Ok(());
    }
    Err(BeamError::InvalidGeometry(format!(
        "{} has {} entries, expected {}",
        name,
        values.len(),
        n
    )))
}

fn check_positive(name: &str, values: &[f64]) -> BeamResult<()> {
    match values
        .iter()
        .enumerate()
        .find(|(_, v)| !(v.is_finite() && **v > 0.0))
    {
        Some((x, v)) => Err(BeamError::InvalidStiffness(format!(
            "{} must be positive and finite, got {} at station {}",
            name, v, x
        ))),
        None => Ok(()),
    }
}

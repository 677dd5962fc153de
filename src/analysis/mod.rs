//! The solver pipeline
//!
//! loads → [`LoadField`] (trial shear and moment) → [`boundary::reactions`]
//! → curvature and trial curve → [`boundary::integration_constants`] → [`Solution`].

pub mod boundary;
pub mod deflection;
mod shear_moment;

pub use shear_moment::LoadField;

use log::debug;

use crate::error::BeamResult;
use crate::model::Problem;
use crate::results::Solution;

/// Run the full pipeline on an already validated problem.
///
/// Nothing in `problem` is touched; the caller decides where the solution goes.
pub fn solve(problem: &Problem) -> BeamResult<Solution> {
    let mut field = LoadField::from_loads(problem.length, &problem.loads);
    debug!(
        "solving {} loads on {} stations ({:?})",
        problem.loads.len(),
        field.stations(),
        problem.supports
    );

    let reactions = boundary::reactions(&problem.supports, &field)?;
    for r in &reactions {
        field.add_force(r.station, r.force);
        field.add_couple(r.station, r.moment);
    }
    let shear = field.shear();
    let moment = field.moment();

    let curvature = deflection::curvature(&moment, &problem.ei);
    let shear_slope = problem
        .shear
        .then(|| deflection::shear_slope(&shear, &problem.ga, problem.shear_factor));
    let mut curve = deflection::trial_curve(&curvature, shear_slope.as_deref());

    let (c0, c1) = boundary::integration_constants(&problem.supports, &curve.deflection)?;
    debug!("integration constants: c0 = {c0:.6e}, c1 = {c1:.6e}");
    curve.correct(c0, c1);

    Ok(Solution {
        shear,
        moment,
        slope: curve.slope,
        deflection: curve.deflection,
        reactions,
    })
}

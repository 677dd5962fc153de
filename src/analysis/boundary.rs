//! Boundary resolver
//!
//! Two steps fix what the trial integration leaves open. First the support
//! reactions are found from equilibrium of the whole beam, so that shear and
//! moment vanish past the free end. Then the rigid-body motion `c0 + c1·x`
//! is chosen so the deflection curve meets the support conditions.

use log::debug;
use nalgebra::{Matrix2, Vector2};

use super::shear_moment::LoadField;
use crate::elements::Boundary;
use crate::error::{BeamError, BeamResult};
use crate::results::Reaction;

/// Support reactions that bring the loads in `field` into equilibrium
pub fn reactions(boundary: &Boundary, field: &LoadField) -> BeamResult<Vec<Reaction>> {
    let length = field.stations().saturating_sub(1) as f64;
    let (shear_end, moment_end) = field.end_values();

    match *boundary {
        Boundary::Cantilever => {
            // Clamp at station 0 takes the full resultant and its moment
            let force = -shear_end;
            let moment = moment_end + force * length;
            debug!("cantilever reaction: force {force:.6e}, couple {moment:.6e}");
            Ok(vec![Reaction {
                station: 0,
                force,
                moment,
            }])
        }
        Boundary::SimplySupported { a, b } => {
            let system = Matrix2::new(
                1.0,
                1.0,
                length - a as f64,
                length - b as f64,
            );
            let rhs = Vector2::new(-shear_end, -moment_end);
            let r = system.lu().solve(&rhs).ok_or(BeamError::SingularSupports)?;
            debug!("support reactions: {:.6e} at {a}, {:.6e} at {b}", r[0], r[1]);
            Ok(vec![
                Reaction {
                    station: a,
                    force: r[0],
                    moment: 0.0,
                },
                Reaction {
                    station: b,
                    force: r[1],
                    moment: 0.0,
                },
            ])
        }
    }
}

/// Integration constants `(c0, c1)` that make `trial + c0 + c1·x` satisfy the boundary
pub fn integration_constants(boundary: &Boundary, trial: &[f64]) -> BeamResult<(f64, f64)> {
    match *boundary {
        // Trial curve already starts with zero slope and deflection at the clamp
        Boundary::Cantilever => Ok((0.0, 0.0)),
        Boundary::SimplySupported { a, b } => {
            if a == b {
                return Err(BeamError::SingularSupports);
            }
            let (ya, yb) = match (trial.get(a), trial.get(b)) {
                (Some(ya), Some(yb)) => (*ya, *yb),
                _ => {
                    return Err(BeamError::InvalidSupports(format!(
                        "supports ({}, {}) outside a curve of {} stations",
                        a,
                        b,
                        trial.len()
                    )))
                }
            };
            let c1 = -(yb - ya) / (b as f64 - a as f64);
            let c0 = -ya - c1 * a as f64;
            Ok((c0, c1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{Load, MomentLoad, PointLoad};
    use approx::assert_relative_eq;

    #[test]
    fn test_cantilever_reaction() {
        let loads = [Load::from(PointLoad::new(-100.0, 10))];
        let field = LoadField::from_loads(10, &loads);
        let r = reactions(&Boundary::cantilever(), &field).unwrap();
        assert_eq!(r.len(), 1);
        assert_relative_eq!(r[0].force, 100.0);
        assert_relative_eq!(r[0].moment, 1000.0);
    }

    #[test]
    fn test_simple_reactions_with_overhang() {
        // Supports at 2 and 8, load at the free end 10
        let loads = [Load::from(PointLoad::new(-60.0, 10))];
        let field = LoadField::from_loads(10, &loads);
        let r = reactions(&Boundary::simply_supported(2, 8), &field).unwrap();
        // Moments about station 8: R_a * 6 = -60 * 2
        assert_relative_eq!(r[0].force, -20.0, epsilon = 1e-9);
        assert_relative_eq!(r[1].force, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reactions_close_the_field() {
        let loads = [
            Load::from(PointLoad::new(-7.0, 3)),
            Load::from(MomentLoad::new(11.0, 6)),
        ];
        let mut field = LoadField::from_loads(12, &loads);
        for r in reactions(&Boundary::simply_supported(1, 9), &field).unwrap() {
            field.add_force(r.station, r.force);
            field.add_couple(r.station, r.moment);
        }
        let (v, m) = field.end_values();
        assert_relative_eq!(v, 0.0, epsilon = 1e-9);
        assert_relative_eq!(m, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_integration_constants() {
        let trial = vec![0.0, 1.0, 4.0, 9.0, 16.0];
        let (c0, c1) = integration_constants(&Boundary::simply_supported(1, 3), &trial).unwrap();
        assert_relative_eq!(trial[1] + c0 + c1, 0.0, epsilon = 1e-12);
        assert_relative_eq!(trial[3] + c0 + 3.0 * c1, 0.0, epsilon = 1e-12);

        assert_eq!(
            integration_constants(&Boundary::cantilever(), &trial).unwrap(),
            (0.0, 0.0)
        );
        assert!(matches!(
            integration_constants(&Boundary::simply_supported(2, 2), &trial),
            Err(BeamError::SingularSupports)
        ));
    }
}

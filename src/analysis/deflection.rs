//! Curvature, slope and deflection

use crate::math::cumulative_trapezoid;

/// Slope and deflection along the beam
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub slope: Vec<f64>,
    pub deflection: Vec<f64>,
}

impl Curve {
    /// Add the rigid-body motion `c0 + c1·x` to the curve
    pub fn correct(&mut self, c0: f64, c1: f64) {
        for s in &mut self.slope {
            *s += c1;
        }
        for (x, y) in self.deflection.iter_mut().enumerate() {
            *y += c0 + c1 * x as f64;
        }
    }
}

/// Bending curvature `M / EI` at each station
pub fn curvature(moment: &[f64], ei: &[f64]) -> Vec<f64> {
    moment.iter().zip(ei).map(|(m, ei)| m / ei).collect()
}

/// Local slope added by shear deformation, `-k·V / GA`.
///
/// With shear positive as `dM/dx`, the minus sign makes the shear deflection
/// follow the load direction.
pub fn shear_slope(shear: &[f64], ga: &[f64], factor: f64) -> Vec<f64> {
    shear.iter().zip(ga).map(|(v, ga)| -factor * v / ga).collect()
}

/// Integrate curvature to a trial curve that starts with zero slope and zero
/// deflection at station 0.
///
/// The shear slope, when given, is added to the slope directly; it is not a
/// curvature and is integrated only once.
pub fn trial_curve(curvature: &[f64], shear_slope: Option<&[f64]>) -> Curve {
    let mut slope = cumulative_trapezoid(curvature);
    if let Some(extra) = shear_slope {
        for (s, e) in slope.iter_mut().zip(extra) {
            *s += e;
        }
    }
    let deflection = cumulative_trapezoid(&slope);
    Curve { slope, deflection }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_curvature_gives_parabola() {
        let kappa = vec![2.0; 11];
        let curve = trial_curve(&kappa, None);
        assert_relative_eq!(curve.slope[10], 20.0);
        // y = x², trapezoid on a linear slope is exact
        assert_relative_eq!(curve.deflection[10], 100.0, epsilon = 1e-12);
        assert_eq!(curve.deflection[0], 0.0);
    }

    #[test]
    fn test_shear_slope_not_integrated_twice() {
        let kappa = vec![0.0; 5];
        let extra = shear_slope(&[-3.0; 5], &[6.0; 5], 1.0);
        let curve = trial_curve(&kappa, Some(&extra));
        assert_relative_eq!(curve.slope[4], 0.5);
        assert_relative_eq!(curve.deflection[4], 2.0);
    }

    #[test]
    fn test_correct() {
        let mut curve = Curve {
            slope: vec![0.0; 3],
            deflection: vec![0.0; 3],
        };
        curve.correct(1.0, -0.5);
        assert_eq!(curve.deflection, vec![1.0, 0.5, 0.0]);
        assert_eq!(curve.slope, vec![-0.5; 3]);
    }

    #[test]
    fn test_curvature() {
        assert_eq!(curvature(&[4.0, -2.0], &[2.0, 4.0]), vec![2.0, -0.5]);
    }
}

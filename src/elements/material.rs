//! Material properties

use serde::{Deserialize, Serialize};

/// Elastic constants of the beam material
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus)
    pub e: f64,
    /// Shear modulus
    pub g: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, g: f64) -> Self {
        Self { e, g }
    }

    /// Create a new isotropic material from E and nu
    /// G is calculated as E / (2 * (1 + nu))
    pub fn isotropic(e: f64, nu: f64) -> Self {
        Self::new(e, e / (2.0 * (1.0 + nu)))
    }

    /// Structural steel in MPa (N/mm²)
    pub fn steel() -> Self {
        Self::new(210_000.0, 81_000.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}

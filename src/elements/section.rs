//! Cross-section properties

use serde::{Deserialize, Serialize};

/// Cross-section properties of a prismatic stretch of beam
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Second moment of area about the bending axis
    pub ix: f64,
    /// Area that carries shear
    pub shear_area: f64,
    /// Distance from the neutral axis to the top fiber
    pub top: f64,
    /// Distance from the neutral axis to the bottom fiber (negative below the axis)
    pub bot: f64,
}

impl Section {
    /// Create a new section with given properties
    pub fn new(ix: f64, shear_area: f64, top: f64, bot: f64) -> Self {
        Self {
            ix,
            shear_area,
            top,
            bot,
        }
    }

    /// Create a solid rectangular section
    pub fn rectangular(width: f64, depth: f64) -> Self {
        Self::new(
            width * depth.powi(3) / 12.0,
            width * depth,
            depth / 2.0,
            -depth / 2.0,
        )
    }

    /// Create a sandwich section: two skins of thickness `skin` on a core of depth `core`.
    ///
    /// Bending stiffness comes from the skins only; shear is carried by the core.
    pub fn sandwich(width: f64, core: f64, skin: f64) -> Self {
        let depth = core + 2.0 * skin;
        Self::new(
            width * (depth.powi(3) - core.powi(3)) / 12.0,
            width * core,
            depth / 2.0,
            -depth / 2.0,
        )
    }

    /// Total depth of the section
    pub fn depth(&self) -> f64 {
        self.top - self.bot
    }
}

//! beammech - shear, moment and deflection of straight beams
//!
//! Solves a one-dimensional beam with bending stiffness `EI` and shear
//! stiffness `GA` that may vary along its length, on a grid with one station
//! per unit of length. Supported:
//! - Concentrated forces, uniform and triangular distributed loads, couples
//! - Cantilevers clamped at station 0 and beams pinned at two stations
//! - Optional shear deformation
//!
//! ## Sign convention
//! - Forces and deflection are positive upward
//! - Bending moment is sagging positive (`EI·y'' = M`), shear is `dM/dx`
//! - Applied couples are counter-clockwise positive
//!
//! ## Example
//! ```rust
//! use beammech::prelude::*;
//!
//! // 1000 mm sandwich panel, pinned at both ends, 500 N at midspan
//! let material = Material::new(120_000.0, 28.0);
//! let section = Section::sandwich(400.0, 26.0, 2.0);
//! let mut problem = Problem::uniform(1000, &material, &section)
//!     .unwrap()
//!     .with_supports(0, 1000)
//!     .with_load(PointLoad::new(-500.0, 500));
//!
//! problem.solve().unwrap();
//!
//! let y = problem.deflection().unwrap();
//! assert!(y[500] < 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{Boundary, Material, Section};
    pub use crate::error::{BeamError, BeamResult, LoadError, LoadResult};
    pub use crate::loads::{DistLoad, Load, LoadArgs, MomentLoad, PointLoad, TriangleLoad, GRAVITY};
    pub use crate::model::{Problem, RECTANGULAR_SHEAR_FACTOR};
    pub use crate::results::{Reaction, Solution, SolveResponse, Summary};
}

#[cfg(feature = "wasm")]
pub mod wasm;

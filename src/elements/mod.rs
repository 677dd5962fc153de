//! Beam properties: supports, materials and sections

mod material;
mod section;
mod support;

pub use material::Material;
pub use section::Section;
pub use support::Boundary;

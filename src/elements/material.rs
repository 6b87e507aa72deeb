//! Material properties

use serde::{Deserialize, Serialize};

/// Material shared by every member of the model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity
    pub e: f64,
    /// Mass density per unit volume
    pub density: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, density: f64) -> Self {
        Self { e, density }
    }
}

impl Default for Material {
    fn default() -> Self {
        // Reference constants of the sizing benchmark (kip/in units)
        Self::new(1.0e4, 0.1)
    }
}

//! Penalized cost evaluation
//!
//! Maps an analysis result to the scalar the swarm minimizes: material weight
//! raised to a fixed exponent plus a deflection term, scaled multiplicatively
//! by the accumulated stress violations. Violations inflate the cost smoothly
//! instead of walling off the infeasible region, so the derivative-free
//! optimizer can still route through it.

use serde::{Deserialize, Serialize};

use crate::results::AnalysisResult;

/// Cost function over analysis results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEvaluator {
    /// Allowable absolute member stress
    pub stress_limit: f64,
    /// Coefficient on mass^1.8
    pub weight_coefficient: f64,
    /// Coefficient on the maximum vertical deflection
    pub deflection_coefficient: f64,
}

impl CostEvaluator {
    /// Create an evaluator with the reference coefficients
    pub fn new(stress_limit: f64) -> Self {
        Self {
            stress_limit,
            weight_coefficient: 75.0,
            deflection_coefficient: 0.95 * 4_000_000.0,
        }
    }

    /// Override the weight coefficient
    pub fn with_weight_coefficient(mut self, coefficient: f64) -> Self {
        self.weight_coefficient = coefficient;
        self
    }

    /// Override the deflection coefficient
    pub fn with_deflection_coefficient(mut self, coefficient: f64) -> Self {
        self.deflection_coefficient = coefficient;
        self
    }

    /// Accumulated overstress, summed over members.
    ///
    /// A member within the limit contributes nothing; one beyond it
    /// contributes its normalized distance from the tension limit,
    /// `|s - limit| / limit`.
    pub fn stress_penalty(&self, stresses: &[f64]) -> f64 {
        stresses
            .iter()
            .map(|&s| {
                if s.abs() > self.stress_limit {
                    ((s - self.stress_limit) / self.stress_limit).abs()
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// Penalized scalar cost of an analysis result
    pub fn evaluate(&self, result: &AnalysisResult) -> f64 {
        let c_total = self.stress_penalty(&result.stresses);
        let max_deflection = result.max_vertical_deflection();

        let base = result.mass.powf(1.8) * self.weight_coefficient
            + self.deflection_coefficient * max_deflection;

        base * (1.0 + c_total)
    }
}

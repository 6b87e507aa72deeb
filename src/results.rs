//! Result types for truss analysis and optimization

use serde::{Deserialize, Serialize};

use crate::error::TrussResult;

/// Results of one linear-elastic analysis of the truss for a given area
/// vector.
///
/// Recomputed fresh for every query; never incrementally updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Axial stress per member, tension positive
    pub stresses: Vec<f64>,
    /// Axial force per member, tension positive
    pub forces: Vec<f64>,
    /// Total mass of the structure
    pub mass: f64,
    /// Displacement [X, Y] per node (zero at restrained nodes)
    pub displacements: Vec<[f64; 2]>,
    /// Support reaction [X, Y] per node (zero at free nodes)
    pub reactions: Vec<[f64; 2]>,
}

impl AnalysisResult {
    /// Largest absolute vertical displacement over all nodes
    pub fn max_vertical_deflection(&self) -> f64 {
        self.displacements
            .iter()
            .map(|d| d[1].abs())
            .fold(0.0, f64::max)
    }

    /// Largest absolute member stress
    pub fn max_abs_stress(&self) -> f64 {
        self.stresses.iter().map(|s| s.abs()).fold(0.0, f64::max)
    }
}

/// Outcome of a particle swarm run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Global best area vector
    pub best_areas: Vec<f64>,
    /// Cost of the global best
    pub best_cost: f64,
    /// Global best cost at the end of each iteration
    pub cost_history: Vec<f64>,
    /// Global best area vector at the end of each iteration
    pub area_history: Vec<Vec<f64>>,
    /// Fresh analysis of the best area vector, for reporting
    pub analysis: AnalysisResult,
}

impl OptimizationResult {
    /// Number of iterations the swarm ran for
    pub fn iterations(&self) -> usize {
        self.cost_history.len()
    }

    /// Write the per-iteration best-cost history as JSON, for external
    /// convergence plotting
    pub fn write_history_json<W: std::io::Write>(&self, writer: W) -> TrussResult<()> {
        serde_json::to_writer_pretty(writer, &self.cost_history)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_history_json() {
        let result = OptimizationResult {
            best_areas: vec![1.0],
            best_cost: 2.0,
            cost_history: vec![3.0, 2.0],
            area_history: vec![vec![1.5], vec![1.0]],
            analysis: AnalysisResult {
                stresses: vec![0.0],
                forces: vec![0.0],
                mass: 1.0,
                displacements: vec![[0.0, 0.0]],
                reactions: vec![[0.0, 0.0]],
            },
        };

        let mut buffer = Vec::new();
        result.write_history_json(&mut buffer).unwrap();
        let parsed: Vec<f64> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, vec![3.0, 2.0]);
    }

    #[test]
    fn test_max_vertical_deflection() {
        let result = AnalysisResult {
            stresses: vec![10.0, -30.0],
            forces: vec![50.0, -150.0],
            mass: 1.0,
            displacements: vec![[0.4, -1.5], [0.0, 2.0], [0.0, 0.0]],
            reactions: vec![[0.0, 0.0]; 3],
        };
        assert_eq!(result.max_vertical_deflection(), 2.0);
        assert_eq!(result.max_abs_stress(), 30.0);
    }
}

//! Particle swarm optimizer over the analyzer + cost oracle

mod config;
mod particle;

pub use config::PsoConfig;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis::Analyzer;
use crate::cost::CostEvaluator;
use crate::error::{TrussError, TrussResult};
use crate::results::OptimizationResult;
use particle::Particle;

/// Swarm-based sizing optimizer.
///
/// Runs single-threaded and updates particles strictly sequentially: an
/// improved global best found mid-iteration is published immediately and
/// steers the remaining particles of that same iteration. This
/// intra-iteration information flow is part of the algorithm, not an
/// artifact.
#[derive(Debug)]
pub struct ParticleSwarm<'a, A> {
    analyzer: &'a A,
    evaluator: CostEvaluator,
    config: PsoConfig,
}

impl<'a, A: Analyzer> ParticleSwarm<'a, A> {
    /// Create a swarm over the given fitness oracle.
    ///
    /// The configuration is validated here; a bad parameter set never starts
    /// a run.
    pub fn new(analyzer: &'a A, evaluator: CostEvaluator, config: PsoConfig) -> TrussResult<Self> {
        config.validate()?;
        if analyzer.num_areas() == 0 {
            return Err(TrussError::InvalidConfig(
                "Analyzer exposes no design variables".to_string(),
            ));
        }
        Ok(Self {
            analyzer,
            evaluator,
            config,
        })
    }

    /// Cost of one candidate area vector.
    ///
    /// Candidate structures can legitimately go singular (a near-zero-area
    /// member disconnecting the truss); those are priced at infinity so the
    /// swarm routes around them instead of aborting. Any other analyzer
    /// error is a real fault and ends the run.
    fn fitness(&self, areas: &[f64]) -> TrussResult<f64> {
        match self.analyzer.analyze(areas) {
            Ok(result) => Ok(self.evaluator.evaluate(&result)),
            Err(TrussError::SingularStiffness) => Ok(f64::INFINITY),
            Err(e) => Err(e),
        }
    }

    /// Run the swarm for the configured iteration budget
    pub fn run(&self) -> TrussResult<OptimizationResult> {
        let dims = self.analyzer.num_areas();
        let v_limit = self.config.velocity_limit();

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut particles: Vec<Particle> = (0..self.config.population_size)
            .map(|_| {
                Particle::spawn(
                    &mut rng,
                    dims,
                    self.config.a_min,
                    self.config.a_max,
                    v_limit,
                )
            })
            .collect();

        for particle in &mut particles {
            let cost = self.fitness(&particle.position)?;
            particle.record_cost(cost);
        }

        // Global best seeds from the arg-min over personal bests
        let mut best_index = 0;
        for (i, particle) in particles.iter().enumerate() {
            if particle.best_cost < particles[best_index].best_cost {
                best_index = i;
            }
        }
        let mut best_position = particles[best_index].best_position.clone();
        let mut best_cost = particles[best_index].best_cost;

        info!(
            "swarm start: {} particles, {} design variables, initial best cost {:.6e}",
            self.config.population_size, dims, best_cost
        );

        let mut cost_history = Vec::with_capacity(self.config.max_iterations);
        let mut area_history = Vec::with_capacity(self.config.max_iterations);

        for iteration in 0..self.config.max_iterations {
            let w = self.config.inertia(iteration);

            for particle in &mut particles {
                particle.step(
                    &mut rng,
                    w,
                    self.config.c1,
                    self.config.c2,
                    &best_position,
                    self.config.a_min,
                    self.config.a_max,
                    v_limit,
                );

                let cost = self.fitness(&particle.position)?;
                if particle.record_cost(cost) && particle.best_cost < best_cost {
                    best_cost = particle.best_cost;
                    best_position.clone_from(&particle.best_position);
                }
            }

            debug!(
                "iteration {}: w = {:.3}, best cost {:.6e}",
                iteration, w, best_cost
            );
            cost_history.push(best_cost);
            area_history.push(best_position.clone());
        }

        info!(
            "swarm done after {} iterations, best cost {:.6e}",
            self.config.max_iterations, best_cost
        );

        // Final reporting pass over the winning areas. If the whole swarm
        // stayed infeasible the best candidate is still singular; surface
        // that instead of fabricating a report.
        let analysis = self.analyzer.analyze(&best_position)?;

        Ok(OptimizationResult {
            best_areas: best_position,
            best_cost,
            cost_history,
            area_history,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::AnalysisResult;

    /// Synthetic oracle: cost grows with total area, and everything below a
    /// floor on the first component reads as a disconnected structure
    #[derive(Debug)]
    struct FloorOracle {
        singular_below: f64,
    }

    impl Analyzer for FloorOracle {
        fn num_areas(&self) -> usize {
            2
        }

        fn analyze(&self, areas: &[f64]) -> TrussResult<AnalysisResult> {
            if areas[0] < self.singular_below {
                return Err(TrussError::SingularStiffness);
            }
            Ok(AnalysisResult {
                stresses: vec![0.0; 2],
                forces: vec![0.0; 2],
                mass: areas.iter().sum(),
                displacements: vec![[0.0, 0.0]],
                reactions: vec![[0.0, 0.0]],
            })
        }
    }

    fn config() -> PsoConfig {
        PsoConfig::new(0.1, 10.0)
            .with_population(12)
            .with_iterations(60)
            .with_seed(42)
    }

    #[test]
    fn test_history_is_non_increasing() {
        let oracle = FloorOracle { singular_below: 0.0 };
        let swarm = ParticleSwarm::new(&oracle, CostEvaluator::new(25.0), config()).unwrap();
        let result = swarm.run().unwrap();

        assert_eq!(result.iterations(), 60);
        for pair in result.cost_history.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert_eq!(result.best_cost, *result.cost_history.last().unwrap());
    }

    #[test]
    fn test_best_stays_inside_area_box() {
        let oracle = FloorOracle { singular_below: 0.0 };
        let swarm = ParticleSwarm::new(&oracle, CostEvaluator::new(25.0), config()).unwrap();
        let result = swarm.run().unwrap();

        for history in &result.area_history {
            for &a in history {
                assert!((0.1..=10.0).contains(&a));
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let oracle = FloorOracle { singular_below: 0.0 };
        let evaluator = CostEvaluator::new(25.0);
        let a = ParticleSwarm::new(&oracle, evaluator, config())
            .unwrap()
            .run()
            .unwrap();
        let b = ParticleSwarm::new(&oracle, evaluator, config())
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.best_areas, b.best_areas);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_swarm_routes_around_singular_candidates() {
        // Cost pulls toward the low end, singularity blocks part of it; the
        // best must sit on the feasible side of the floor
        let oracle = FloorOracle { singular_below: 4.0 };
        let swarm = ParticleSwarm::new(&oracle, CostEvaluator::new(25.0), config()).unwrap();
        let result = swarm.run().unwrap();

        assert!(result.best_cost.is_finite());
        assert!(result.best_areas[0] >= 4.0);
        // The unconstrained component still drives toward its bound
        assert!(result.best_areas[1] < 2.0);
    }

    #[test]
    fn test_fully_singular_swarm_reports_singularity() {
        let oracle = FloorOracle {
            singular_below: f64::INFINITY,
        };
        let swarm = ParticleSwarm::new(&oracle, CostEvaluator::new(25.0), config()).unwrap();
        let err = swarm.run().unwrap_err();
        assert!(matches!(err, TrussError::SingularStiffness));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let oracle = FloorOracle { singular_below: 0.0 };
        let bad = PsoConfig::new(5.0, 1.0);
        let err = ParticleSwarm::new(&oracle, CostEvaluator::new(25.0), bad).unwrap_err();
        assert!(matches!(err, TrussError::InvalidConfig(_)));
    }
}

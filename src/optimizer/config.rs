//! Swarm configuration

use serde::{Deserialize, Serialize};

use crate::error::{TrussError, TrussResult};

/// Tuning parameters for a particle swarm run.
///
/// Velocity bounds are derived from the area box: a particle may change any
/// area component by at most 20% of the box width per iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsoConfig {
    /// Lower bound on every area component
    pub a_min: f64,
    /// Upper bound on every area component
    pub a_max: f64,
    /// Fixed iteration budget; there is no early stop
    pub max_iterations: usize,
    /// Number of particles in the swarm
    pub population_size: usize,
    /// Cognitive coefficient (attraction to the personal best)
    pub c1: f64,
    /// Social coefficient (attraction to the global best)
    pub c2: f64,
    /// Inertia weight at the end of the schedule
    pub w_min: f64,
    /// Inertia weight at the start of the schedule
    pub w_max: f64,
    /// Seed for the swarm's random draws; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            a_min: 0.1,
            a_max: 40.0,
            max_iterations: 500,
            population_size: 30,
            c1: 2.0,
            c2: 2.0,
            w_min: 0.4,
            w_max: 0.9,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Create a configuration with the given area box and default tuning
    pub fn new(a_min: f64, a_max: f64) -> Self {
        Self {
            a_min,
            a_max,
            ..Self::default()
        }
    }

    /// Set the iteration budget
    pub fn with_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the swarm size
    pub fn with_population(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Set the cognitive and social coefficients
    pub fn with_coefficients(mut self, c1: f64, c2: f64) -> Self {
        self.c1 = c1;
        self.c2 = c2;
        self
    }

    /// Seed the swarm's random source for a reproducible run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration, rejecting unusable parameter sets
    pub fn validate(&self) -> TrussResult<()> {
        if !(self.a_min > 0.0) {
            return Err(TrussError::InvalidConfig(format!(
                "a_min must be strictly positive, got {}",
                self.a_min
            )));
        }
        if !(self.a_min < self.a_max) {
            return Err(TrussError::InvalidConfig(format!(
                "a_min must be below a_max, got [{}, {}]",
                self.a_min, self.a_max
            )));
        }
        if self.population_size < 1 {
            return Err(TrussError::InvalidConfig(
                "population_size must be at least 1".to_string(),
            ));
        }
        if self.max_iterations < 1 {
            return Err(TrussError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.w_min <= self.w_max) {
            return Err(TrussError::InvalidConfig(format!(
                "inertia schedule must satisfy w_min <= w_max, got [{}, {}]",
                self.w_min, self.w_max
            )));
        }
        Ok(())
    }

    /// Component-wise velocity clamp, 20% of the area box width
    pub fn velocity_limit(&self) -> f64 {
        0.2 * (self.a_max - self.a_min)
    }

    /// Inertia weight for the given iteration, decreasing linearly from
    /// `w_max` toward `w_min` over the run
    pub fn inertia(&self, iteration: usize) -> f64 {
        self.w_max - (self.w_max - self.w_min) * iteration as f64 / self.max_iterations as f64
    }
}

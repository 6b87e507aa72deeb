//! Per-particle swarm state

use rand::Rng;

/// One candidate area vector with its velocity and personal best
pub(crate) struct Particle {
    /// Current area vector
    pub position: Vec<f64>,
    /// Change-in-area vector applied each iteration
    pub velocity: Vec<f64>,
    /// Cost of the current position
    pub cost: f64,
    /// Best position this particle has visited
    pub best_position: Vec<f64>,
    /// Cost of the personal best
    pub best_cost: f64,
}

impl Particle {
    /// Sample a fresh particle.
    ///
    /// Positions start in the upper half of the area box, steering the swarm
    /// away from the mostly-infeasible low end; velocities start anywhere
    /// inside the clamp range.
    pub fn spawn<R: Rng>(rng: &mut R, dims: usize, a_min: f64, a_max: f64, v_limit: f64) -> Self {
        let position: Vec<f64> = (0..dims)
            .map(|_| rng.gen_range(0.5 * (a_max - a_min)..a_max))
            .collect();
        let velocity = (0..dims).map(|_| rng.gen_range(-v_limit..v_limit)).collect();

        Self {
            best_position: position.clone(),
            position,
            velocity,
            cost: f64::INFINITY,
            best_cost: f64::INFINITY,
        }
    }

    /// Advance one velocity/position update.
    ///
    /// Each component draws its own pair of uniform [0, 1) factors; velocity
    /// is clamped before the position step and the position clamped to the
    /// area box after it.
    #[allow(clippy::too_many_arguments)]
    pub fn step<R: Rng>(
        &mut self,
        rng: &mut R,
        w: f64,
        c1: f64,
        c2: f64,
        global_best: &[f64],
        a_min: f64,
        a_max: f64,
        v_limit: f64,
    ) {
        for i in 0..self.position.len() {
            let r1: f64 = rng.gen();
            let r2: f64 = rng.gen();

            let v = w * self.velocity[i]
                + c1 * r1 * (self.best_position[i] - self.position[i])
                + c2 * r2 * (global_best[i] - self.position[i]);

            self.velocity[i] = v.clamp(-v_limit, v_limit);
            self.position[i] = (self.position[i] + self.velocity[i]).clamp(a_min, a_max);
        }
    }

    /// Record the cost of the current position; returns whether the personal
    /// best improved
    pub fn record_cost(&mut self, cost: f64) -> bool {
        self.cost = cost;
        if cost < self.best_cost {
            self.best_cost = cost;
            self.best_position.clone_from(&self.position);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const A_MIN: f64 = 0.1;
    const A_MAX: f64 = 40.0;
    const V_LIMIT: f64 = 0.2 * (A_MAX - A_MIN);

    #[test]
    fn test_spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = Particle::spawn(&mut rng, 6, A_MIN, A_MAX, V_LIMIT);
            for &x in &p.position {
                assert!(x >= 0.5 * (A_MAX - A_MIN) && x <= A_MAX);
            }
            for &v in &p.velocity {
                assert!(v.abs() <= V_LIMIT);
            }
            assert_eq!(p.best_position, p.position);
            assert!(p.best_cost.is_infinite());
        }
    }

    #[test]
    fn test_step_respects_clamps() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = Particle::spawn(&mut rng, 4, A_MIN, A_MAX, V_LIMIT);

        // A distant attractor forces large raw velocities
        let far = vec![1000.0; 4];
        for iteration in 0..200 {
            p.step(&mut rng, 0.9, 2.0, 2.0, &far, A_MIN, A_MAX, V_LIMIT);
            for i in 0..4 {
                assert!(
                    p.velocity[i].abs() <= V_LIMIT,
                    "velocity escaped clamp at iteration {iteration}"
                );
                assert!(
                    p.position[i] >= A_MIN && p.position[i] <= A_MAX,
                    "position escaped box at iteration {iteration}"
                );
            }
        }
    }

    #[test]
    fn test_record_cost_tracks_personal_best() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::spawn(&mut rng, 2, A_MIN, A_MAX, V_LIMIT);

        assert!(p.record_cost(10.0));
        let first_best = p.best_position.clone();

        p.position[0] += 1.0;
        assert!(!p.record_cost(12.0));
        assert_eq!(p.best_cost, 10.0);
        assert_eq!(p.best_position, first_best);

        assert!(p.record_cost(8.0));
        assert_eq!(p.best_cost, 8.0);
        assert_eq!(p.best_position, p.position);
    }
}

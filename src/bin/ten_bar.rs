//! Sizing demo - the classic 10-bar cantilever truss
//!
//! Optimizes the ten member areas of the benchmark cantilever and prints the
//! resulting design, stresses, and displaced shape. The per-iteration best
//! cost is written to `convergence.json` for external plotting.

use std::fs::File;

use anyhow::Result;
use truss_pso::prelude::*;

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse::<u64>().ok())
}

fn env_usize(name: &str, default_val: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(default_val)
}

/// The 10-bar planar cantilever: two bays of top and bottom chords, two
/// verticals, and crossing diagonals, fixed at the wall.
///
///     4 ---- 2 ---- 0
///     | \  / | \  / |
///     |  \/  |  \/  |
///     |  /\  |  /\  |
///     5 ---- 3 ---- 1
///     ^ wall
fn build_ten_bar_model() -> Result<TrussModel> {
    let mut model = TrussModel::new();

    model.add_node(720.0, 360.0); // 0
    model.add_node(720.0, 0.0); // 1
    model.add_node(360.0, 360.0); // 2
    model.add_node(360.0, 0.0); // 3
    model.add_node(0.0, 360.0); // 4
    model.add_node(0.0, 0.0); // 5

    for (i, j) in [
        (4, 2),
        (2, 0),
        (5, 3),
        (3, 1),
        (3, 2),
        (1, 0),
        (4, 3),
        (5, 2),
        (2, 1),
        (3, 0),
    ] {
        model.add_member(Member::new(i, j))?;
    }

    model.set_support(4, Support::Fixed)?;
    model.set_support(5, Support::Fixed)?;

    model.add_point_load(PointLoad::fy(1, -100.0))?;
    model.add_point_load(PointLoad::fy(3, -100.0))?;

    Ok(model)
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== 10-bar truss sizing ===\n");

    let model = build_ten_bar_model()?;
    let analyzer = StiffnessAnalyzer::new(&model)?;

    let mut config = PsoConfig::new(0.1, 40.0)
        .with_iterations(env_usize("ITERATIONS", 500))
        .with_population(env_usize("POPULATION", 30));
    if let Some(seed) = env_u64("SEED") {
        config = config.with_seed(seed);
    }

    let swarm = ParticleSwarm::new(&analyzer, CostEvaluator::new(25.0), config)?;
    let result = swarm.run()?;

    println!("Best cost: {:.4e}", result.best_cost);
    println!("Total mass: {:.3}\n", result.analysis.mass);

    println!("Member   Area [in2]   Stress [ksi]");
    for (i, (area, stress)) in result
        .best_areas
        .iter()
        .zip(&result.analysis.stresses)
        .enumerate()
    {
        println!("{i:>6}   {area:>10.4}   {stress:>12.4}");
    }

    println!("\nNode     dX [in]      dY [in]");
    for (i, d) in result.analysis.displacements.iter().enumerate() {
        println!("{i:>4}   {:>9.5}   {:>9.5}", d[0], d[1]);
    }

    result.write_history_json(File::create("convergence.json")?)?;
    println!(
        "\nWrote best-cost history ({} iterations) to convergence.json",
        result.iterations()
    );

    Ok(())
}

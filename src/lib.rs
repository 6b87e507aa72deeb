//! truss-pso - truss sizing by particle swarm optimization
//!
//! This library sizes the cross-sectional areas of 2D pin-jointed trusses to
//! minimize a penalized weight cost. It pairs:
//! - a linear-elastic direct stiffness analyzer (dense assembly and solve,
//!   member stress recovery, mass and reaction totals)
//! - a particle swarm optimizer that queries the analyzer and a penalized
//!   cost function as its fitness oracle, under box constraints and velocity
//!   clamping
//!
//! ## Example
//! ```rust
//! use truss_pso::prelude::*;
//!
//! let mut model = TrussModel::new();
//!
//! // A vertical hanger braced by a horizontal member
//! let top = model.add_node(0.0, 0.0);
//! let tip = model.add_node(0.0, -100.0);
//! let side = model.add_node(100.0, -100.0);
//!
//! model.set_support(top, Support::Fixed).unwrap();
//! model.set_support(side, Support::Fixed).unwrap();
//!
//! model.add_member(Member::new(top, tip)).unwrap();
//! model.add_member(Member::new(tip, side)).unwrap();
//!
//! model.add_point_load(PointLoad::fy(tip, -50.0)).unwrap();
//!
//! // Size both member areas
//! let analyzer = StiffnessAnalyzer::new(&model).unwrap();
//! let config = PsoConfig::new(0.1, 40.0)
//!     .with_population(10)
//!     .with_iterations(25)
//!     .with_seed(7);
//! let swarm = ParticleSwarm::new(&analyzer, CostEvaluator::new(25.0), config).unwrap();
//!
//! let result = swarm.run().unwrap();
//! assert_eq!(result.best_areas.len(), 2);
//! ```

pub mod analysis;
pub mod cost;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod optimizer;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{Analyzer, GroupedAnalyzer, StiffnessAnalyzer};
    pub use crate::cost::CostEvaluator;
    pub use crate::elements::{Material, Member, Node, Support};
    pub use crate::error::{TrussError, TrussResult};
    pub use crate::loads::{Direction, PointLoad};
    pub use crate::model::TrussModel;
    pub use crate::optimizer::{ParticleSwarm, PsoConfig};
    pub use crate::results::{AnalysisResult, OptimizationResult};
}

//! Point loads - forces applied directly to nodes

use serde::{Deserialize, Serialize};

/// Direction of an applied nodal force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Horizontal
    X,
    /// Vertical
    Y,
}

impl Direction {
    /// DOF offset within a node (X = 0, Y = 1)
    pub fn dof_offset(&self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
        }
    }
}

/// A concentrated force applied to a node.
///
/// Multiple loads on the same node and direction superimpose additively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Index of the loaded node
    pub node: usize,
    /// Direction the force acts in
    pub direction: Direction,
    /// Signed magnitude of the force
    pub magnitude: f64,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(node: usize, direction: Direction, magnitude: f64) -> Self {
        Self {
            node,
            direction,
            magnitude,
        }
    }

    /// Create a horizontal load
    pub fn fx(node: usize, magnitude: f64) -> Self {
        Self::new(node, Direction::X, magnitude)
    }

    /// Create a vertical load
    pub fn fy(node: usize, magnitude: f64) -> Self {
        Self::new(node, Direction::Y, magnitude)
    }

    /// Global DOF index this load contributes to
    pub fn dof_index(&self) -> usize {
        2 * self.node + self.direction.dof_offset()
    }
}

//! Member element - an axial-only bar between two nodes

use serde::{Deserialize, Serialize};

/// A pin-ended truss member.
///
/// Members are physically undirected, but the endpoint order fixes the local
/// axis sign convention: the same transform row is used for stiffness
/// assembly and stress recovery, so i/j must never be swapped between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Index of the i-node (start)
    pub i_node: usize,
    /// Index of the j-node (end)
    pub j_node: usize,
    /// Cross-section group this member's area is drawn from
    pub group: usize,
}

impl Member {
    /// Create a new member between two node indices.
    ///
    /// The cross-section group defaults to the member's own slot; use
    /// [`Member::with_group`] to share one area across several members.
    pub fn new(i_node: usize, j_node: usize) -> Self {
        Self {
            i_node,
            j_node,
            group: 0,
        }
    }

    /// Assign the member to a cross-section group
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    /// Global DOF indices of the member's endpoints, in transform-row order
    pub fn dof_indices(&self) -> [usize; 4] {
        [
            2 * self.i_node,
            2 * self.i_node + 1,
            2 * self.j_node,
            2 * self.j_node + 1,
        ]
    }
}

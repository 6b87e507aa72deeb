//! Support conditions

use serde::{Deserialize, Serialize};

/// Restraint code at a node.
///
/// The 2D truss model only carries translational DOF (two per node), and a
/// node is either fully pinned or fully free - there is no partial restraint.
/// Restrained DOF have zero prescribed displacement; support settlement is
/// not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Support {
    /// Both translational DOF restrained
    Fixed,
    /// Both translational DOF active
    #[default]
    Free,
}

impl Support {
    /// Check if the node's DOF are restrained
    pub fn is_fixed(&self) -> bool {
        matches!(self, Support::Fixed)
    }

    /// Count of restrained DOF at this node
    pub fn num_restrained(&self) -> usize {
        if self.is_fixed() {
            2
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_support() {
        let support = Support::Fixed;
        assert!(support.is_fixed());
        assert_eq!(support.num_restrained(), 2);
    }

    #[test]
    fn test_default_is_free() {
        assert_eq!(Support::default(), Support::Free);
        assert_eq!(Support::Free.num_restrained(), 0);
    }
}

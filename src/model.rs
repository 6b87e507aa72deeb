//! Truss model - main structural model container

use serde::{Deserialize, Serialize};

use crate::elements::{Material, Member, Node, Support};
use crate::error::{TrussError, TrussResult};
use crate::loads::PointLoad;
use crate::math::Vec as DVec;

/// The 2D pin-jointed truss model.
///
/// Built once through the validated `add_*` methods and read-only afterwards;
/// the analyzer borrows it immutably for every area-vector query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrussModel {
    nodes: Vec<Node>,
    members: Vec<Member>,
    /// Restraint per node, parallel to `nodes`
    supports: Vec<Support>,
    point_loads: Vec<PointLoad>,
    material: Material,
}

impl Default for TrussModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TrussModel {
    /// Create a new empty model with the default material
    pub fn new() -> Self {
        Self::with_material(Material::default())
    }

    /// Create a new empty model with the given material
    pub fn with_material(material: Material) -> Self {
        Self {
            nodes: Vec::new(),
            members: Vec::new(),
            supports: Vec::new(),
            point_loads: Vec::new(),
            material,
        }
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node and return its index. Nodes start out free.
    pub fn add_node(&mut self, x: f64, y: f64) -> usize {
        self.nodes.push(Node::new(x, y));
        self.supports.push(Support::Free);
        self.nodes.len() - 1
    }

    /// Set the restraint code of an existing node
    pub fn set_support(&mut self, node: usize, support: Support) -> TrussResult<()> {
        if node >= self.nodes.len() {
            return Err(TrussError::NodeNotFound(node));
        }
        self.supports[node] = support;
        Ok(())
    }

    /// Add a member and return its index.
    ///
    /// Both endpoint nodes must already exist and must not coincide; a
    /// zero-length member is a fatal modeling error caught here, before any
    /// analysis can run.
    pub fn add_member(&mut self, member: Member) -> TrussResult<usize> {
        if member.i_node >= self.nodes.len() {
            return Err(TrussError::NodeNotFound(member.i_node));
        }
        if member.j_node >= self.nodes.len() {
            return Err(TrussError::NodeNotFound(member.j_node));
        }

        let length = self.nodes[member.i_node].distance_to(&self.nodes[member.j_node]);
        if length < 1e-10 {
            return Err(TrussError::InvalidGeometry(format!(
                "Member has zero length: i={}, j={}",
                member.i_node, member.j_node
            )));
        }

        self.members.push(member);
        Ok(self.members.len() - 1)
    }

    /// Add a point load to a node. Loads on the same DOF superimpose.
    pub fn add_point_load(&mut self, load: PointLoad) -> TrussResult<()> {
        if load.node >= self.nodes.len() {
            return Err(TrussError::NodeNotFound(load.node));
        }
        self.point_loads.push(load);
        Ok(())
    }

    // ========================
    // Accessors
    // ========================

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Members in insertion order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Per-node restraint codes
    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    /// Applied point loads
    pub fn point_loads(&self) -> &[PointLoad] {
        &self.point_loads
    }

    /// The shared member material
    pub fn material(&self) -> Material {
        self.material
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of members
    pub fn num_members(&self) -> usize {
        self.members.len()
    }

    /// Total number of translational DOF (two per node)
    pub fn num_dofs(&self) -> usize {
        2 * self.nodes.len()
    }

    /// Number of distinct cross-section groups referenced by the members
    pub fn num_groups(&self) -> usize {
        self.members
            .iter()
            .map(|m| m.group + 1)
            .max()
            .unwrap_or(0)
    }

    /// Build the global load vector by superimposing all point loads
    pub fn load_vector(&self) -> DVec {
        let mut p = DVec::zeros(self.num_dofs());
        for load in &self.point_loads {
            p[load.dof_index()] += load.magnitude;
        }
        p
    }

    /// Global indices of the unrestrained DOF
    pub fn free_dofs(&self) -> Vec<usize> {
        let mut dofs = Vec::new();
        for (i, support) in self.supports.iter().enumerate() {
            if !support.is_fixed() {
                dofs.push(2 * i);
                dofs.push(2 * i + 1);
            }
        }
        dofs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Direction;

    fn two_node_model() -> TrussModel {
        let mut model = TrussModel::new();
        model.add_node(0.0, 0.0);
        model.add_node(100.0, 0.0);
        model
    }

    #[test]
    fn test_member_validates_node_indices() {
        let mut model = two_node_model();
        let err = model.add_member(Member::new(0, 2)).unwrap_err();
        assert!(matches!(err, TrussError::NodeNotFound(2)));
    }

    #[test]
    fn test_member_rejects_coincident_nodes() {
        let mut model = two_node_model();
        let dup = model.add_node(0.0, 0.0);
        let err = model.add_member(Member::new(0, dup)).unwrap_err();
        assert!(matches!(err, TrussError::InvalidGeometry(_)));
    }

    #[test]
    fn test_load_superposition() {
        let mut model = two_node_model();
        model
            .add_point_load(PointLoad::new(1, Direction::Y, -60.0))
            .unwrap();
        model
            .add_point_load(PointLoad::new(1, Direction::Y, -40.0))
            .unwrap();

        let p = model.load_vector();
        assert_eq!(p[3], -100.0);
        assert_eq!(p[2], 0.0);
    }

    #[test]
    fn test_load_rejects_missing_node() {
        let mut model = two_node_model();
        let err = model.add_point_load(PointLoad::fy(9, -1.0)).unwrap_err();
        assert!(matches!(err, TrussError::NodeNotFound(9)));
    }

    #[test]
    fn test_free_dof_partition() {
        let mut model = two_node_model();
        model.set_support(0, Support::Fixed).unwrap();
        assert_eq!(model.free_dofs(), vec![2, 3]);
        assert_eq!(model.num_dofs(), 4);
    }

    #[test]
    fn test_group_count() {
        let mut model = two_node_model();
        model.add_node(200.0, 0.0);
        model.add_member(Member::new(0, 1).with_group(0)).unwrap();
        model.add_member(Member::new(1, 2).with_group(2)).unwrap();
        assert_eq!(model.num_groups(), 3);
    }
}

//! Linear-elastic truss analysis via the direct stiffness method

use crate::error::{TrussError, TrussResult};
use crate::math::{self, Mat, Vec as DVec, Vec4};
use crate::model::TrussModel;
use crate::results::AnalysisResult;

/// The fitness oracle seam: anything that maps a member area vector to
/// analysis results.
///
/// The optimizer only speaks this trait, so alternate backends (an external
/// FEA application bridge, a grouped-area layer) slot in without touching the
/// swarm.
pub trait Analyzer {
    /// Length of the area vector `analyze` expects
    fn num_areas(&self) -> usize;

    /// Analyze the structure under the given areas
    fn analyze(&self, areas: &[f64]) -> TrussResult<AnalysisResult>;
}

/// Precomputed member geometry, fixed for the lifetime of the model
#[derive(Debug)]
struct MemberGeometry {
    /// Transform row `[-cx, -cy, cx, cy]`
    row: Vec4,
    length: f64,
    /// Global DOF indices of the endpoints, in row order
    dofs: [usize; 4],
}

/// Direct stiffness analyzer over a borrowed, immutable model.
///
/// Member directions, lengths and the load vector are computed once at
/// construction; every `analyze` call assembles and solves a fresh global
/// stiffness system for its area vector.
#[derive(Debug)]
pub struct StiffnessAnalyzer<'a> {
    model: &'a TrussModel,
    geometry: Vec<MemberGeometry>,
    free_dofs: Vec<usize>,
    loads: DVec,
}

impl<'a> StiffnessAnalyzer<'a> {
    /// Prepare an analyzer for the given model
    pub fn new(model: &'a TrussModel) -> TrussResult<Self> {
        let nodes = model.nodes();
        let geometry = model
            .members()
            .iter()
            .map(|member| {
                let (row, length) = math::member_transform_row(
                    &nodes[member.i_node].coords(),
                    &nodes[member.j_node].coords(),
                );
                MemberGeometry {
                    row,
                    length,
                    dofs: member.dof_indices(),
                }
            })
            .collect();

        let free_dofs = model.free_dofs();
        if free_dofs.is_empty() {
            return Err(TrussError::AnalysisFailed(
                "No free degrees of freedom".to_string(),
            ));
        }

        Ok(Self {
            model,
            geometry,
            free_dofs,
            loads: model.load_vector(),
        })
    }

    fn check_areas(&self, areas: &[f64]) -> TrussResult<()> {
        if areas.len() != self.geometry.len() {
            return Err(TrussError::AreaCountMismatch {
                expected: self.geometry.len(),
                actual: areas.len(),
            });
        }
        for (index, &value) in areas.iter().enumerate() {
            if !(value > 0.0) {
                return Err(TrussError::NonPositiveArea { index, value });
            }
        }
        Ok(())
    }

    /// Assemble the dense global stiffness matrix for the given areas
    fn assemble_stiffness(&self, areas: &[f64]) -> Mat {
        let e = self.model.material().e;
        let mut k = Mat::zeros(self.model.num_dofs(), self.model.num_dofs());

        for (geo, &area) in self.geometry.iter().zip(areas) {
            let block = math::member_stiffness(&geo.row, e, area, geo.length);
            for (a, &da) in geo.dofs.iter().enumerate() {
                for (b, &db) in geo.dofs.iter().enumerate() {
                    k[(da, db)] += block[(a, b)];
                }
            }
        }

        k
    }
}

impl Analyzer for StiffnessAnalyzer<'_> {
    fn num_areas(&self) -> usize {
        self.geometry.len()
    }

    fn analyze(&self, areas: &[f64]) -> TrussResult<AnalysisResult> {
        self.check_areas(areas)?;

        let material = self.model.material();
        let k = self.assemble_stiffness(areas);

        // Free-free partition and load subvector
        let n_free = self.free_dofs.len();
        let mut kff = Mat::zeros(n_free, n_free);
        let mut pf = DVec::zeros(n_free);

        for (i, &di) in self.free_dofs.iter().enumerate() {
            pf[i] = self.loads[di];
            for (j, &dj) in self.free_dofs.iter().enumerate() {
                kff[(i, j)] = k[(di, dj)];
            }
        }

        // Solve Kff * Uf = Pf; a singular or ill-conditioned system is a
        // terminal error for this evaluation, never a garbage result
        let uf = math::solve_linear_system(&kff, &pf).ok_or(TrussError::SingularStiffness)?;
        if uf.iter().any(|u| !u.is_finite()) {
            return Err(TrussError::SingularStiffness);
        }

        // Full displacement vector; restrained DOF stay at zero
        let mut u = DVec::zeros(self.model.num_dofs());
        for (i, &di) in self.free_dofs.iter().enumerate() {
            u[di] = uf[i];
        }

        // Stress recovery through the same transform rows used for assembly
        let mut forces = Vec::with_capacity(self.geometry.len());
        let mut stresses = Vec::with_capacity(self.geometry.len());
        let mut mass = 0.0;

        for (geo, &area) in self.geometry.iter().zip(areas) {
            let elongation: f64 = geo
                .dofs
                .iter()
                .zip(geo.row.iter())
                .map(|(&dof, &a)| a * u[dof])
                .sum();
            let force = material.e * area / geo.length * elongation;

            forces.push(force);
            stresses.push(force / area);
            mass += material.density * area * geo.length;
        }

        let displacements: Vec<[f64; 2]> = (0..self.model.num_nodes())
            .map(|i| [u[2 * i], u[2 * i + 1]])
            .collect();

        // Reactions: R = K*U - P, masked to restrained DOF
        let residual = &k * &u - &self.loads;
        let reactions: Vec<[f64; 2]> = self
            .model
            .supports()
            .iter()
            .enumerate()
            .map(|(i, support)| {
                if support.is_fixed() {
                    [residual[2 * i], residual[2 * i + 1]]
                } else {
                    [0.0, 0.0]
                }
            })
            .collect();

        Ok(AnalysisResult {
            stresses,
            forces,
            mass,
            displacements,
            reactions,
        })
    }
}

/// Grouped cross-section layer on top of any analyzer.
///
/// Maps one area per cross-section group to the per-member vector the inner
/// analyzer expects, shrinking the optimizer's decision space to the number
/// of distinct groups.
pub struct GroupedAnalyzer<A> {
    inner: A,
    group_of: Vec<usize>,
    num_groups: usize,
}

impl<A: Analyzer> GroupedAnalyzer<A> {
    /// Wrap an analyzer with a member-to-group mapping.
    ///
    /// `group_of[m]` is the group whose area member `m` draws; its length
    /// must match the inner analyzer's area count.
    pub fn new(inner: A, group_of: Vec<usize>) -> TrussResult<Self> {
        if group_of.len() != inner.num_areas() {
            return Err(TrussError::InvalidConfig(format!(
                "Group map covers {} members, analyzer expects {}",
                group_of.len(),
                inner.num_areas()
            )));
        }
        let num_groups = group_of.iter().map(|&g| g + 1).max().unwrap_or(0);

        Ok(Self {
            inner,
            group_of,
            num_groups,
        })
    }

    /// Wrap a stiffness analyzer using the group assignments of its model
    pub fn from_model(inner: A, model: &TrussModel) -> TrussResult<Self> {
        let group_of = model.members().iter().map(|m| m.group).collect();
        Self::new(inner, group_of)
    }

    /// Expand one area per group into the per-member area vector
    pub fn expand(&self, group_areas: &[f64]) -> TrussResult<Vec<f64>> {
        if group_areas.len() != self.num_groups {
            return Err(TrussError::AreaCountMismatch {
                expected: self.num_groups,
                actual: group_areas.len(),
            });
        }
        Ok(self.group_of.iter().map(|&g| group_areas[g]).collect())
    }
}

impl<A: Analyzer> Analyzer for GroupedAnalyzer<A> {
    fn num_areas(&self) -> usize {
        self.num_groups
    }

    fn analyze(&self, areas: &[f64]) -> TrussResult<AnalysisResult> {
        let member_areas = self.expand(areas)?;
        self.inner.analyze(&member_areas)
    }
}

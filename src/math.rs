//! Mathematical utilities for the direct stiffness method

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// Transform row mapping the 4 endpoint DOF of a member to axial elongation
pub type Vec4 = SVector<f64, 4>;
/// 4x4 member stiffness block
pub type Mat4 = SMatrix<f64, 4, 4>;

/// Compute the local-to-global transform row for a truss member
///
/// # Arguments
/// * `i_node` - Start node coordinates [X, Y]
/// * `j_node` - End node coordinates [X, Y]
///
/// # Returns
/// The row `[-cx, -cy, cx, cy]` and the member length. Dotting the row with
/// the endpoint displacement vector `[uxi, uyi, uxj, uyj]` yields the axial
/// elongation, positive in tension.
///
/// Panics if the nodes coincide; the model rejects zero-length members before
/// they reach assembly.
pub fn member_transform_row(i_node: &[f64; 2], j_node: &[f64; 2]) -> (Vec4, f64) {
    let dx = j_node[0] - i_node[0];
    let dy = j_node[1] - i_node[1];

    let length = (dx * dx + dy * dy).sqrt();

    if length < 1e-10 {
        panic!("Member has zero length");
    }

    let cx = dx / length;
    let cy = dy / length;

    (Vec4::new(-cx, -cy, cx, cy), length)
}

/// Compute the 4x4 global stiffness block of a truss member
///
/// The block is the rank-one product `outer(a, a) * E * A / L` of the
/// member's transform row.
pub fn member_stiffness(a: &Vec4, e: f64, area: f64, length: f64) -> Mat4 {
    (a * a.transpose()) * (e * area / length)
}

/// Solve a dense linear system using LU decomposition
///
/// Returns `None` when the matrix is singular.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_row_horizontal() {
        let (a, length) = member_transform_row(&[0.0, 0.0], &[10.0, 0.0]);
        assert_relative_eq!(length, 10.0, epsilon = 1e-12);
        assert_relative_eq!(a[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(a[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(a[2], 1.0, epsilon = 1e-12);
        assert_relative_eq!(a[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_row_diagonal() {
        let (a, length) = member_transform_row(&[0.0, 0.0], &[3.0, 4.0]);
        assert_relative_eq!(length, 5.0, epsilon = 1e-12);
        assert_relative_eq!(a[2], 0.6, epsilon = 1e-12);
        assert_relative_eq!(a[3], 0.8, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "zero length")]
    fn test_transform_row_coincident_nodes() {
        member_transform_row(&[1.0, 1.0], &[1.0, 1.0]);
    }

    #[test]
    fn test_member_stiffness_symmetry() {
        let (a, length) = member_transform_row(&[0.0, 0.0], &[3.0, 4.0]);
        let k = member_stiffness(&a, 1.0e4, 2.0, length);

        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-12);
            }
        }
        // Axial stiffness along the member axis equals EA/L
        let u = Vec4::new(0.0, 0.0, 0.6, 0.8);
        let f = k * u;
        assert_relative_eq!(f.dot(&u), 1.0e4 * 2.0 / 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_solve_singular_system() {
        let a = Mat::zeros(2, 2);
        let b = Vec::from_element(2, 1.0);
        assert!(solve_linear_system(&a, &b).is_none());
    }

    #[test]
    fn test_solve_identity_system() {
        let a = Mat::identity(3, 3) * 2.0;
        let b = Vec::from_element(3, 4.0);
        let x = solve_linear_system(&a, &b).unwrap();
        for i in 0..3 {
            assert_relative_eq!(x[i], 2.0, epsilon = 1e-12);
        }
    }
}

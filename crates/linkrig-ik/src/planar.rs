//! Closed-form two-link planar arm.
//!
//! The elbow angle comes from the law of cosines; the base angle subtracts
//! the interior offset of the elbow from the bearing to the target. Both
//! arctangents use the two-argument form so a target on the y-axis
//! (`p.x == 0`) is not a special case.

use nalgebra::Vector2;

use linkrig_core::error::IkError;

/// One `(q1, q2)` joint-angle pair for a two-link planar linkage, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarSolution {
    /// Base joint angle.
    pub q1: f64,
    /// Elbow joint angle.
    pub q2: f64,
}

/// Compute both joint-angle combinations reaching `p` with link lengths
/// `a1` and `a2`.
///
/// Returns exactly two solutions in a fixed order: the positive-elbow
/// ("elbow up") branch first, its mirror image second. Both branches
/// forward-kinematically reproduce `p`.
///
/// # Errors
///
/// - [`IkError::DegenerateGeometry`] when either link length is zero.
/// - [`IkError::UnreachableTarget`] when the arccosine argument falls
///   outside `[-1, 1]`: `p` lies outside the annular workspace
///   `|a1 - a2| <= |p| <= a1 + a2`.
pub fn solve_two_joint_planar(
    p: &Vector2<f64>,
    a1: f64,
    a2: f64,
) -> Result<[PlanarSolution; 2], IkError> {
    if a1 == 0.0 || a2 == 0.0 {
        return Err(IkError::DegenerateGeometry("zero-length link"));
    }

    let cos_q2 = (p.norm_squared() - a1 * a1 - a2 * a2) / (2.0 * a1 * a2);
    if cos_q2.abs() > 1.0 {
        return Err(IkError::UnreachableTarget {
            function: "acos",
            argument: cos_q2,
        });
    }

    let q2 = cos_q2.acos();
    let bearing = p.y.atan2(p.x);
    let elbow_offset = (a2 * q2.sin()).atan2(a1 + a2 * cos_q2);

    // The two branches mirror about the straight line to the target.
    Ok([
        PlanarSolution {
            q1: bearing - elbow_offset,
            q2,
        },
        PlanarSolution {
            q1: bearing + elbow_offset,
            q2: -q2,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Reconstruct the end-effector position from link lengths and angles.
    fn forward(sol: &PlanarSolution, a1: f64, a2: f64) -> Vector2<f64> {
        Vector2::new(
            a1 * sol.q1.cos() + a2 * (sol.q1 + sol.q2).cos(),
            a1 * sol.q1.sin() + a2 * (sol.q1 + sol.q2).sin(),
        )
    }

    #[test]
    fn unit_links_diagonal_target() {
        // p = (1, 1), a1 = a2 = 1: cos(q2) = 0, so q2 = +-pi/2.
        let sols = solve_two_joint_planar(&Vector2::new(1.0, 1.0), 1.0, 1.0).unwrap();
        assert_relative_eq!(sols[0].q2, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(sols[1].q2, -std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(sols[0].q1, 0.0, epsilon = 1e-12);
        assert_relative_eq!(sols[1].q1, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn fully_extended_reach() {
        let sols = solve_two_joint_planar(&Vector2::new(2.0, 0.0), 1.0, 1.0).unwrap();
        assert_relative_eq!(sols[0].q2, 0.0, epsilon = 1e-7);
        assert_relative_eq!(sols[0].q1, 0.0, epsilon = 1e-7);
    }

    #[test]
    fn both_branches_reproduce_the_target() {
        let targets = [
            Vector2::new(1.0, 1.0),
            Vector2::new(0.5, -0.8),
            Vector2::new(-0.6, 1.1),
            Vector2::new(0.0, 1.5),
            Vector2::new(1.9, 0.1),
        ];
        for p in &targets {
            let sols = solve_two_joint_planar(p, 1.0, 1.0).unwrap();
            for sol in &sols {
                let reached = forward(sol, 1.0, 1.0);
                assert_relative_eq!(reached.x, p.x, epsilon = 1e-9);
                assert_relative_eq!(reached.y, p.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn unequal_links_reproduce_the_target() {
        let (a1, a2) = (1.3, 0.7);
        let p = Vector2::new(0.9, -1.1);
        let sols = solve_two_joint_planar(&p, a1, a2).unwrap();
        for sol in &sols {
            let reached = forward(sol, a1, a2);
            assert_relative_eq!(reached.x, p.x, epsilon = 1e-9);
            assert_relative_eq!(reached.y, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn target_on_y_axis_is_not_degenerate() {
        // p.x == 0 must solve cleanly thanks to the two-argument arctangent.
        let p = Vector2::new(0.0, 1.2);
        let sols = solve_two_joint_planar(&p, 1.0, 1.0).unwrap();
        for sol in &sols {
            let reached = forward(sol, 1.0, 1.0);
            assert_relative_eq!(reached.x, 0.0, epsilon = 1e-9);
            assert_relative_eq!(reached.y, 1.2, epsilon = 1e-9);
        }
    }

    #[test]
    fn target_beyond_reach_is_unreachable() {
        // |p| = 3 > a1 + a2 = 2: acos argument = (9 - 2) / 2 = 3.5.
        let result = solve_two_joint_planar(&Vector2::new(3.0, 0.0), 1.0, 1.0);
        match result {
            Err(IkError::UnreachableTarget { function, argument }) => {
                assert_eq!(function, "acos");
                assert_relative_eq!(argument, 3.5, epsilon = 1e-12);
            }
            other => panic!("expected UnreachableTarget, got {other:?}"),
        }
    }

    #[test]
    fn target_inside_inner_annulus_is_unreachable() {
        // a1 = 2, a2 = 1: targets closer than |a1 - a2| = 1 cannot be reached.
        let result = solve_two_joint_planar(&Vector2::new(0.3, 0.0), 2.0, 1.0);
        assert!(matches!(result, Err(IkError::UnreachableTarget { .. })));
    }

    #[test]
    fn zero_length_link_is_degenerate() {
        let result = solve_two_joint_planar(&Vector2::new(1.0, 0.0), 0.0, 1.0);
        assert!(matches!(
            result,
            Err(IkError::DegenerateGeometry("zero-length link"))
        ));
    }

    #[test]
    fn branch_order_is_stable() {
        let sols = solve_two_joint_planar(&Vector2::new(0.8, 0.6), 1.0, 1.0).unwrap();
        assert!(sols[0].q2 >= 0.0);
        assert!(sols[1].q2 <= 0.0);
    }
}

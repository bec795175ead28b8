//! Closed-form single-servo horn angle.
//!
//! Derived from the law of cosines applied to the triangle formed by the
//! servo pivot, the horn tip, and the end effector, projected onto the
//! horn's rotation plane.

use nalgebra::Vector3;

use linkrig_core::error::IkError;

/// Physical geometry of one horn-and-rod servo linkage.
///
/// Supplied per call; the solver stores nothing between invocations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServoGeometry {
    /// Center of servo horn rotation, in the base frame (z up).
    pub pivot: Vector3<f64>,
    /// Length of the servo horn arm (`a`).
    pub horn_length: f64,
    /// Length of the connecting rod (`s`).
    pub rod_length: f64,
    /// Angle of the horn rotation plane relative to the forward (x) axis
    /// of the base, in radians (`beta`).
    pub horn_plane_angle: f64,
}

/// Compute the servo horn angle placing the horn tip so that the connecting
/// rod reaches `target`.
///
/// With `q` the target, `B` the pivot, `a` the horn length, `s` the rod
/// length, `l = |q - B|` and `beta` the horn plane angle:
///
/// ```text
/// L = l^2 - (s^2 - a^2)
/// M = 2a (q.z - B.z)
/// N = 2a (cos(beta) (q.x - B.x) + sin(beta) (q.y - B.y))
/// angle = asin(L / sqrt(M^2 + N^2)) - atan(N / M)
/// ```
///
/// # Errors
///
/// - [`IkError::DegenerateGeometry`] when `M` is zero (coincident pivot and
///   target, or a zero-length horn), checked before any division.
/// - [`IkError::UnreachableTarget`] when the arcsine argument falls outside
///   `[-1, 1]`: the horn and rod cannot span the distance to the target.
pub fn calc_servo_angle(target: &Vector3<f64>, geometry: &ServoGeometry) -> Result<f64, IkError> {
    let a = geometry.horn_length;
    let s = geometry.rod_length;
    let beta = geometry.horn_plane_angle;
    let offset = target - geometry.pivot;

    let l_sq = offset.norm_squared();
    let big_l = l_sq - (s * s - a * a);
    let m = 2.0 * a * offset.z;
    let n = 2.0 * a * (beta.cos() * offset.x + beta.sin() * offset.y);

    if m.abs() <= f64::EPSILON {
        return Err(IkError::DegenerateGeometry(
            "horn plane denominator is zero (coincident pivot/target or zero-length horn)",
        ));
    }

    let argument = big_l / m.hypot(n);
    if argument.abs() > 1.0 {
        return Err(IkError::UnreachableTarget {
            function: "asin",
            argument,
        });
    }

    Ok(argument.asin() - (n / m).atan())
}

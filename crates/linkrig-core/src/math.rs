//! Vector and scalar interpolation utilities.
//!
//! Pure numeric plumbing shared by the solvers and the mechanism layer:
//! linear interpolation, evenly spaced sequence generation, and sinusoidal
//! easing between bounds.

use nalgebra::Vector3;

/// Linearly interpolate between two points. `t = 0` yields `a`, `t = 1`
/// yields `b`; values outside `[0, 1]` extrapolate.
#[must_use]
pub fn lerp_vector(a: &Vector3<f64>, b: &Vector3<f64>, t: f64) -> Vector3<f64> {
    a + (b - a) * t
}

/// Generate `num` evenly spaced values over `[start, stop]`.
///
/// With `endpoint = true` the last value is exactly `stop`; with
/// `endpoint = false` the step is `(stop - start) / num` and `stop` itself is
/// excluded, matching numpy's `linspace` semantics.
#[must_use]
pub fn linspace(start: f64, stop: f64, num: usize, endpoint: bool) -> Vec<f64> {
    match num {
        0 => return Vec::new(),
        1 => return vec![start],
        _ => {}
    }

    let div = if endpoint { num - 1 } else { num };
    #[allow(clippy::cast_precision_loss)]
    let step = (stop - start) / div as f64;

    #[allow(clippy::cast_precision_loss)]
    (0..num).map(|i| start + step * i as f64).collect()
}

/// Sinusoidal oscillation between `min` and `max` as a function of time `t`.
///
/// Returns the midpoint when `sin(speed * t) = 0` and touches the bounds at
/// the sine extrema.
#[must_use]
pub fn sin_between(min: f64, max: f64, t: f64, speed: f64) -> f64 {
    let half_range = (max - min) / 2.0;
    min + half_range + (speed * t).sin() * half_range
}

/// Sinusoidal oscillation between two points: eases along the segment
/// `a -> b` with [`sin_between`] driving the interpolation parameter.
#[must_use]
pub fn sin_between_vectors(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    t: f64,
    speed: f64,
) -> Vector3<f64> {
    let norm_value = sin_between(0.0, 1.0, t, speed);
    lerp_vector(a, b, norm_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_vector_midpoint() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 0.0, 1.0);
        let mid = lerp_vector(&a, &b, 0.5);
        assert_relative_eq!(mid.z, 0.5, epsilon = 1e-12);
        assert_relative_eq!(mid.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn lerp_vector_endpoints() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-1.0, 0.0, 5.0);
        assert_relative_eq!((lerp_vector(&a, &b, 0.0) - a).norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!((lerp_vector(&a, &b, 1.0) - b).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn linspace_inclusive_endpoint() {
        let xs = linspace(0.0, 1.0, 5, true);
        assert_eq!(xs.len(), 5);
        assert_relative_eq!(xs[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(xs[1], 0.25, epsilon = 1e-12);
        assert_relative_eq!(xs[4], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn linspace_exclusive_endpoint() {
        let xs = linspace(0.0, 1.0, 4, false);
        assert_eq!(xs.len(), 4);
        assert_relative_eq!(xs[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(xs[3], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0, true).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1, true), vec![2.0]);
    }

    #[test]
    fn sin_between_known_value() {
        // sin(1) = 0.841470..., so 0.5 + 0.5 * sin(1):
        assert_relative_eq!(
            sin_between(0.0, 1.0, 1.0, 1.0),
            0.920_735_492_403_948_3,
            epsilon = 1e-12
        );
    }

    #[test]
    fn sin_between_stays_in_bounds() {
        for i in 0..100 {
            let t = f64::from(i) * 0.37;
            let v = sin_between(-2.0, 3.0, t, 1.7);
            assert!((-2.0..=3.0).contains(&v));
        }
    }

    #[test]
    fn sin_between_vectors_tracks_segment() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(2.0, 0.0, 0.0);
        // At t = 0 the easing parameter is 0.5: midpoint of the segment.
        let v = sin_between_vectors(&a, &b, 0.0, 1.0);
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-12);
    }
}

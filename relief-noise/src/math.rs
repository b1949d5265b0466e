//! Math helpers shared by the noise samplers.

/// Floor an `f64` to an `i32`.
///
/// `as` casts truncate toward zero, so negative non-integers need one
/// correction step. Cheaper than `f64::floor` plus a cast on the lattice
/// lookup path.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated - 1
    } else {
        truncated
    }
}

/// Linear interpolation between `start` and `end` by `t`.
#[inline]
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + t * (end - start)
}

/// Quintic fade curve `t^3 * (t * (6t - 15) + 10)`.
///
/// First and second derivative are zero at `t = 0` and `t = 1`, which keeps
/// the interpolated noise free of creases along lattice lines.
#[inline]
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Inverse linear interpolation: where `value` sits between `start` and
/// `end`, clamped to `[0, 1]`.
#[inline]
#[must_use]
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_matches_std() {
        let values = [-2.5, -2.0, -1.0001, -0.5, 0.0, 0.5, 1.0, 2.75, 255.999];
        for v in values {
            assert_eq!(floor(v), v.floor() as i32, "floor({v})");
        }
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert!((lerp(2.0, 6.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((lerp(2.0, 6.0, 1.0) - 6.0).abs() < 1e-12);
        assert!((lerp(2.0, 6.0, 0.5) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_smoothstep_fixed_points() {
        assert!(smoothstep(0.0).abs() < 1e-12);
        assert!((smoothstep(1.0) - 1.0).abs() < 1e-12);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_smoothstep_is_flat_at_endpoints() {
        // Near-zero slope at both ends is what hides the lattice.
        assert!(smoothstep(0.001) < 1e-7);
        assert!(1.0 - smoothstep(0.999) < 1e-7);
    }

    #[test]
    fn test_inverse_lerp_clamps() {
        assert!((inverse_lerp(-1.0, 1.0, 0.0) - 0.5).abs() < 1e-12);
        assert!((inverse_lerp(-1.0, 1.0, -3.0)).abs() < 1e-12);
        assert!((inverse_lerp(-1.0, 1.0, 3.0) - 1.0).abs() < 1e-12);
    }
}

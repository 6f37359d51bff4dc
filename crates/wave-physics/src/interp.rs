//! Interpolation helpers shared by parameter mapping and rendering

/// Linearly interpolate between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Remap `x` from the range `[a, b]` onto `[new_a, new_b]`
///
/// No clamping: values outside `[a, b]` extrapolate. A degenerate source
/// range (`a == b`) yields a non-finite result.
pub fn map(x: f64, a: f64, b: f64, new_a: f64, new_b: f64) -> f64 {
    let t = (x - a) / (b - a);
    lerp(new_a, new_b, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp(0.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn test_map_endpoints() {
        let (min, max) = (0.2, 1.0);
        assert_eq!(map(min, min, max, 0.0, 1.0), 0.0);
        assert_eq!(map(max, min, max, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_map_is_monotonic() {
        let (min, max) = (0.05, 0.25);
        let mut previous = f64::NEG_INFINITY;
        for i in 0..=100 {
            let x = lerp(min, max, i as f64 / 100.0);
            let y = map(x, min, max, 0.0, 1.0);
            assert!(y > previous);
            previous = y;
        }
    }

    #[test]
    fn test_map_reversed_target() {
        // Depth is drawn upside down: deeper water means lower seabed
        assert_relative_eq!(map(1.0, 1.0, 0.1, 0.1, 0.6), 0.1);
        assert_relative_eq!(map(0.1, 1.0, 0.1, 0.1, 0.6), 0.6);
    }
}

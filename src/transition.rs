/// Computes a single channel value for a step within a fade, given the
/// channel's value at the start and end of the transition.
///
/// The transition resolution is derived from the bounds themselves: the
/// value travels linearly from `start` at `step = 0` to `end` at
/// `step = max(start, end)`, so the same formula serves a full 8-bit
/// channel (`0..=255`) and any smaller range without a fixed step count.
///
/// Note that `step` is expected to lie within `[0, max(start, end)]`;
/// values outside that range extrapolate linearly and are not clamped.
#[inline]
pub fn interpolate(step: f64, start: f64, end: f64) -> f64 {
    let upper = start.max(end);

    if end > start {
        (end - start) / upper * step
    } else if start > end {
        (start - end) / upper * (upper - step)
    } else {
        // degenerate transition, avoids a 0/0 division
        start
    }
}

/// Constrains `value` to `[lower, upper]` (inclusive).
#[inline]
pub fn constrain(value: f64, lower: f64, upper: f64) -> f64 {
    value.clamp(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_near(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ascending_range() {
        assert_eq!(interpolate(0., 0., 9.), 0.);
        assert_eq!(interpolate(5., 0., 9.), 5.);
        assert_eq!(interpolate(9., 0., 9.), 9.);
    }

    #[test]
    fn descending_range() {
        assert_eq!(interpolate(0., 9., 0.), 9.);
        assert_eq!(interpolate(5., 9., 0.), 4.);
        assert_eq!(interpolate(9., 9., 0.), 0.);
    }

    #[test]
    fn degenerate_range_is_constant() {
        assert_eq!(interpolate(0., 0., 0.), 0.);
        assert_eq!(interpolate(5., 0., 0.), 0.);
        assert_eq!(interpolate(9., 0., 0.), 0.);

        assert_eq!(interpolate(0., 128., 128.), 128.);
        assert_eq!(interpolate(255., 128., 128.), 128.);
    }

    #[test]
    fn full_channel_range() {
        assert_eq!(interpolate(0., 0., 255.), 0.);
        assert_eq!(interpolate(128., 0., 255.), 128.);
        assert_eq!(interpolate(255., 0., 255.), 255.);

        assert_eq!(interpolate(0., 255., 0.), 255.);
        assert_eq!(interpolate(128., 255., 0.), 127.);
        assert_eq!(interpolate(255., 255., 0.), 0.);
    }

    #[test]
    fn boundary_steps_hit_the_bounds() {
        for &(start, end) in &[(0., 255.), (255., 0.), (0., 9.), (9., 0.), (0., 42.)] {
            let upper = f64::max(start, end);
            assert_near(interpolate(0., start, end), start);
            assert_near(interpolate(upper, start, end), end);
        }
    }

    #[test]
    fn midpoint_is_affine() {
        assert_near(interpolate(127.5, 0., 255.), 127.5);
        assert_near(interpolate(127.5, 255., 0.), 127.5);
        assert_near(interpolate(4.5, 0., 9.), 4.5);
    }

    #[test]
    fn scales_to_any_resolution() {
        // same shape at resolution 9 and resolution 255
        for i in 0..=9 {
            let small = interpolate(i as f64, 0., 9.);
            let large = interpolate(i as f64 * 255. / 9., 0., 255.);
            assert_near(small / 9., large / 255.);
        }
    }

    #[test]
    fn stays_within_bounds() {
        for &(start, end) in &[(0., 255.), (255., 0.), (0., 9.), (9., 0.), (64., 64.)] {
            let upper = f64::max(start, end);
            let (lo, hi) = (f64::min(start, end), f64::max(start, end));

            let mut i = 0.;
            while i <= upper {
                let value = interpolate(i, start, end);
                assert!(value >= lo && value <= hi, "{value} outside [{lo}, {hi}]");
                i += 1.;
            }
        }
    }

    #[test]
    fn constrain_pins_to_range() {
        assert_eq!(constrain(-1., 0., 255.), 0.);
        assert_eq!(constrain(128., 0., 255.), 128.);
        assert_eq!(constrain(300., 0., 255.), 255.);
    }
}

//! Saturating position update
//!
//! Both the sensor path and the drag path go through [`clamp_move`], so the
//! ball can never be written outside its [`Region`].

use glam::Vec2;

use super::region::Region;

/// Pin `value` into `[min, max]`.
///
/// The upper bound is checked first, so a degenerate range (`min > max`)
/// collapses to `max`. Unlike `f32::clamp` this never panics.
#[inline]
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value >= max {
        max
    } else if value <= min {
        min
    } else {
        value
    }
}

/// Apply `delta` to `current` and saturate each axis against `region`
pub fn clamp_move(current: Vec2, delta: Vec2, region: &Region) -> Vec2 {
    let next = current + delta;
    Vec2::new(
        clamp_axis(next.x, region.left, region.right),
        clamp_axis(next.y, region.top, region.bottom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn region() -> Region {
        Region {
            left: -100.0,
            right: 100.0,
            top: -150.0,
            bottom: 150.0,
        }
    }

    #[test]
    fn test_clamp_right_edge() {
        let next = clamp_move(Vec2::new(90.0, 0.0), Vec2::new(20.0, 0.0), &region());
        assert_eq!(next, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_clamp_corner() {
        let next = clamp_move(Vec2::new(-95.0, 140.0), Vec2::new(-10.0, 20.0), &region());
        assert_eq!(next, Vec2::new(-100.0, 150.0));
    }

    #[test]
    fn test_saturates_at_bound() {
        let next = clamp_move(Vec2::new(100.0, 0.0), Vec2::new(1.0, 0.0), &region());
        assert_eq!(next.x, 100.0);
    }

    #[test]
    fn test_degenerate_region_checks_upper_bound_first() {
        let degenerate = Region {
            left: 10.0,
            right: -10.0,
            top: 5.0,
            bottom: -5.0,
        };
        // Anything at or above the upper bound pins to it, even inside (upper, lower)
        assert_eq!(clamp_move(Vec2::ZERO, Vec2::ZERO, &degenerate), Vec2::new(-10.0, -5.0));
        // Below the upper bound falls through to the lower-bound check
        let next = clamp_move(Vec2::ZERO, Vec2::new(-50.0, 50.0), &degenerate);
        assert_eq!(next, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_clamp_axis_inside() {
        assert_eq!(clamp_axis(3.5, -4.0, 4.0), 3.5);
        assert_eq!(clamp_axis(-4.0, -4.0, 4.0), -4.0);
        assert_eq!(clamp_axis(9.0, -4.0, 4.0), 4.0);
    }

    proptest! {
        #[test]
        fn prop_result_stays_in_region(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            dx in -1000.0f32..1000.0,
            dy in -1000.0f32..1000.0,
        ) {
            let r = region();
            let next = clamp_move(Vec2::new(x, y), Vec2::new(dx, dy), &r);
            prop_assert!(r.contains(next));
        }

        #[test]
        fn prop_zero_delta_is_identity_inside(
            x in -100.0f32..=100.0,
            y in -150.0f32..=150.0,
        ) {
            let pos = Vec2::new(x, y);
            prop_assert_eq!(clamp_move(pos, Vec2::ZERO, &region()), pos);
        }

        #[test]
        fn prop_positive_delta_saturates_at_right(dx in 0.0f32..500.0, y in -150.0f32..=150.0) {
            let next = clamp_move(Vec2::new(100.0, y), Vec2::new(dx, 0.0), &region());
            prop_assert_eq!(next.x, 100.0);
        }
    }
}

//! Boundary clamp: maps a drag delta to a constrained position
//!
//! Each axis has a normal range `[container - content, 0]` flanked by two
//! elastic zones of width `tolerance`. Inside an elastic zone only `damping`
//! of the delta is applied; past it the position hard-stops.

use crate::geometry::{Delta, Extents, Position};

/// Apply `delta` to `current` under the boundary policy on both axes.
///
/// Preconditions: `tolerance >= 0`, `0 <= damping <= 1`, finite extents.
/// Non-finite input yields an unspecified (but non-panicking) result.
pub fn clamp(
    current: Position,
    delta: Delta,
    extents: &Extents,
    tolerance: f64,
    damping: f64,
) -> Position {
    Position::new(
        clamp_axis(current.x, delta.dx, extents.min_x(), tolerance, damping),
        clamp_axis(current.y, delta.dy, extents.min_y(), tolerance, damping),
    )
}

/// One-axis clamp. `scroll_min` is `container - content` for that axis.
#[inline]
pub fn clamp_axis(current: f64, delta: f64, scroll_min: f64, tolerance: f64, damping: f64) -> f64 {
    let target = current + delta;
    let min_bound = scroll_min - tolerance;

    if target < min_bound {
        min_bound
    } else if target < min_bound + tolerance {
        // Far elastic zone; an exact hit on min_bound lands here
        current + delta * damping
    } else if target <= 0.0 {
        target
    } else if target < tolerance {
        current + delta * damping
    } else {
        tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_extents() -> Extents {
        Extents::new(300.0, 400.0, 500.0, 1000.0)
    }

    fn clamp_x(current: f64, dx: f64) -> f64 {
        clamp(
            Position::new(current, 0.0),
            Delta::new(dx, 0.0),
            &panel_extents(),
            50.0,
            0.5,
        )
        .x
    }

    #[test]
    fn test_exact_min_bound_is_damped() {
        // min_bound = 300 - 500 - 50 = -250, target lands exactly on it
        assert_eq!(clamp_x(0.0, -250.0), -125.0);
    }

    #[test]
    fn test_past_tolerance_hard_stops() {
        assert_eq!(clamp_x(-100.0, 150.0), 50.0);
        assert_eq!(clamp_x(0.0, 1000.0), 50.0);
    }

    #[test]
    fn test_past_min_bound_hard_stops() {
        assert_eq!(clamp_x(-200.0, -500.0), -250.0);
    }

    #[test]
    fn test_normal_range_passthrough() {
        assert_eq!(clamp_x(-100.0, -50.0), -150.0);
        assert_eq!(clamp_x(-100.0, 100.0), 0.0);
        assert_eq!(clamp_x(-20.0, -180.0), -200.0);
    }

    #[test]
    fn test_far_elastic_zone_damped() {
        // target -220 is inside [-250, -200)
        assert_eq!(clamp_x(-200.0, -20.0), -210.0);
    }

    #[test]
    fn test_near_elastic_zone_damped() {
        // target 30 is inside (0, 50)
        assert_eq!(clamp_x(0.0, 30.0), 15.0);
        assert_eq!(clamp_x(20.0, 10.0), 25.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let out = clamp(
            Position::new(0.0, -600.0),
            Delta::new(30.0, -30.0),
            &panel_extents(),
            50.0,
            0.5,
        );
        assert_eq!(out, Position::new(15.0, -615.0));
    }

    #[test]
    fn test_full_damping_applies_whole_delta() {
        assert_eq!(clamp_axis(0.0, 30.0, -200.0, 50.0, 1.0), 30.0);
        assert_eq!(clamp_axis(-200.0, -30.0, -200.0, 50.0, 1.0), -230.0);
    }

    #[test]
    fn test_zero_tolerance_is_hard_clamp() {
        assert_eq!(clamp_axis(0.0, 10.0, -200.0, 0.0, 0.5), 0.0);
        assert_eq!(clamp_axis(-190.0, -30.0, -200.0, 0.0, 0.5), -200.0);
        assert_eq!(clamp_axis(-100.0, 30.0, -200.0, 0.0, 0.5), -70.0);
    }

    #[test]
    fn test_output_stays_within_hard_stops() {
        let extents = panel_extents();
        for tolerance in [0.0, 10.0, 50.0, 120.0] {
            let min_bound = extents.min_x() - tolerance;
            for damping in [0.0, 0.25, 0.5, 1.0] {
                let mut current = 0.0;
                for step in -40..=40 {
                    let delta = step as f64 * 17.5;
                    current = clamp_axis(current, delta, extents.min_x(), tolerance, damping);
                    assert!(
                        (min_bound..=tolerance).contains(&current),
                        "tolerance={} damping={} delta={} -> {}",
                        tolerance,
                        damping,
                        delta,
                        current
                    );
                }
            }
        }
    }

    #[test]
    fn test_small_content_jumps_to_min_bound() {
        // min_bound = 300 - 100 - 50 = 150, above every target near the origin
        let extents = Extents::new(300.0, 400.0, 100.0, 400.0);
        let out = clamp(Position::ORIGIN, Delta::new(-10.0, 0.0), &extents, 50.0, 0.5);
        assert_eq!(out, Position::new(150.0, -5.0));

        let out = clamp(Position::ORIGIN, Delta::new(170.0, 0.0), &extents, 50.0, 0.5);
        assert_eq!(out.x, 85.0);
    }

    #[test]
    fn test_non_finite_extents_do_not_panic() {
        let extents = Extents::new(f64::NAN, 400.0, 500.0, f64::INFINITY);
        let out = clamp(Position::ORIGIN, Delta::new(-10.0, -10.0), &extents, 50.0, 0.5);
        // Comparisons against a NaN bound fail, so the raw target passes through
        assert_eq!(out.x, -10.0);
        // Unbounded content never reaches the far stop
        assert_eq!(out.y, -10.0);
    }
}

//! Rest-position resolver: nearest position with no elastic intrusion

use crate::geometry::{Extents, Position};

/// Nearest in-bounds position to `current`; ignores tolerance.
///
/// Per axis the range is `[container - content, 0]`. Idempotent while the
/// content is at least as large as its container; otherwise the lower bound
/// is positive and is checked first.
pub fn resolve(current: Position, extents: &Extents) -> Position {
    Position::new(
        resolve_axis(current.x, extents.min_x()),
        resolve_axis(current.y, extents.min_y()),
    )
}

/// Whether `current` already sits inside the scroll range on both axes
pub fn is_at_rest(current: Position, extents: &Extents) -> bool {
    resolve(current, extents) == current
}

#[inline]
fn resolve_axis(current: f64, scroll_min: f64) -> f64 {
    if current < scroll_min {
        scroll_min
    } else if current > 0.0 {
        0.0
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents() -> Extents {
        Extents::new(300.0, 400.0, 500.0, 1000.0)
    }

    #[test]
    fn test_in_bounds_is_unchanged() {
        let pos = Position::new(-120.0, -333.5);
        assert_eq!(resolve(pos, &extents()), pos);
        assert!(is_at_rest(pos, &extents()));
    }

    #[test]
    fn test_below_min_snaps_to_min() {
        let pos = Position::new(-400.0, -640.0);
        assert_eq!(resolve(pos, &extents()), Position::new(-200.0, -600.0));
        assert!(!is_at_rest(pos, &extents()));
    }

    #[test]
    fn test_above_zero_snaps_to_zero() {
        let pos = Position::new(35.0, 0.5);
        assert_eq!(resolve(pos, &extents()), Position::ORIGIN);
    }

    #[test]
    fn test_idempotent() {
        for pos in [
            Position::new(-400.0, 20.0),
            Position::new(10.0, -700.0),
            Position::new(-50.0, -50.0),
        ] {
            let once = resolve(pos, &extents());
            assert_eq!(resolve(once, &extents()), once);
        }
    }

    #[test]
    fn test_small_content_uses_positive_min() {
        // min = 300 - 100 = 200 on x, exactly fitting on y
        let extents = Extents::new(300.0, 400.0, 100.0, 400.0);
        assert_eq!(
            resolve(Position::new(-30.0, 25.0), &extents),
            Position::new(200.0, 0.0)
        );
        // Not below min, above max: the upper bound wins
        assert_eq!(resolve(Position::new(250.0, 0.0), &extents).x, 0.0);
    }

    #[test]
    fn test_exact_bounds_are_at_rest() {
        assert!(is_at_rest(Position::new(-200.0, 0.0), &extents()));
        assert!(is_at_rest(Position::new(0.0, -600.0), &extents()));
    }
}

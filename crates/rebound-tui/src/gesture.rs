//! Mouse drag → gesture events
//!
//! Terminals report pointer positions in cells; deltas are converted to
//! pixels with the configured cell size so the panel physics keep working in
//! pixel units.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use rebound_core::{Delta, Velocity};

/// Gesture events consumed by the panel controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Pointer pressed; cancels any running animation
    Start,
    /// Incremental movement since the last event, in pixels
    Move(Delta),
    /// Pointer released
    End,
    /// Fast release, velocity in px/ms
    Swipe(Velocity),
}

/// Velocity tracker for drag samples
///
/// Smooths instantaneous velocity with an exponential moving average so a
/// single jittery sample does not decide whether a release is a swipe.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    min_velocity: f64,
    velocity: Velocity,
    last_sample: Option<Instant>,
}

impl SwipeDetector {
    /// Smoothing factor of the moving average
    const ALPHA: f64 = 0.3;
    /// Samples further apart than this do not carry velocity
    const MAX_SAMPLE_GAP: Duration = Duration::from_millis(500);
    /// A pause this long before release cancels the swipe
    const RELEASE_WINDOW: Duration = Duration::from_millis(100);

    pub fn new(min_velocity: f64) -> Self {
        Self {
            min_velocity,
            velocity: Velocity::default(),
            last_sample: None,
        }
    }

    /// Start tracking a new drag
    pub fn reset(&mut self, now: Instant) {
        self.velocity = Velocity::default();
        self.last_sample = Some(now);
    }

    /// Record a drag delta observed at `now`
    pub fn record(&mut self, delta: Delta, now: Instant) {
        if let Some(last) = self.last_sample {
            let dt = now.saturating_duration_since(last);
            if !dt.is_zero() && dt < Self::MAX_SAMPLE_GAP {
                let dt_ms = dt.as_secs_f64() * 1000.0;
                let instant = Velocity::new(delta.dx / dt_ms, delta.dy / dt_ms);
                self.velocity = Velocity::new(
                    self.velocity.vx * (1.0 - Self::ALPHA) + instant.vx * Self::ALPHA,
                    self.velocity.vy * (1.0 - Self::ALPHA) + instant.vy * Self::ALPHA,
                );
            }
        }
        self.last_sample = Some(now);
    }

    /// Current smoothed velocity
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Finish the drag; returns the swipe velocity if the release was fast enough
    pub fn release(&mut self, now: Instant) -> Option<Velocity> {
        let last = self.last_sample.take()?;
        let velocity = std::mem::take(&mut self.velocity);

        if now.saturating_duration_since(last) > Self::RELEASE_WINDOW {
            return None;
        }
        (velocity.speed() >= self.min_velocity && velocity.speed() > 0.0).then_some(velocity)
    }
}

/// Turns crossterm mouse events into [`Gesture`]s
#[derive(Debug, Clone)]
pub struct GestureTracker {
    cell_width_px: f64,
    cell_height_px: f64,
    last_cell: Option<(u16, u16)>,
    swipe: SwipeDetector,
}

impl GestureTracker {
    pub fn new(cell_width_px: f64, cell_height_px: f64, min_swipe_velocity: f64) -> Self {
        Self {
            cell_width_px,
            cell_height_px,
            last_cell: None,
            swipe: SwipeDetector::new(min_swipe_velocity),
        }
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.last_cell.is_some()
    }

    /// Map one mouse event to zero or more gestures
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) -> Vec<Gesture> {
        let cell = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.last_cell = Some(cell);
                self.swipe.reset(now);
                vec![Gesture::Start]
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.last_cell.replace(cell) {
                Some(last) => {
                    let delta = self.cell_delta(last, cell);
                    if delta.is_zero() {
                        return Vec::new();
                    }
                    self.swipe.record(delta, now);
                    vec![Gesture::Move(delta)]
                }
                // Press happened outside the window; treat the first drag as the press
                None => {
                    self.swipe.reset(now);
                    vec![Gesture::Start]
                }
            },
            MouseEventKind::Up(MouseButton::Left) => {
                if self.last_cell.take().is_none() {
                    return Vec::new();
                }
                let mut gestures = vec![Gesture::End];
                if let Some(velocity) = self.swipe.release(now) {
                    tracing::debug!(vx = velocity.vx, vy = velocity.vy, "Swipe detected");
                    gestures.push(Gesture::Swipe(velocity));
                }
                gestures
            }
            _ => Vec::new(),
        }
    }

    fn cell_delta(&self, from: (u16, u16), to: (u16, u16)) -> Delta {
        Delta::new(
            (to.0 as f64 - from.0 as f64) * self.cell_width_px,
            (to.1 as f64 - from.1 as f64) * self.cell_height_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_drag_sequence() {
        let mut tracker = GestureTracker::new(8.0, 16.0, 1.0);
        let t0 = Instant::now();

        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), t0),
            vec![Gesture::Start]
        );
        assert!(tracker.is_dragging());
        assert_eq!(
            tracker.handle_mouse(
                mouse(MouseEventKind::Drag(MouseButton::Left), 7, 6),
                t0 + Duration::from_millis(400)
            ),
            vec![Gesture::Move(Delta::new(-24.0, 16.0))]
        );
        assert_eq!(
            tracker.handle_mouse(
                mouse(MouseEventKind::Up(MouseButton::Left), 7, 6),
                t0 + Duration::from_millis(800)
            ),
            vec![Gesture::End]
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_fast_release_is_swipe() {
        let mut tracker = GestureTracker::new(8.0, 16.0, 1.0);
        let t0 = Instant::now();
        let ms = |n| t0 + Duration::from_millis(n);

        tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 5), ms(0));
        // 5 cells (40px) every 10ms = 4 px/ms
        for (i, column) in [45, 40, 35, 30, 25, 20].into_iter().enumerate() {
            tracker.handle_mouse(
                mouse(MouseEventKind::Drag(MouseButton::Left), column, 5),
                ms(10 * (i as u64 + 1)),
            );
        }
        let gestures =
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 5), ms(70));

        assert_eq!(gestures.len(), 2);
        assert_eq!(gestures[0], Gesture::End);
        match gestures[1] {
            Gesture::Swipe(v) => {
                assert!(v.vx < -1.0, "vx = {}", v.vx);
                assert_eq!(v.vy, 0.0);
            }
            other => panic!("expected swipe, got {:?}", other),
        }
    }

    #[test]
    fn test_pause_before_release_is_not_swipe() {
        let mut detector = SwipeDetector::new(1.0);
        let t0 = Instant::now();
        detector.reset(t0);
        detector.record(Delta::new(-40.0, 0.0), t0 + Duration::from_millis(10));
        assert!(detector.velocity().vx < 0.0);
        assert_eq!(detector.release(t0 + Duration::from_millis(300)), None);
    }

    #[test]
    fn test_slow_drag_is_not_swipe() {
        let mut detector = SwipeDetector::new(1.0);
        let t0 = Instant::now();
        detector.reset(t0);
        detector.record(Delta::new(-8.0, 0.0), t0 + Duration::from_millis(50));
        assert_eq!(detector.release(t0 + Duration::from_millis(60)), None);
    }

    #[test]
    fn test_stray_release_is_ignored() {
        let mut tracker = GestureTracker::new(8.0, 16.0, 1.0);
        let gestures = tracker.handle_mouse(
            mouse(MouseEventKind::Up(MouseButton::Left), 1, 1),
            Instant::now(),
        );
        assert!(gestures.is_empty());
    }
}

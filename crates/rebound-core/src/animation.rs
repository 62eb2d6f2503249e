//! Animation driver: eases the panel from a start position by a target delta
//!
//! A session is a two-state machine advanced by [`AnimationSession::tick`].
//! While running, each tick writes one eased frame through the boundary clamp
//! (damping forced to 1) and requests the next frame from the host scheduler.
//! Once the duration has elapsed the full delta is applied and the session
//! stops rescheduling.

use std::time::{Duration, Instant};

use crate::clamp::clamp;
use crate::config::EasingType;
use crate::easing::ease;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::geometry::{Delta, Extents, Position};
use crate::timing::{as_millis_f64, elapsed, is_complete};

/// Damping used for programmatic motion: the full eased delta is applied
const NO_RESISTANCE: f64 = 1.0;

/// What started the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Snap back to the rest position after release
    Return,
    /// Coast after a swipe
    Momentum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Complete,
}

/// One reported animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Clamped position to display
    pub position: Position,
    /// Session state after this frame
    pub state: SessionState,
}

impl Frame {
    #[inline]
    pub fn is_last(&self) -> bool {
        self.state == SessionState::Complete
    }
}

/// Transient state of one release/swipe animation
#[derive(Debug, Clone)]
pub struct AnimationSession {
    kind: SessionKind,
    start: Position,
    delta: Delta,
    started_at: Instant,
    duration: Duration,
    easing: EasingType,
    /// Last frame handle surfaced to the owner for cancellation
    pending: Option<FrameHandle>,
    state: SessionState,
    last_position: Position,
}

impl AnimationSession {
    pub fn new(
        kind: SessionKind,
        start: Position,
        delta: Delta,
        started_at: Instant,
        duration: Duration,
        easing: EasingType,
    ) -> Self {
        Self {
            kind,
            start,
            delta,
            started_at,
            duration,
            easing,
            pending: None,
            state: SessionState::Running,
            last_position: start,
        }
    }

    /// Advance the session to `now` and report the resulting frame
    ///
    /// Extents are re-read on every tick since content may resize mid-flight.
    /// Ticking a complete session returns its final frame again without side effects.
    pub fn tick<S>(
        &mut self,
        now: Instant,
        extents: &Extents,
        tolerance: f64,
        scheduler: &mut S,
    ) -> Frame
    where
        S: FrameScheduler + ?Sized,
    {
        if self.state == SessionState::Complete {
            return self.frame();
        }

        // At most one outstanding request per session
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }

        if is_complete(self.started_at, now, self.duration) {
            self.last_position = clamp(self.start, self.delta, extents, tolerance, NO_RESISTANCE);
            self.state = SessionState::Complete;
            tracing::debug!(
                kind = ?self.kind,
                position = %self.last_position,
                "Animation complete"
            );
        } else {
            let t = as_millis_f64(elapsed(self.started_at, now));
            let d = as_millis_f64(self.duration);
            let eased = Position::new(
                ease(self.easing, t, self.start.x, self.delta.dx, d),
                ease(self.easing, t, self.start.y, self.delta.dy, d),
            );
            self.last_position = clamp(
                self.start,
                self.start.delta_to(eased),
                extents,
                tolerance,
                NO_RESISTANCE,
            );
            let handle = scheduler.request_frame();
            self.pending = Some(handle);
            tracing::trace!(
                kind = ?self.kind,
                elapsed_ms = t,
                position = %self.last_position,
                next_frame = %handle,
                "Animation frame"
            );
        }

        self.frame()
    }

    /// Cancel the pending frame request, if any, and return its handle
    pub fn cancel<S>(&mut self, scheduler: &mut S) -> Option<FrameHandle>
    where
        S: FrameScheduler + ?Sized,
    {
        let handle = self.pending.take();
        if let Some(handle) = handle {
            scheduler.cancel_frame(handle);
            tracing::debug!(kind = ?self.kind, frame = %handle, "Animation cancelled");
        }
        handle
    }

    fn frame(&self) -> Frame {
        Frame {
            position: self.last_position,
            state: self.state,
        }
    }

    #[inline]
    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Handle of the frame this session is waiting for
    #[inline]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Unclamped destination of the session
    pub fn target(&self) -> Position {
        self.start.offset(self.delta)
    }

    /// Position reported by the most recent tick (the start before any tick)
    pub fn last_position(&self) -> Position {
        self.last_position
    }
}

//! Panel controller: owns the live position and the active animation session
//!
//! Gesture callbacks and frame callbacks are serialized by the host, so the
//! controller is plain `&mut self` state with no interior mutability.

use std::time::{Duration, Instant};

use crate::animation::{AnimationSession, Frame, SessionKind};
use crate::clamp::clamp;
use crate::config::PanelConfig;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::geometry::{Delta, Extents, Position, Velocity};
use crate::rest::{is_at_rest, resolve};

/// Mutable state of one panel
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Last authoritative content translation
    pub position: Position,
    /// At most one animation in flight
    pub session: Option<AnimationSession>,
}

/// Elastic drag panel controller
///
/// Feed it gesture events and the frames requested from the host scheduler:
/// `drag_start` → `drag_move`* → `drag_end` (optionally followed by `swipe`),
/// then `on_frame` for every frame handle that fires.
#[derive(Debug, Clone)]
pub struct ElasticPanel {
    config: PanelConfig,
    state: PanelState,
    dragging: bool,
}

impl Default for ElasticPanel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl ElasticPanel {
    /// Create a panel at the origin with configuration
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            state: PanelState::default(),
            dragging: false,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Update configuration; an in-flight session keeps its own parameters
    pub fn set_config(&mut self, config: PanelConfig) {
        self.config = config;
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.state.position
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Check if an animation session is in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.session.is_some()
    }

    pub fn session(&self) -> Option<&AnimationSession> {
        self.state.session.as_ref()
    }

    /// Frame handle the active session is waiting for
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.state
            .session
            .as_ref()
            .and_then(AnimationSession::pending_frame)
    }

    /// Gesture began: stop any animation where it is
    ///
    /// The position keeps the value last reported by the animation so the
    /// following drag-move continues from what is on screen.
    pub fn drag_start<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        self.stop_session(scheduler);
        self.dragging = true;
        tracing::trace!(position = %self.state.position, "Drag start");
    }

    /// Apply an incremental drag delta with elastic resistance
    ///
    /// A move arriving while an animation runs (no `drag_start` first) stops
    /// the animation the same way `drag_start` would.
    pub fn drag_move<S>(&mut self, delta: Delta, extents: &Extents, scheduler: &mut S) -> Position
    where
        S: FrameScheduler + ?Sized,
    {
        if self.state.session.is_some() {
            tracing::warn!(
                frame = ?self.pending_frame(),
                "Drag move while animating, cancelling animation"
            );
            self.stop_session(scheduler);
        }

        let position = clamp(
            self.state.position,
            delta,
            extents,
            self.config.tolerance,
            self.config.damping,
        );
        tracing::trace!(dx = delta.dx, dy = delta.dy, position = %position, "Drag move");
        self.state.position = position;
        position
    }

    /// Gesture released: animate back to the rest position if needed
    ///
    /// Returns the first animation frame (already applied), or `None` when
    /// the panel is at rest.
    pub fn drag_end<S>(
        &mut self,
        extents: &Extents,
        now: Instant,
        scheduler: &mut S,
    ) -> Option<Frame>
    where
        S: FrameScheduler + ?Sized,
    {
        self.dragging = false;
        self.start_return(extents, now, scheduler)
    }

    /// Swipe with velocity in px/ms. Ignored unless momentum is enabled.
    pub fn swipe<S>(
        &mut self,
        velocity: Velocity,
        extents: &Extents,
        now: Instant,
        scheduler: &mut S,
    ) -> Option<Frame>
    where
        S: FrameScheduler + ?Sized,
    {
        let momentum = &self.config.momentum;
        if !momentum.enabled {
            tracing::trace!(vx = velocity.vx, vy = velocity.vy, "Swipe ignored, momentum disabled");
            return None;
        }

        let delta = Delta::new(velocity.vx, velocity.vy).scale(momentum.velocity_scale);
        let duration = momentum.duration();
        self.start_session(SessionKind::Momentum, delta, duration, extents, now, scheduler)
    }

    /// A scheduled frame fired
    ///
    /// Frames other than the one the active session is waiting for (cancelled
    /// or superseded requests) are ignored and yield `None`.
    ///
    /// A momentum session that completes inside an elastic zone reports its
    /// own final frame and hands over to a return session, which is already
    /// animating when this returns.
    pub fn on_frame<S>(
        &mut self,
        handle: FrameHandle,
        now: Instant,
        extents: &Extents,
        scheduler: &mut S,
    ) -> Option<Frame>
    where
        S: FrameScheduler + ?Sized,
    {
        let tolerance = self.config.tolerance;
        let session = self.state.session.as_mut()?;
        if session.pending_frame() != Some(handle) {
            tracing::trace!(frame = %handle, "Ignoring stale frame");
            return None;
        }

        let frame = session.tick(now, extents, tolerance, scheduler);
        let kind = session.kind();
        self.state.position = frame.position;

        if frame.is_last() {
            self.state.session = None;
            if kind == SessionKind::Momentum && !is_at_rest(frame.position, extents) {
                // Coasted into an elastic zone: settle back in bounds. The
                // return's first frame repeats this position.
                self.start_return(extents, now, scheduler);
            }
        }

        Some(frame)
    }

    /// Jump to a position without animation
    pub fn set_position<S>(&mut self, position: Position, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        self.stop_session(scheduler);
        self.state.position = position;
    }

    /// Back to the origin, no animation, not dragging
    pub fn reset<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        self.set_position(Position::ORIGIN, scheduler);
        self.dragging = false;
    }

    fn start_return<S>(
        &mut self,
        extents: &Extents,
        now: Instant,
        scheduler: &mut S,
    ) -> Option<Frame>
    where
        S: FrameScheduler + ?Sized,
    {
        let current = self.state.position;
        let target = resolve(current, extents);
        if target == current {
            self.stop_session(scheduler);
            return None;
        }

        let duration = self.config.return_duration();
        self.start_session(
            SessionKind::Return,
            current.delta_to(target),
            duration,
            extents,
            now,
            scheduler,
        )
    }

    fn start_session<S>(
        &mut self,
        kind: SessionKind,
        delta: Delta,
        duration: Duration,
        extents: &Extents,
        now: Instant,
        scheduler: &mut S,
    ) -> Option<Frame>
    where
        S: FrameScheduler + ?Sized,
    {
        self.stop_session(scheduler);

        let mut session = AnimationSession::new(
            kind,
            self.state.position,
            delta,
            now,
            duration,
            self.config.easing,
        );
        tracing::debug!(
            kind = ?kind,
            from = %self.state.position,
            to = %session.target(),
            duration_ms = duration.as_millis() as u64,
            "Animation start"
        );

        // First frame runs synchronously, later ones on the scheduler
        let frame = session.tick(now, extents, self.config.tolerance, scheduler);
        self.state.position = frame.position;
        if !frame.is_last() {
            self.state.session = Some(session);
        }
        Some(frame)
    }

    fn stop_session<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        if let Some(mut session) = self.state.session.take() {
            session.cancel(scheduler);
            self.state.position = session.last_position();
        }
    }
}

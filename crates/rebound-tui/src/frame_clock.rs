//! Display refresh for the terminal: fires requested frames at a fixed FPS

use std::time::{Duration, Instant};

use rebound_core::{FrameHandle, FrameQueue, FrameScheduler};

/// Frame scheduler driven by the main loop
///
/// Requests accumulate in a [`FrameQueue`]; [`FrameClock::due`] releases them
/// once per frame interval.
#[derive(Debug)]
pub struct FrameClock {
    queue: FrameQueue,
    interval: Duration,
    last_fire: Option<Instant>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            queue: FrameQueue::new(),
            interval,
            last_fire: None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check if frames are waiting to fire
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.queue.has_pending()
    }

    /// Time left until pending frames become due (zero if due now)
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if !self.queue.has_pending() {
            return None;
        }
        let wait = match self.last_fire {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        };
        Some(wait)
    }

    /// Release the frames due at `now`
    pub fn due(&mut self, now: Instant) -> Vec<FrameHandle> {
        match self.time_until_due(now) {
            Some(wait) if wait.is_zero() => {
                self.last_fire = Some(now);
                self.queue.take_due()
            }
            _ => Vec::new(),
        }
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.queue.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.cancel_frame(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_fires_immediately() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        let handle = clock.request_frame();
        assert_eq!(clock.due(Instant::now()), vec![handle]);
        assert!(!clock.has_pending());
    }

    #[test]
    fn test_frames_wait_for_interval() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        let t0 = Instant::now();
        clock.request_frame();
        clock.due(t0);

        let next = clock.request_frame();
        assert!(clock.due(t0 + Duration::from_millis(5)).is_empty());
        assert_eq!(
            clock.time_until_due(t0 + Duration::from_millis(5)),
            Some(Duration::from_millis(11))
        );
        assert_eq!(clock.due(t0 + Duration::from_millis(16)), vec![next]);
    }

    #[test]
    fn test_cancelled_frame_never_fires() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        let handle = clock.request_frame();
        clock.cancel_frame(handle);
        assert!(clock.due(Instant::now()).is_empty());
        assert_eq!(clock.time_until_due(Instant::now()), None);
    }
}

//! Frame scheduling abstraction
//!
//! The host owns the display refresh. Animations ask it for "one more frame"
//! and get back a handle that can cancel the request before it fires.

use std::fmt;
use std::num::NonZeroU64;

/// Opaque id of a requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(NonZeroU64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-frame scheduling primitive provided by the host
pub trait FrameScheduler {
    /// Request a callback on the next display refresh
    fn request_frame(&mut self) -> FrameHandle;

    /// Drop a pending request; unknown or already-fired handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// In-memory scheduler: requests queue up until the host drains them
#[derive(Debug, Default)]
pub struct FrameQueue {
    issued: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any frame is waiting to fire
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Remove and return every pending handle, oldest first
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(NonZeroU64::MIN.saturating_add(self.issued));
        self.issued += 1;
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|pending| *pending != handle);
    }
}

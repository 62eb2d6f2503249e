//! Elastic drag-panel physics
//!
//! # Architecture
//!
//! ## Atomic layer
//! - `geometry` - Position, Delta, Extents and the translation sink
//! - `clamp` - Boundary clamp with damped elastic zones
//! - `rest` - Nearest in-bounds rest position
//! - `easing` - Ease-out curves and the `(t, b, c, d)` tween
//! - `timing` - Elapsed-time checks against an explicit clock
//! - `frame` - Frame scheduling trait and an in-memory queue
//!
//! ## Molecular layer
//! - `animation` - Running/Complete animation session
//! - `panel` - Controller wiring gestures, sessions and frames together
//!
//! # Usage
//!
//! ```ignore
//! use rebound_core::{Delta, ElasticPanel, Extents, FrameQueue};
//!
//! let extents = Extents::new(300.0, 400.0, 500.0, 1000.0);
//! let mut frames = FrameQueue::new();
//! let mut panel = ElasticPanel::with_defaults();
//!
//! panel.drag_start(&mut frames);
//! panel.drag_move(Delta::new(40.0, 0.0), &extents, &mut frames);
//! panel.drag_end(&extents, Instant::now(), &mut frames);
//!
//! // On every display refresh
//! for handle in frames.take_due() {
//!     panel.on_frame(handle, Instant::now(), &extents, &mut frames);
//! }
//! ```

pub mod config;
pub mod error;

pub mod clamp;
pub mod easing;
pub mod frame;
pub mod geometry;
pub mod rest;
pub mod timing;

pub mod animation;
pub mod panel;

pub use animation::{AnimationSession, Frame, SessionKind, SessionState};
pub use config::{AppConfig, EasingType, MomentumConfig, PanelConfig, UiConfig};
pub use error::{Error, Result};
pub use frame::{FrameHandle, FrameQueue, FrameScheduler};
pub use geometry::{Delta, Extents, Position, Size, TranslationSink, Velocity};
pub use panel::{ElasticPanel, PanelState};

//! Geometry primitives shared by the clamp, the resolver and the animation driver.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Content translation relative to the container origin, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Delta that moves `self` onto `target`
    pub fn delta_to(&self, target: Position) -> Delta {
        Delta::new(target.x - self.x, target.y - self.y)
    }

    /// Position after applying `delta` without any constraint
    pub fn offset(&self, delta: Delta) -> Position {
        Position::new(self.x + delta.dx, self.y + delta.dy)
    }

    /// CSS-style transform string for adapters that drive a styled element
    pub fn translate3d(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Incremental movement since the last processed event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    pub fn scale(&self, factor: f64) -> Delta {
        Delta::new(self.dx * factor, self.dy * factor)
    }
}

/// Parses `DX,DY`, e.g. `-250,0`
impl FromStr for Delta {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dx, dy) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidDelta(format!("expected DX,DY, got '{}'", s)))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| Error::InvalidDelta(format!("'{}': {}", s, e)))
        };
        Ok(Delta::new(parse(dx)?, parse(dy)?))
    }
}

/// Directional swipe velocity in pixels per millisecond
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

/// Width/height pair, parsed from `WxH`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| Error::InvalidExtents(format!("expected WxH, got '{}'", s)))?;
        let parse = |v: &str| {
            let value = v
                .trim()
                .parse::<f64>()
                .map_err(|e| Error::InvalidExtents(format!("'{}': {}", s, e)))?;
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(Error::InvalidExtents(format!(
                    "'{}': sizes must be finite and non-negative",
                    s
                )))
            }
        };
        Ok(Size::new(parse(w)?, parse(h)?))
    }
}

/// Snapshot of container and content measurements.
///
/// Taken fresh for every calculation since content may be resized between
/// frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub container_width: f64,
    pub container_height: f64,
    pub content_width: f64,
    pub content_height: f64,
}

impl Extents {
    pub fn new(
        container_width: f64,
        container_height: f64,
        content_width: f64,
        content_height: f64,
    ) -> Self {
        Self {
            container_width,
            container_height,
            content_width,
            content_height,
        }
    }

    pub fn from_sizes(container: Size, content: Size) -> Self {
        Self::new(container.width, container.height, content.width, content.height)
    }

    /// Lower bound of the rest range on the x axis: `container - content`
    ///
    /// Positive when the content is narrower than its container.
    #[inline]
    pub fn min_x(&self) -> f64 {
        scroll_min(self.container_width, self.content_width)
    }

    /// Lower bound of the rest range on the y axis: `container - content`
    #[inline]
    pub fn min_y(&self) -> f64 {
        scroll_min(self.container_height, self.content_height)
    }
}

#[inline]
fn scroll_min(container: f64, content: f64) -> f64 {
    container - content
}

/// Visual output sink: receives the translation to apply to the rendered content
pub trait TranslationSink {
    fn apply_translation(&mut self, position: Position);
}

//! Pure easing functions for programmatic panel motion
//!
//! Curves map progress [0, 1] to eased progress [0, 1]; [`ease`] lifts a curve
//! to the tween form `(t, b, c, d)` used by the animation driver.

pub use crate::config::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Quadratic => quadratic_ease_out(t),
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::Exponential => exponential_ease_out(t),
        }
    }
}

/// Quadratic ease-out in tween form
///
/// * `t` - elapsed time
/// * `b` - beginning value
/// * `c` - change in value
/// * `d` - duration
///
/// Returns `b` at `t = 0` and exactly `b + c` at `t = d`.
#[inline]
pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let p = t / d;
    -c * p * (p - 2.0) + b
}

/// Eased value of `easing` at elapsed time `t` of `d`, starting at `b` and changing by `c`
#[inline]
pub fn ease(easing: EasingType, t: f64, b: f64, c: f64, d: f64) -> f64 {
    match easing {
        // Keep the exact tween formula for the default curve
        EasingType::Quadratic => ease_out(t.clamp(0.0, d), b, c, d),
        other => b + c * other.apply(t / d),
    }
}

/// Quadratic ease-out: f(t) = -t(t - 2)
#[inline]
fn quadratic_ease_out(t: f64) -> f64 {
    -t * (t - 2.0)
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

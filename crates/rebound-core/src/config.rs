use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (holds the log file)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve used by the snap-back animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Constant speed
    Linear,
    /// Quadratic ease-out: f(t) = t(2 - t)
    #[default]
    Quadratic,
    /// Cubic ease-out: f(t) = 1 - (1-t)³
    Cubic,
    /// Quintic ease-out: f(t) = 1 - (1-t)⁵
    Quintic,
    /// Exponential ease-out: f(t) = 1 - 2^(-10t)
    Exponential,
}

/// Physics parameters of one elastic panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Width of the elastic zone beyond each boundary, in pixels
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Fraction of a drag delta applied inside the elastic zone (0.0-1.0)
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Snap-back animation duration after release
    #[serde(default = "default_return_duration")]
    pub return_duration_ms: u64,
    /// Easing curve for programmatic animations
    #[serde(default)]
    pub easing: EasingType,
    /// Swipe momentum (off by default)
    #[serde(default)]
    pub momentum: MomentumConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            damping: default_damping(),
            return_duration_ms: default_return_duration(),
            easing: EasingType::default(),
            momentum: MomentumConfig::default(),
        }
    }
}

impl PanelConfig {
    /// Check the physics preconditions (damping in [0, 1], finite non-negative tolerance)
    pub fn validate(&self) -> crate::Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(crate::Error::Config(format!(
                "panel.tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(crate::Error::Config(format!(
                "panel.damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        self.momentum.validate()
    }

    #[inline]
    pub fn return_duration(&self) -> Duration {
        Duration::from_millis(self.return_duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumConfig {
    /// Animate on swipe gestures
    #[serde(default)]
    pub enabled: bool,
    /// Multiplier turning swipe velocity (px/ms) into a travel distance (px)
    #[serde(default = "default_velocity_scale")]
    pub velocity_scale: f64,
    /// Momentum animation duration
    #[serde(default = "default_momentum_duration")]
    pub duration_ms: u64,
    /// Release speed (px/ms) at which a drag counts as a swipe
    #[serde(default = "default_min_swipe_velocity")]
    pub min_swipe_velocity: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            velocity_scale: default_velocity_scale(),
            duration_ms: default_momentum_duration(),
            min_swipe_velocity: default_min_swipe_velocity(),
        }
    }
}

impl MomentumConfig {
    fn validate(&self) -> crate::Result<()> {
        if !self.velocity_scale.is_finite() {
            return Err(crate::Error::Config(
                "panel.momentum.velocity_scale must be finite".to_string(),
            ));
        }
        if !self.min_swipe_velocity.is_finite() || self.min_swipe_velocity < 0.0 {
            return Err(crate::Error::Config(format!(
                "panel.momentum.min_swipe_velocity must be non-negative, got {}",
                self.min_swipe_velocity
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frames per second while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Idle poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Pixel width of one terminal cell
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f64,
    /// Pixel height of one terminal cell
    #[serde(default = "default_cell_height")]
    pub cell_height_px: f64,
    /// Width of the demo content in cells
    #[serde(default = "default_content_columns")]
    pub content_columns: u16,
    /// Height of the demo content in cells
    #[serde(default = "default_content_rows")]
    pub content_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_fps: default_animation_fps(),
            tick_rate_ms: default_tick_rate(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
            content_columns: default_content_columns(),
            content_rows: default_content_rows(),
        }
    }
}

impl UiConfig {
    fn validate(&self) -> crate::Result<()> {
        if self.animation_fps == 0 {
            return Err(crate::Error::Config(
                "ui.animation_fps must be greater than zero".to_string(),
            ));
        }
        if !(self.cell_width_px > 0.0 && self.cell_height_px > 0.0) {
            return Err(crate::Error::Config(
                "ui.cell_width_px and ui.cell_height_px must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Interval between animation frames
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.animation_fps.max(1) as u64)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rebound")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tolerance() -> f64 {
    50.0
}

fn default_damping() -> f64 {
    0.5
}

fn default_return_duration() -> u64 {
    500
}

fn default_velocity_scale() -> f64 {
    30.0
}

fn default_momentum_duration() -> u64 {
    2000
}

fn default_min_swipe_velocity() -> f64 {
    1.0
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_cell_height() -> f64 {
    16.0
}

fn default_content_columns() -> u16 {
    160
}

fn default_content_rows() -> u16 {
    80
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.panel.validate()?;
        self.ui.validate()
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/rebound/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("rebound")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("rebound.log")
    }
}

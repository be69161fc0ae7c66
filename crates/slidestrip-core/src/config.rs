use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::scroll_state::WrapPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub auto_advance: AutoAdvanceConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
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

/// Layout options for the carousel itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Show the minimap slider under the content
    #[serde(default = "default_true")]
    pub show_slider: bool,
    /// Spacing between items, in layout units
    #[serde(default = "default_spacing")]
    pub spacing: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            show_slider: default_true(),
            spacing: default_spacing(),
        }
    }
}

/// Track and thumb appearance of the minimap slider
///
/// Colors are hex strings (e.g. "#8e8e93" or "8e8e93"); dimensions are layout units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default = "default_track_width")]
    pub track_width: f64,
    #[serde(default = "default_track_height")]
    pub track_height: f64,
    #[serde(default = "default_track_color")]
    pub track_color: String,
    #[serde(default = "default_thumb_color")]
    pub thumb_color: String,
    /// Gap between the thumb and the track edges
    #[serde(default = "default_thumb_inset")]
    pub thumb_inset: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track_width: default_track_width(),
            track_height: default_track_height(),
            track_color: default_track_color(),
            thumb_color: default_thumb_color(),
            thumb_inset: default_thumb_inset(),
        }
    }
}

impl SliderConfig {
    /// Track width available to the thumb once the inset is removed on both sides
    #[inline]
    pub fn usable_track(&self) -> f64 {
        self.track_width - 2.0 * self.thumb_inset
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoAdvanceConfig {
    /// Periodically scroll to the next item
    #[serde(default)]
    pub enabled: bool,
    /// Seconds between advances
    #[serde(default = "default_interval_secs")]
    pub interval_secs: f64,
    /// How the end of content is detected before looping back to the first item
    #[serde(default)]
    pub wrap: WrapPolicy,
}

impl Default for AutoAdvanceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: default_interval_secs(),
            wrap: WrapPolicy::default(),
        }
    }
}

impl AutoAdvanceConfig {
    /// Tick period as a Duration
    ///
    /// Only meaningful after `validate()`; non-finite or non-positive values
    /// fall back to the default interval.
    pub fn interval(&self) -> Duration {
        if self.interval_secs.is_finite() && self.interval_secs > 0.0 {
            Duration::from_secs_f64(self.interval_secs)
        } else {
            Duration::from_secs_f64(default_interval_secs())
        }
    }
}

/// Easing curve applied to animated scrolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolls instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one animated scroll
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Columns moved per manual scroll step
    #[serde(default = "default_scroll_columns")]
    pub scroll_columns: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// How far manual scrolling may pull past either edge before springing back
    #[serde(default = "default_overscroll")]
    pub overscroll_columns: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_columns: default_scroll_columns(),
            animation_fps: default_animation_fps(),
            overscroll_columns: default_overscroll(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the status line under the carousel
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_status_bar: default_true(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slidestrip")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_spacing() -> f64 {
    8.0
}

fn default_track_width() -> f64 {
    98.0
}

fn default_track_height() -> f64 {
    6.0
}

fn default_track_color() -> String {
    "#8e8e93".to_string()
}

fn default_thumb_color() -> String {
    "#007aff".to_string()
}

fn default_thumb_inset() -> f64 {
    1.0
}

fn default_interval_secs() -> f64 {
    1.5
}

fn default_animation_duration() -> u64 {
    250
}

fn default_scroll_columns() -> u16 {
    4
}

fn default_animation_fps() -> u32 {
    60
}

fn default_overscroll() -> u16 {
    3
}

fn default_tick_rate() -> u64 {
    100
}

/// Parse a hex color string into RGB components
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
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
    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a specific file, creating parent directories
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

    /// Reject values the carousel cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        let interval = self.auto_advance.interval_secs;
        if !interval.is_finite() || interval <= 0.0 {
            return Err(crate::Error::Config(format!(
                "auto_advance.interval_secs must be a positive number, got {}",
                interval
            )));
        }

        for color in [&self.slider.track_color, &self.slider.thumb_color] {
            if parse_hex_rgb(color).is_none() {
                return Err(crate::Error::InvalidColor(color.clone()));
            }
        }

        if let WrapPolicy::AtOrBeyond { tolerance } = self.auto_advance.wrap {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(crate::Error::Config(format!(
                    "auto_advance.wrap.tolerance must be >= 0, got {}",
                    tolerance
                )));
            }
        }

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/slidestrip/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("slidestrip")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("slidestrip.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

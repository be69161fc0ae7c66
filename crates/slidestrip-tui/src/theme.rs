use ratatui::style::Color;
use slidestrip_core::config::{parse_hex_rgb, SliderConfig};
use tracing::warn;

/// Runtime colors for the carousel chrome
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub status_bg: Color,

    // Minimap slider
    pub track: Color,
    pub thumb: Color,

    // Auto-advance indicator
    pub running: Color,
    pub paused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            status_bg: Color::Rgb(0x32, 0x30, 0x2f),
            track: Color::Rgb(0x8e, 0x8e, 0x93),
            thumb: Color::Rgb(0x00, 0x7a, 0xff),
            running: Color::Rgb(0xa9, 0xb6, 0x65),
            paused: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}

/// Parse a hex color string into a ratatui Color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    parse_hex_rgb(hex).map(|(r, g, b)| Color::Rgb(r, g, b))
}

impl Theme {
    /// Default chrome with the slider colors taken from configuration
    pub fn from_slider(slider: &SliderConfig) -> Self {
        let mut theme = Self::default();
        match parse_hex_color(&slider.track_color) {
            Some(color) => theme.track = color,
            None => warn!("Invalid track color {:?}, using default", slider.track_color),
        }
        match parse_hex_color(&slider.thumb_color) {
            Some(color) => theme.thumb = color,
            None => warn!("Invalid thumb color {:?}, using default", slider.thumb_color),
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_colors_from_config() {
        let slider = SliderConfig {
            track_color: "#112233".to_string(),
            thumb_color: "abc".to_string(),
            ..Default::default()
        };
        let theme = Theme::from_slider(&slider);
        assert_eq!(theme.track, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.thumb, Color::Rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let slider = SliderConfig {
            thumb_color: "#nothex".to_string(),
            ..Default::default()
        };
        let theme = Theme::from_slider(&slider);
        assert_eq!(theme.thumb, Theme::default().thumb);
    }
}

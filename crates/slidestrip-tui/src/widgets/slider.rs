use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use slidestrip_core::{SliderConfig, ThumbGeometry};

use crate::theme::Theme;

/// Layout units covered by one terminal row
const UNITS_PER_ROW: f64 = 6.0;

/// Minimap slider: a fixed track with a thumb mirroring the scroll position
pub struct SliderWidget;

impl SliderWidget {
    /// Terminal rows needed for a track of the configured height
    pub fn rows(slider: &SliderConfig) -> u16 {
        (slider.track_height / UNITS_PER_ROW).ceil().max(1.0) as u16
    }

    /// Draw the track centered in `area`, shrunk to fit if the area is narrower
    pub fn draw(
        buf: &mut Buffer,
        area: Rect,
        thumb: &ThumbGeometry,
        slider: &SliderConfig,
        theme: &Theme,
    ) {
        if area.width == 0 || area.height == 0 || slider.track_width <= 0.0 {
            return;
        }

        let track_cols = (slider.track_width.round() as u16).clamp(1, area.width);
        let rows = Self::rows(slider).min(area.height);
        let track = Rect::new(
            area.x + (area.width - track_cols) / 2,
            area.y,
            track_cols,
            rows,
        );
        buf.set_style(track, Style::default().bg(theme.track));

        let (start, end) = thumb_columns(thumb, slider, track_cols);
        if end > start {
            let thumb_area = Rect::new(track.x + start, track.y, end - start, rows);
            buf.set_style(thumb_area, Style::default().bg(theme.thumb));
        }
    }
}

/// Thumb span in track-relative columns, `start..end`
///
/// The track may be drawn narrower than configured, so units are scaled to
/// columns first. The thumb stays inside the inset and is at least one column.
fn thumb_columns(thumb: &ThumbGeometry, slider: &SliderConfig, track_cols: u16) -> (u16, u16) {
    let scale = track_cols as f64 / slider.track_width;
    let inset = slider.thumb_inset.max(0.0);

    let lo = (inset * scale).round().min(track_cols as f64);
    let hi = ((inset + thumb.usable_track) * scale).round().clamp(lo, track_cols as f64);
    if hi <= lo {
        return (lo as u16, lo as u16);
    }

    let width = (thumb.width * scale).round().clamp(1.0, hi - lo);
    let start = ((inset + thumb.leading) * scale).round().clamp(lo, hi - width);
    (start as u16, (start + width) as u16)
}

//! Minimap thumb geometry derived from a scroll snapshot.

use crate::config::SliderConfig;
use crate::scroll_state::ScrollState;

/// Thumb placement inside the track, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    /// Distance from the inset start of the track to the thumb's leading edge
    pub leading: f64,
    pub width: f64,
    /// Track width minus the inset on both sides
    pub usable_track: f64,
}

/// Pure mapping from scroll state to slider thumb size and position
#[derive(Debug, Clone, Copy)]
pub struct GeometryModel<'a> {
    state: &'a ScrollState,
    slider: &'a SliderConfig,
}

impl<'a> GeometryModel<'a> {
    pub fn new(state: &'a ScrollState, slider: &'a SliderConfig) -> Self {
        Self { state, slider }
    }

    /// Thumb width: one item's share of the usable track. Zero when there are no items.
    pub fn thumb_width(&self) -> f64 {
        if self.state.item_count() == 0 {
            return 0.0;
        }
        self.slider.usable_track() / self.state.item_count() as f64
    }

    /// Whether there is any content hidden beyond the viewport
    ///
    /// False until both the viewport and an item have been measured.
    pub fn is_scrollable(&self) -> bool {
        self.state.item_count() > 0
            && self.state.is_measured()
            && self.state.scrollable_extent() > 0.0
    }

    /// Leading offset of the thumb within the usable track
    ///
    /// Moves linearly from 0 at rest to `usable_track - thumb_width` at the far
    /// end and stays there under overscroll.
    pub fn thumb_leading_offset(&self) -> f64 {
        if self.state.item_width() == 0.0 {
            return 0.0;
        }

        let extent = self.state.scrollable_extent();
        if extent <= 0.0 {
            return 0.0;
        }

        let offset_x = self.state.offset_x();
        if offset_x >= 0.0 {
            return 0.0;
        }

        let max_leading = self.slider.usable_track() - self.thumb_width();
        let progress = (offset_x / extent).abs();
        if progress <= 1.0 {
            progress * max_leading
        } else {
            max_leading
        }
    }

    /// Snapshot of the thumb to draw, or `None` when the slider is hidden
    pub fn thumb(&self, show_slider: bool) -> Option<ThumbGeometry> {
        if !show_slider || !self.is_scrollable() {
            return None;
        }
        Some(ThumbGeometry {
            leading: self.thumb_leading_offset(),
            width: self.thumb_width(),
            usable_track: self.slider.usable_track(),
        })
    }
}

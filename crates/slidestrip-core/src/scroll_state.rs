//! Measured carousel dimensions and the current horizontal scroll offset.
//!
//! The host layout pushes measurements and offset notifications in through the
//! `on_*` setters; everything else (geometry, auto-advance) only reads a snapshot.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the end of content is recognised before auto-advance loops back
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WrapPolicy {
    /// Wrap only when `|offset_x|` equals the scrollable extent exactly
    Exact,
    /// Wrap once the offset is within `tolerance` units of the extent, or past it
    AtOrBeyond { tolerance: f64 },
}

impl Default for WrapPolicy {
    fn default() -> Self {
        WrapPolicy::AtOrBeyond { tolerance: 0.5 }
    }
}

/// Scroll position and layout measurements of one carousel
///
/// `offset_x` is the content origin relative to the viewport: 0 at rest and
/// increasingly negative as content moves left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    offset_x: f64,
    viewport_width: f64,
    item_width: f64,
    item_count: usize,
    spacing: f64,
}

impl ScrollState {
    pub fn new(item_count: usize, spacing: f64) -> Self {
        Self {
            item_count,
            spacing,
            ..Default::default()
        }
    }

    /// Replace the offset with the latest value reported by the scroll surface
    #[inline]
    pub fn on_scroll_offset_changed(&mut self, offset_x: f64) {
        self.offset_x = offset_x;
    }

    /// Record the width of a laid-out item
    ///
    /// Items are assumed to share one width. Non-positive measurements (an item
    /// that has not been laid out yet) are ignored; positive ones overwrite.
    pub fn on_item_measured(&mut self, width: f64) {
        if width > 0.0 && width.is_finite() {
            self.item_width = width;
        } else {
            warn!("Ignoring item measurement {}", width);
        }
    }

    /// Record the viewport width (last write wins)
    #[inline]
    pub fn on_viewport_measured(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// The host replaced its content sequence
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    #[inline]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[inline]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    #[inline]
    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Both the viewport and an item have been laid out
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.item_width > 0.0 && self.viewport_width > 0.0
    }

    /// Total width of all items laid out side by side
    pub fn content_width(&self) -> f64 {
        if self.item_count == 0 {
            return 0.0;
        }
        let count = self.item_count as f64;
        self.item_width * count + self.spacing * (count - 1.0)
    }

    /// Distance the content can travel: content width minus viewport width
    #[inline]
    pub fn scrollable_extent(&self) -> f64 {
        self.content_width() - self.viewport_width
    }

    /// Leading edge offset of the item at `index` in content coordinates
    pub fn item_leading_edge(&self, index: usize) -> f64 {
        index as f64 * (self.item_width + self.spacing)
    }

    /// Whether the offset sits at the far end of the content
    ///
    /// A strip resting at its start is never at the end, however wide the
    /// tolerance is compared to the extent.
    pub fn is_at_end(&self, policy: WrapPolicy) -> bool {
        let extent = self.scrollable_extent();
        match policy {
            WrapPolicy::Exact => self.offset_x.abs() == extent,
            WrapPolicy::AtOrBeyond { tolerance } => {
                self.offset_x < 0.0 && -self.offset_x >= extent - tolerance
            }
        }
    }
}

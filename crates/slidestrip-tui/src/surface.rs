use std::time::Instant;

use slidestrip_core::{ScrollCommand, ScrollConfig, ScrollState, ScrollSurface};
use tracing::debug;

use crate::scroll::OffsetAnimator;

/// The horizontally scrolling strip the carousel content lives on
///
/// Owns the real offset and animates it. Every change is reported through
/// [`update_at`](Self::update_at), which is how the carousel's `ScrollState`
/// learns where the strip went.
#[derive(Debug, Clone)]
pub struct HorizontalStrip {
    animator: OffsetAnimator,
    item_width: f64,
    spacing: f64,
    extent: f64,
    overscroll: f64,
    reported: f64,
}

impl HorizontalStrip {
    pub fn new(config: ScrollConfig) -> Self {
        let overscroll = config.overscroll_columns as f64;
        Self {
            animator: OffsetAnimator::new(config),
            item_width: 0.0,
            spacing: 0.0,
            extent: 0.0,
            overscroll,
            reported: 0.0,
        }
    }

    /// Pick up the latest measured layout
    pub fn sync_layout(&mut self, state: &ScrollState) {
        self.item_width = state.item_width();
        self.spacing = state.spacing();
        self.extent = state.scrollable_extent().max(0.0);
    }

    /// Most negative resting offset
    #[inline]
    pub fn min_offset(&self) -> f64 {
        -self.extent
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.animator.current()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    fn clamp_resting(&self, offset: f64) -> f64 {
        offset.clamp(self.min_offset(), 0.0)
    }

    /// Manual scroll; positive `columns` reveals content further right
    ///
    /// May pull up to the overscroll allowance past either edge; the strip
    /// springs back once that animation settles.
    pub fn scroll_by(&mut self, columns: f64) {
        self.scroll_by_at(columns, Instant::now());
    }

    pub fn scroll_by_at(&mut self, columns: f64, now: Instant) {
        let lower = self.min_offset() - self.overscroll;
        let upper = self.overscroll;
        let target = (self.animator.target() - columns).clamp(lower, upper);
        self.animator.animate_to_at(target, now);
    }

    pub fn scroll_to_start(&mut self) {
        self.animator.animate_to(0.0);
    }

    pub fn scroll_to_end(&mut self) {
        self.animator.animate_to(self.min_offset());
    }

    /// Resting offset that aligns item `index` with the leading edge
    pub fn offset_for_index(&self, index: usize) -> f64 {
        let leading = index as f64 * (self.item_width + self.spacing);
        self.clamp_resting(-leading)
    }

    /// Advance animation to `now`; returns the new offset if it moved
    pub fn update_at(&mut self, now: Instant) -> Option<f64> {
        let offset = self.animator.update_at(now);

        if !self.animator.is_animating() {
            let resting = self.clamp_resting(offset);
            if resting != offset {
                debug!("Strip springing back from {:.2} to {:.2}", offset, resting);
                self.animator.animate_to_at(resting, now);
            }
        }

        let offset = self.animator.current();
        if offset != self.reported {
            self.reported = offset;
            Some(offset)
        } else {
            None
        }
    }
}

impl ScrollSurface for HorizontalStrip {
    fn scroll_to(&mut self, command: ScrollCommand) {
        let target = self.offset_for_index(command.index);
        debug!(
            "Strip scroll to item {} ({:?}, animated={}) -> {:.2}",
            command.index, command.anchor, command.animated, target
        );
        if command.animated {
            self.animator.animate_to(target);
        } else {
            self.animator.set_offset(target);
        }
    }
}

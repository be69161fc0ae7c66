use std::time::Instant;

use anyhow::Result;
use slidestrip_core::{
    AdvanceTick, AppConfig, AutoAdvanceController, GeometryModel, ScrollState, ScrollSurface,
    SliderConfig, ThumbGeometry,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::item::CarouselItem;
use crate::surface::HorizontalStrip;

/// Composition root: items, scroll state, strip surface, slider and auto-advance
///
/// Measurements flow in through [`layout`](Self::layout), strip movement
/// through [`update_at`](Self::update_at), timer ticks through
/// [`pump_ticks`](Self::pump_ticks). All of it runs on the caller's thread.
pub struct CarouselView<T: CarouselItem> {
    items: Vec<T>,
    state: ScrollState,
    slider: SliderConfig,
    show_slider: bool,
    scroll_columns: f64,
    surface: HorizontalStrip,
    advance: AutoAdvanceController,
    ticks: Option<mpsc::UnboundedReceiver<AdvanceTick>>,
}

impl<T: CarouselItem> CarouselView<T> {
    pub fn new(items: Vec<T>, config: &AppConfig) -> Self {
        let state = ScrollState::new(items.len(), config.carousel.spacing);
        Self {
            items,
            state,
            slider: config.slider.clone(),
            show_slider: config.carousel.show_slider,
            scroll_columns: config.scroll.scroll_columns.max(1) as f64,
            surface: HorizontalStrip::new(config.scroll.clone()),
            advance: AutoAdvanceController::new(config.auto_advance.clone()),
            ticks: None,
        }
    }

    /// Start the auto-advance timer (cancelled at once if auto-advance is off)
    pub fn mount(&mut self) -> Result<()> {
        let ticks = self.advance.mount()?;
        self.ticks = Some(ticks);
        info!("Carousel mounted with {} items", self.items.len());
        Ok(())
    }

    /// Release the timer; the view stays drawable but never advances again
    pub fn unmount(&mut self) {
        self.advance.unmount();
        self.ticks = None;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the content; offset and auto-advance position are kept
    pub fn set_items(&mut self, items: Vec<T>) {
        self.state.set_item_count(items.len());
        self.items = items;
        self.surface.sync_layout(&self.state);
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn slider(&self) -> &SliderConfig {
        &self.slider
    }

    pub fn advance(&self) -> &AutoAdvanceController {
        &self.advance
    }

    pub fn show_slider(&self) -> bool {
        self.show_slider
    }

    /// Layout pass: record viewport and item widths
    pub fn layout(&mut self, viewport_width: u16) {
        self.state.on_viewport_measured(viewport_width as f64);
        if let Some(first) = self.items.first() {
            let width = first.width() as f64;
            if width != self.state.item_width() {
                self.state.on_item_measured(width);
            }
        }
        self.surface.sync_layout(&self.state);
    }

    /// Thumb to draw this frame, if the slider is visible at all
    pub fn thumb(&self) -> Option<ThumbGeometry> {
        GeometryModel::new(&self.state, &self.slider).thumb(self.show_slider)
    }

    pub fn is_scrollable(&self) -> bool {
        GeometryModel::new(&self.state, &self.slider).is_scrollable()
    }

    /// Handle every timer tick that arrived since the last call
    pub fn pump_ticks(&mut self) -> usize {
        let Some(ticks) = self.ticks.as_mut() else {
            return 0;
        };

        let mut handled = 0;
        while let Ok(tick) = ticks.try_recv() {
            handled += 1;
            if let Some(command) = self.advance.on_tick(&self.state) {
                debug!("Tick {} -> {:?}", tick.seq, command);
                self.surface.scroll_to(command);
            }
        }
        handled
    }

    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    /// Advance the strip animation and feed any offset change back into the state
    pub fn update_at(&mut self, now: Instant) -> bool {
        match self.surface.update_at(now) {
            Some(offset) => {
                self.state.on_scroll_offset_changed(offset);
                true
            }
            None => false,
        }
    }

    /// Whether the next frames should run at animation speed
    pub fn needs_fast_update(&self) -> bool {
        self.surface.is_animating()
    }

    pub fn scroll_left(&mut self) {
        self.surface.scroll_by(-self.scroll_columns);
    }

    pub fn scroll_right(&mut self) {
        self.surface.scroll_by(self.scroll_columns);
    }

    pub fn scroll_by(&mut self, columns: f64) {
        self.surface.scroll_by(columns);
    }

    pub fn scroll_to_start(&mut self) {
        self.surface.scroll_to_start();
    }

    pub fn scroll_to_end(&mut self) {
        self.surface.scroll_to_end();
    }

    pub fn toggle_slider(&mut self) {
        self.show_slider = !self.show_slider;
    }

    pub fn toggle_auto_advance(&mut self) -> Result<bool> {
        let enabled = !self.advance.is_enabled();
        self.advance.set_enabled(enabled)?;
        Ok(enabled)
    }
}

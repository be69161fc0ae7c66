use slidestrip_core::AppConfig;
use tracing::{info, warn};

use crate::input::Action;
use crate::item::CarouselItem;
use crate::theme::Theme;
use crate::view::CarouselView;

/// Main application state
pub struct App<T: CarouselItem> {
    pub view: CarouselView<T>,
    pub theme: Theme,
    pub should_quit: bool,
    pub show_status_bar: bool,
    /// One-shot message shown in the status bar until the next action
    pub status_message: Option<String>,
}

impl<T: CarouselItem> App<T> {
    pub fn new(items: Vec<T>, config: &AppConfig) -> Self {
        Self {
            view: CarouselView::new(items, config),
            theme: Theme::from_slider(&config.slider),
            should_quit: false,
            show_status_bar: config.ui.show_status_bar,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn handle_action(&mut self, action: Action) {
        if action != Action::None {
            self.status_message = None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollLeft => self.view.scroll_left(),
            Action::ScrollRight => self.view.scroll_right(),
            Action::JumpToStart => self.view.scroll_to_start(),
            Action::JumpToEnd => self.view.scroll_to_end(),
            Action::ToggleSlider => {
                self.view.toggle_slider();
                let state = if self.view.show_slider() { "shown" } else { "hidden" };
                self.set_status(format!("Slider {}", state));
            }
            Action::ToggleAutoAdvance => match self.view.toggle_auto_advance() {
                Ok(true) => {
                    info!("Auto-advance enabled");
                    self.set_status("Auto-advance on");
                }
                Ok(false) => {
                    info!("Auto-advance disabled");
                    self.set_status("Auto-advance off");
                }
                Err(e) => {
                    warn!("Failed to toggle auto-advance: {}", e);
                    self.set_status(format!("Auto-advance unavailable: {}", e));
                }
            },
            Action::None => {}
        }
    }
}

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while a scroll animation is running
    animation_rate: Duration,
}

impl EventHandler {
    /// `animation_tick` is the frame interval, see `ScrollConfigExt::animation_tick_duration`
    pub fn new(tick_rate_ms: u64, animation_tick: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            animation_rate: animation_tick.max(Duration::from_millis(1)),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        Self::poll(self.tick_rate)
    }

    /// Poll with the short animation timeout so frames keep coming
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        Self::poll(self.animation_rate)
    }

    fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            Ok(Self::translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }

    fn translate(event: Event) -> Option<AppEvent> {
        match event {
            // Release events arrive on some platforms; only presses count
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse wheel or click
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollConfigExt;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use slidestrip_core::ScrollConfig;

    #[test]
    fn test_animation_rate_from_scroll_config() {
        let scroll = ScrollConfig {
            animation_fps: 60,
            ..Default::default()
        };
        let handler = EventHandler::new(100, scroll.animation_tick_duration());
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
        assert_eq!(handler.animation_rate, Duration::from_millis(16));

        // Above 1000 fps the frame interval rounds to zero; polling still waits
        let fast = ScrollConfig {
            animation_fps: 5000,
            ..Default::default()
        };
        let handler = EventHandler::new(0, fast.animation_tick_duration());
        assert_eq!(handler.tick_rate, Duration::from_millis(1));
        assert_eq!(handler.animation_rate, Duration::from_millis(1));
    }

    #[test]
    fn test_key_release_ignored() {
        let press = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert!(matches!(
            EventHandler::translate(Event::Key(press)),
            Some(AppEvent::Key(_))
        ));

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert!(EventHandler::translate(Event::Key(release)).is_none());
    }

    #[test]
    fn test_resize_passed_through() {
        assert!(matches!(
            EventHandler::translate(Event::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
    }
}

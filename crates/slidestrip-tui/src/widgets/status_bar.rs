use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use slidestrip_core::AdvancePhase;
use unicode_width::UnicodeWidthStr;

use crate::item::CarouselItem;
use crate::theme::Theme;
use crate::view::CarouselView;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<T: CarouselItem>(
        frame: &mut Frame,
        area: Rect,
        view: &CarouselView<T>,
        theme: &Theme,
        message: Option<&str>,
    ) {
        frame.render_widget(Paragraph::new(Self::line(area.width, view, theme, message)), area);
    }

    fn line<T: CarouselItem>(
        width: u16,
        view: &CarouselView<T>,
        theme: &Theme,
        message: Option<&str>,
    ) -> Line<'static> {
        let advance = view.advance();
        let (mode, mode_color) = match advance.phase() {
            AdvancePhase::Running => (" AUTO ", theme.running),
            AdvancePhase::Idle => (" MANUAL ", theme.paused),
        };

        let state = view.state();
        let status_text = match message {
            Some(msg) => format!(" {}", msg),
            None => format!(
                " item {}/{} | offset {:.1} / {:.1}",
                advance.target_index() + 1,
                state.item_count(),
                state.offset_x(),
                -state.scrollable_extent().max(0.0),
            ),
        };

        let help_hint = " h/l:scroll g/G:ends a:auto s:slider q:quit ";
        let used = mode.width() + status_text.width() + help_hint.width();
        let padding = (width as usize).saturating_sub(used);

        let base = Style::default().bg(theme.status_bg);
        Line::from(vec![
            Span::styled(mode, Style::default().fg(theme.status_bg).bg(mode_color)),
            Span::styled(status_text, base.fg(theme.fg)),
            Span::styled(" ".repeat(padding), base),
            Span::styled(help_hint, base.fg(theme.muted)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::ColorCard;
    use slidestrip_core::AppConfig;

    #[test]
    fn test_manual_mode_line() {
        let mut view = CarouselView::new(ColorCard::palette(20), &AppConfig::default());
        view.layout(60);
        let line = StatusBarWidget::line(120, &view, &Theme::default(), None);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with(" MANUAL  item 1/7 | offset 0.0 / -128.0"));
        assert!(text.ends_with("q:quit "));
        assert_eq!(text.width(), 120);
    }

    #[test]
    fn test_message_replaces_position() {
        let view = CarouselView::new(ColorCard::palette(20), &AppConfig::default());
        let line = StatusBarWidget::line(80, &view, &Theme::default(), Some("paused"));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains(" paused"));
        assert!(!text.contains("offset"));
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};

use super::{SliderWidget, StripWidget};
use crate::item::CarouselItem;
use crate::theme::Theme;
use crate::view::CarouselView;

/// Strip on top, minimap slider below
///
/// The slider rows are only reserved while a thumb exists, so a strip whose
/// content fits keeps the whole area.
pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render<T: CarouselItem>(
        frame: &mut Frame,
        area: Rect,
        view: &mut CarouselView<T>,
        theme: &Theme,
    ) {
        Self::draw(frame.buffer_mut(), area, view, theme);
    }

    pub fn draw<T: CarouselItem>(
        buf: &mut Buffer,
        area: Rect,
        view: &mut CarouselView<T>,
        theme: &Theme,
    ) {
        buf.set_style(area, Style::default().bg(theme.bg).fg(theme.fg));
        view.layout(area.width);

        let Some(thumb) = view.thumb() else {
            StripWidget::draw(buf, area, view);
            return;
        };

        let rows = SliderWidget::rows(view.slider());
        if area.height <= rows.saturating_add(1) {
            // Too short for both; the content wins
            StripWidget::draw(buf, area, view);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(rows),
            ])
            .split(area);

        StripWidget::draw(buf, chunks[0], view);
        SliderWidget::draw(buf, chunks[2], &thumb, view.slider(), theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::ColorCard;
    use slidestrip_core::AppConfig;

    fn has_thumb(buf: &Buffer, row: u16, theme: &Theme) -> bool {
        (0..buf.area.width).any(|x| buf.cell((x, row)).is_some_and(|c| c.bg == theme.thumb))
    }

    #[test]
    fn test_slider_below_scrollable_strip() {
        let theme = Theme::default();
        let mut view = CarouselView::new(ColorCard::palette(20), &AppConfig::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 10));
        let area = buf.area;
        CarouselWidget::draw(&mut buf, area, &mut view, &theme);

        assert!(has_thumb(&buf, 9, &theme));
        assert!(!has_thumb(&buf, 8, &theme));
        assert_eq!(buf.cell((0, 0)).unwrap().bg, view.items()[0].color);
    }

    #[test]
    fn test_no_slider_when_content_fits() {
        let theme = Theme::default();
        let mut view = CarouselView::new(ColorCard::palette(4), &AppConfig::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 10));
        let area = buf.area;
        CarouselWidget::draw(&mut buf, area, &mut view, &theme);

        assert!(!view.is_scrollable());
        assert!((0..10).all(|row| !has_thumb(&buf, row, &theme)));
        // Cards use the full height
        assert_eq!(buf.cell((0, 9)).unwrap().bg, view.items()[0].color);
    }

    #[test]
    fn test_huge_track_height_keeps_strip() {
        let theme = Theme::default();
        let mut config = AppConfig::default();
        config.slider.track_height = 1.0e9;
        let mut view = CarouselView::new(ColorCard::palette(20), &config);
        assert_eq!(SliderWidget::rows(view.slider()), u16::MAX);

        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 10));
        let area = buf.area;
        CarouselWidget::draw(&mut buf, area, &mut view, &theme);
        assert!((0..10).all(|row| !has_thumb(&buf, row, &theme)));
        assert_eq!(buf.cell((0, 9)).unwrap().bg, view.items()[0].color);
    }

    #[test]
    fn test_short_area_drops_slider() {
        let theme = Theme::default();
        let mut view = CarouselView::new(ColorCard::palette(20), &AppConfig::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 2));
        let area = buf.area;
        CarouselWidget::draw(&mut buf, area, &mut view, &theme);
        assert!(!has_thumb(&buf, 1, &theme));
    }
}

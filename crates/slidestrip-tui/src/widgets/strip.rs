use ratatui::{buffer::Buffer, layout::Rect};

use crate::item::CarouselItem;
use crate::view::CarouselView;

/// Horizontally scrolled row of carousel items
pub struct StripWidget;

impl StripWidget {
    /// Blit every item that overlaps `area` at its scrolled position
    pub fn draw<T: CarouselItem>(buf: &mut Buffer, area: Rect, view: &CarouselView<T>) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let state = view.state();
        let shift = state.offset_x().round() as i32;
        let left = area.x as i32;
        let right = area.right() as i32;

        for (index, item) in view.items().iter().enumerate() {
            let width = item.width();
            if width == 0 {
                continue;
            }
            let x = left + state.item_leading_edge(index).round() as i32 + shift;
            if x + width as i32 <= left {
                continue;
            }
            if x >= right {
                break;
            }

            // Items draw from their own origin; clip while copying
            let mut scratch = Buffer::empty(Rect::new(0, 0, width, area.height));
            item.render(scratch.area, &mut scratch);

            for col in 0..width {
                let screen_x = x + col as i32;
                if screen_x < left || screen_x >= right {
                    continue;
                }
                for row in 0..area.height {
                    if let (Some(src), Some(dst)) = (
                        scratch.cell((col, row)),
                        buf.cell_mut((screen_x as u16, area.y + row)),
                    ) {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};
    use slidestrip_core::AppConfig;

    /// Fills its area with one background color
    struct Swatch(Color);

    impl CarouselItem for Swatch {
        fn width(&self) -> u16 {
            4
        }

        fn render(&self, area: Rect, buf: &mut Buffer) {
            buf.set_style(area, Style::default().bg(self.0));
        }
    }

    fn swatches() -> CarouselView<Swatch> {
        let mut config = AppConfig::default();
        config.carousel.spacing = 1.0;
        config.scroll.smooth_enabled = false;
        let items = vec![
            Swatch(Color::Red),
            Swatch(Color::Green),
            Swatch(Color::Blue),
            Swatch(Color::Yellow),
        ];
        CarouselView::new(items, &config)
    }

    fn row(buf: &Buffer) -> Vec<Color> {
        (0..buf.area.width)
            .map(|x| buf.cell((x, 0)).map(|c| c.bg).unwrap_or(Color::Reset))
            .collect()
    }

    #[test]
    fn test_items_laid_out_with_spacing() {
        let mut view = swatches();
        view.layout(10);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        let area = buf.area;
        StripWidget::draw(&mut buf, area, &view);

        let r = Color::Red;
        let g = Color::Green;
        let n = Color::Reset;
        assert_eq!(row(&buf), vec![r, r, r, r, n, g, g, g, g, n]);
    }

    #[test]
    fn test_partially_scrolled_item_is_clipped() {
        let mut view = swatches();
        view.layout(10);
        view.scroll_by(2.0);
        view.update();
        assert_eq!(view.state().offset_x(), -2.0);

        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        let area = buf.area;
        StripWidget::draw(&mut buf, area, &view);

        let r = Color::Red;
        let g = Color::Green;
        let b = Color::Blue;
        let n = Color::Reset;
        assert_eq!(row(&buf), vec![r, r, n, g, g, g, g, n, b, b]);
    }

    #[test]
    fn test_draws_inside_offset_area_only() {
        let mut view = swatches();
        view.layout(6);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        StripWidget::draw(&mut buf, Rect::new(2, 0, 6, 1), &view);

        let r = Color::Red;
        let g = Color::Green;
        let n = Color::Reset;
        assert_eq!(row(&buf), vec![n, n, r, r, r, r, n, g, n, n]);
    }
}

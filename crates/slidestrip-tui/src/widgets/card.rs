use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::item::CarouselItem;

const PALETTE: [(&str, Color); 7] = [
    ("red", Color::Rgb(0xff, 0x3b, 0x30)),
    ("green", Color::Rgb(0x34, 0xc7, 0x59)),
    ("blue", Color::Rgb(0x0a, 0x84, 0xff)),
    ("green", Color::Rgb(0x34, 0xc7, 0x59)),
    ("yellow", Color::Rgb(0xff, 0xcc, 0x00)),
    ("orange", Color::Rgb(0xff, 0x95, 0x00)),
    ("purple", Color::Rgb(0xaf, 0x52, 0xde)),
];

/// Solid colored card with a centered label
#[derive(Debug, Clone)]
pub struct ColorCard {
    pub label: String,
    pub color: Color,
    pub width: u16,
}

impl ColorCard {
    pub fn new(label: impl Into<String>, color: Color, width: u16) -> Self {
        Self {
            label: label.into(),
            color,
            width,
        }
    }

    /// One card per palette color
    pub fn palette(width: u16) -> Vec<Self> {
        Self::cycle(PALETTE.len(), width)
    }

    /// `count` numbered cards, repeating the palette as needed
    pub fn cycle(count: usize, width: u16) -> Vec<Self> {
        (0..count)
            .map(|i| {
                let (name, color) = PALETTE[i % PALETTE.len()];
                Self::new(format!("{} {}", i + 1, name), color, width)
            })
            .collect()
    }

    fn label_color(&self) -> Color {
        match self.color {
            Color::Rgb(r, g, b) => {
                // Perceived brightness decides dark or light text
                let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                if luma > 150.0 {
                    Color::Black
                } else {
                    Color::White
                }
            }
            _ => Color::White,
        }
    }
}

impl CarouselItem for ColorCard {
    fn width(&self) -> u16 {
        self.width
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(self.color))
            .render(area, buf);

        if area.height == 0 {
            return;
        }

        let label = truncate_to_width(&self.label, area.width as usize);
        let label_area = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.label_color())
                    .bg(self.color)
                    .add_modifier(Modifier::BOLD),
            )
            .render(label_area, buf);
    }
}

/// Longest prefix of `text` that fits in `max` display columns
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= max
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_seven_cards() {
        let cards = ColorCard::palette(24);
        assert_eq!(cards.len(), 7);
        assert!(cards.iter().all(|c| c.width() == 24));
        assert_eq!(cards[0].label, "1 red");
    }

    #[test]
    fn test_cycle_repeats_colors() {
        let cards = ColorCard::cycle(9, 10);
        assert_eq!(cards.len(), 9);
        assert_eq!(cards[7].color, cards[0].color);
        assert_eq!(cards[8].label, "9 green");
    }

    #[test]
    fn test_render_fills_and_labels() {
        let card = ColorCard::new("hi", Color::Rgb(0, 0, 0), 6);
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        assert_eq!(buf.cell((0, 0)).unwrap().bg, Color::Rgb(0, 0, 0));
        let middle: String = (0..6)
            .map(|x| buf.cell((x, 1)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(middle.trim(), "hi");
        assert_eq!(buf.cell((2, 1)).unwrap().fg, Color::White);
    }

    #[test]
    fn test_wide_label_truncated_by_columns() {
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("abc", 3), "abc");

        let card = ColorCard::new("日本語", Color::Rgb(0, 0, 0), 3);
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        let row: String = (0..3)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(row.contains('日'));
        assert!(!row.contains('本'));
    }

    #[test]
    fn test_light_card_gets_dark_label() {
        let card = ColorCard::new("x", Color::Rgb(0xff, 0xcc, 0x00), 4);
        assert_eq!(card.label_color(), Color::Black);
    }
}

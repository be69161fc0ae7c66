use ratatui::{buffer::Buffer, layout::Rect};

/// Something the carousel can lay out in its strip
///
/// Items are expected to share one width; the carousel measures the first.
pub trait CarouselItem {
    /// Width in terminal columns
    fn width(&self) -> u16;

    /// Draw into `area`, which always starts at the item's own origin
    fn render(&self, area: Rect, buf: &mut Buffer);
}

impl<T: CarouselItem + ?Sized> CarouselItem for Box<T> {
    fn width(&self) -> u16 {
        (**self).width()
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        (**self).render(area, buf)
    }
}

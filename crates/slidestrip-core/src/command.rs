/// Which edge of the target item lines up with the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Leading,
}

/// Request for the scroll surface to bring an item into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub index: usize,
    pub anchor: Anchor,
    pub animated: bool,
}

impl ScrollCommand {
    /// Animated scroll aligning the item's leading edge with the viewport
    pub fn leading(index: usize) -> Self {
        Self {
            index,
            anchor: Anchor::Leading,
            animated: true,
        }
    }
}

/// Command sink implemented by whatever actually scrolls the content
///
/// Commands are fire-and-forget. A surface reports where it ends up through
/// its own offset notifications, not through this trait.
pub trait ScrollSurface {
    fn scroll_to(&mut self, command: ScrollCommand);
}

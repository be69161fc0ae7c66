mod card;
mod carousel;
mod slider;
mod status_bar;
mod strip;

pub use card::ColorCard;
pub use carousel::CarouselWidget;
pub use slider::SliderWidget;
pub use status_bar::StatusBarWidget;
pub use strip::StripWidget;

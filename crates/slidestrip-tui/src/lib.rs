pub mod app;
pub mod event;
pub mod input;
pub mod item;
pub mod scroll;
pub mod surface;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::App;
pub use item::CarouselItem;
pub use surface::HorizontalStrip;
pub use theme::Theme;
pub use view::CarouselView;

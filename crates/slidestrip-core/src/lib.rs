pub mod advance;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scroll_state;

pub use advance::{AdvancePhase, AdvanceTick, AutoAdvanceController};
pub use command::{Anchor, ScrollCommand, ScrollSurface};
pub use config::{
    AppConfig, AutoAdvanceConfig, CarouselConfig, EasingType, ScrollConfig, SliderConfig,
};
pub use error::{Error, Result};
pub use geometry::{GeometryModel, ThumbGeometry};
pub use scroll_state::{ScrollState, WrapPolicy};

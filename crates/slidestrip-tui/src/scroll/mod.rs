//! Smooth horizontal scrolling for the carousel strip
//!
//! - `curve` - easing curves and time progress
//! - `animation` - offset animator combining both
//!
//! ```ignore
//! use slidestrip_tui::scroll::OffsetAnimator;
//!
//! let mut animator = OffsetAnimator::new(config.scroll.clone());
//! animator.animate_to(-120.0);
//!
//! // In the main loop, once per frame
//! let offset = animator.update();
//! ```

pub mod animation;
pub mod curve;

pub use animation::{OffsetAnimator, ScrollConfigExt};
pub use curve::{EasingType, EasingTypeExt};

//! Auto-advance: a repeating timer plus the state machine that turns its
//! ticks into scroll commands.

mod controller;
mod timer;

pub use controller::{AdvancePhase, AutoAdvanceController};
pub use timer::AdvanceTick;

use std::time::Instant;

use anyhow::{bail, Result};

use slidestrip_core::{
    AppConfig, AutoAdvanceController, ScrollConfig, ScrollState, ScrollSurface, WrapPolicy,
};
use slidestrip_tui::HorizontalStrip;

/// Carousel to step through, in layout units
pub struct SimulateInput {
    pub ticks: u64,
    pub items: usize,
    pub item_width: f64,
    pub viewport: f64,
    pub spacing: f64,
    pub wrap: WrapPolicy,
}

#[derive(Debug, PartialEq)]
struct Step {
    tick: u64,
    target: Option<usize>,
    offset: f64,
    at_end: bool,
}

/// Print the index and offset sequence auto-advance produces
///
/// Ticks are fed by hand rather than waiting on the timer, and the strip
/// settles instantly, so each row shows where the content comes to rest.
pub async fn run(config: &AppConfig, input: &SimulateInput) -> Result<()> {
    if input.item_width <= 0.0 || input.viewport <= 0.0 {
        bail!("item width and viewport must both be positive");
    }

    let steps = simulate(config, input)?;

    println!(
        "{} items of {:.0} (spacing {:.0}) in a {:.0} viewport, wrap {:?}\n",
        input.items, input.item_width, input.spacing, input.viewport, input.wrap
    );
    println!("  tick  target  offset     at end");
    for step in &steps {
        let target = step
            .target
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>4}  {:>6}  {:>9.2}  {}",
            step.tick,
            target,
            step.offset,
            if step.at_end { "yes" } else { "" }
        );
    }

    Ok(())
}

fn simulate(config: &AppConfig, input: &SimulateInput) -> Result<Vec<Step>> {
    let mut advance = config.auto_advance.clone();
    advance.enabled = true;
    advance.wrap = input.wrap;

    let mut state = ScrollState::new(input.items, input.spacing);
    state.on_item_measured(input.item_width);
    state.on_viewport_measured(input.viewport);

    let mut strip = HorizontalStrip::new(ScrollConfig {
        smooth_enabled: false,
        ..config.scroll.clone()
    });
    strip.sync_layout(&state);

    let mut controller = AutoAdvanceController::new(advance);
    // Real ticks are never read; the receiver only keeps the channel open
    let _ticks = controller.mount()?;

    let mut steps = Vec::with_capacity(step_capacity(input.ticks));
    for tick in 1..=input.ticks {
        let command = controller.on_tick(&state);
        if let Some(command) = command {
            strip.scroll_to(command);
        }
        if let Some(offset) = strip.update_at(Instant::now()) {
            state.on_scroll_offset_changed(offset);
        }
        steps.push(Step {
            tick,
            target: command.map(|c| c.index),
            offset: state.offset_x(),
            at_end: state.is_at_end(input.wrap),
        });
    }

    controller.unmount();
    Ok(steps)
}

/// Preallocation for the step table; larger runs grow as they go
fn step_capacity(ticks: u64) -> usize {
    ticks.min(1024) as usize
}

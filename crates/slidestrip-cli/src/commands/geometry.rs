use anyhow::{bail, Result};

use slidestrip_core::{GeometryModel, ScrollState, SliderConfig};

/// Layout to evaluate, in layout units
pub struct GeometryInput {
    pub items: usize,
    pub item_width: f64,
    pub viewport: f64,
    pub offset: f64,
    pub spacing: f64,
}

#[derive(Debug, PartialEq)]
struct GeometryReport {
    content_width: f64,
    extent: f64,
    scrollable: bool,
    thumb_width: f64,
    thumb_leading: f64,
    max_leading: f64,
}

pub fn run(input: &GeometryInput, slider: &SliderConfig) -> Result<()> {
    if input.item_width <= 0.0 || input.viewport <= 0.0 {
        bail!("item width and viewport must both be positive");
    }

    let report = evaluate(input, slider);

    println!("Layout:");
    println!("  Items:             {}", input.items);
    println!("  Item width:        {:.2}", input.item_width);
    println!("  Spacing:           {:.2}", input.spacing);
    println!("  Viewport:          {:.2}", input.viewport);
    println!("  Offset:            {:.2}", input.offset);
    println!("  Content width:     {:.2}", report.content_width);
    println!("  Scrollable extent: {:.2}", report.extent);
    println!();
    println!("Slider (track {:.0}, inset {:.0}):", slider.track_width, slider.thumb_inset);
    if report.scrollable {
        println!("  Thumb width:       {:.2}", report.thumb_width);
        println!(
            "  Thumb leading:     {:.2} (max {:.2})",
            report.thumb_leading, report.max_leading
        );
    } else {
        println!("  Hidden: content fits the viewport");
    }

    Ok(())
}

fn evaluate(input: &GeometryInput, slider: &SliderConfig) -> GeometryReport {
    let mut state = ScrollState::new(input.items, input.spacing);
    state.on_item_measured(input.item_width);
    state.on_viewport_measured(input.viewport);
    state.on_scroll_offset_changed(input.offset);

    let model = GeometryModel::new(&state, slider);
    GeometryReport {
        content_width: state.content_width(),
        extent: state.scrollable_extent(),
        scrollable: model.is_scrollable(),
        thumb_width: model.thumb_width(),
        thumb_leading: model.thumb_leading_offset(),
        max_leading: slider.usable_track() - model.thumb_width(),
    }
}

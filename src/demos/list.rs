//! Windowed list scenario: sweep a long list from top to past the end,
//! then shrink it while scrolled to the bottom.

use plinth_layout::{LayoutError, ScrollWindowController, WindowResult};
use serde::Serialize;

use crate::config::ListSettings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListStep {
    /// Offset reported by the viewport
    pub requested_offset: f32,
    /// Offset the controller kept after clamping
    pub scroll_offset: f32,
    pub window: WindowResult,
    /// Label of the first rendered row
    pub first_rendered: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListReport {
    pub item_count: usize,
    pub steps: Vec<ListStep>,
    /// Window after the list shrank to `shrunk_to` rows
    pub shrunk_to: usize,
    pub after_shrink: ListStep,
}

fn snapshot(controller: &ScrollWindowController, items: &[String], requested_offset: f32) -> ListStep {
    ListStep {
        requested_offset,
        scroll_offset: controller.scroll_offset(),
        window: *controller.window(),
        first_rendered: controller.visible_items(items).first().cloned(),
    }
}

/// Run the scenario over `item_count` generated rows.
pub fn run_list_demo(settings: &ListSettings, item_count: usize) -> Result<ListReport, LayoutError> {
    let config = settings.window_config()?;
    let items: Vec<String> = (0..item_count).map(|i| format!("Item {}", i)).collect();
    let mut controller = ScrollWindowController::new(config, item_count);

    let end = config.total_height(item_count);
    let offsets = [0.0, config.viewport_height() * 1.5, end / 2.0, end + 1000.0, -50.0];

    let mut steps = Vec::with_capacity(offsets.len());
    for offset in offsets {
        controller.on_scroll(offset);
        steps.push(snapshot(&controller, &items, offset));
    }

    // Jump to the bottom, then drop most rows
    controller.on_scroll(end);
    let shrunk_to = item_count / 10;
    controller.set_item_count(shrunk_to);
    let after_shrink = snapshot(&controller, &items[..shrunk_to], end);

    log::debug!(
        "List demo: {} rows, {} rendered at most",
        item_count,
        config.visible_count()
    );
    Ok(ListReport {
        item_count,
        steps,
        shrunk_to,
        after_shrink,
    })
}

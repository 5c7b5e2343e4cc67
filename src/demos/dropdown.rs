//! Dropdown scenario: open near the top, scroll the page until the panel
//! flips above its trigger, grow the window, then close.

use std::time::Duration;

use plinth_layout::{
    ElementId, HeadlessHost, LayoutError, OverlayPositionController, PositionResult, Rect,
    ViewportEventKind, ViewportSize,
};
use serde::Serialize;

use super::SimClock;
use crate::config::OverlaySettings;

const TRIGGER: ElementId = ElementId(1);
const PANEL: ElementId = ElementId(2);

/// Interval between synthetic scroll events, roughly one per frame.
const SCROLL_EVENT_INTERVAL: Duration = Duration::from_millis(16);

/// Placement observed after one step of the scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownStep {
    pub label: &'static str,
    pub result: PositionResult,
    /// Whether the controller recomputed during this step
    pub recomputed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownReport {
    pub steps: Vec<DropdownStep>,
    /// Before-paint frames requested over the whole run
    pub frames_scheduled: usize,
    /// Listeners still registered once the dropdown closed
    pub subscriptions_after_close: usize,
}

/// Poll the debounce and run any frame it scheduled.
fn pump(controller: &mut OverlayPositionController, host: &mut HeadlessHost, clock: &SimClock) -> bool {
    if !controller.poll(clock.now(), host) {
        return false;
    }
    if controller.pending_frame().is_none() {
        // Host without a frame scheduler; already recomputed
        return true;
    }

    let mut recomputed = false;
    for frame in host.take_due_frames() {
        recomputed |= controller.on_frame(frame, host);
    }
    recomputed
}

/// Run the scenario with the given overlay settings.
pub fn run_dropdown_demo(settings: &OverlaySettings) -> Result<DropdownReport, LayoutError> {
    let mut clock = SimClock::new();
    let mut host = HeadlessHost::new(ViewportSize::new(1000.0, 800.0));
    host.place(TRIGGER, Rect::from_edges(400.0, 100.0, 600.0, 140.0));
    host.place(PANEL, Rect::sized(300.0, 200.0));

    let mut controller = OverlayPositionController::new(TRIGGER, PANEL, settings.position_config())
        .with_debounce(settings.debounce())?;
    let mut steps = Vec::new();

    let result = *controller.open(&mut host);
    steps.push(DropdownStep {
        label: "open",
        result,
        recomputed: true,
    });

    // Scroll the page up so the trigger travels down the viewport
    let mut recomputed = false;
    for _ in 0..10 {
        host.scroll_content(-50.0);
        controller.handle_event(ViewportEventKind::Scroll, clock.now());
        recomputed |= pump(&mut controller, &mut host, &clock);
        clock.advance(SCROLL_EVENT_INTERVAL);
    }
    steps.push(DropdownStep {
        label: "scroll burst",
        result: *controller.result(),
        recomputed,
    });

    if let Some(deadline) = controller.next_deadline() {
        clock.advance(deadline.saturating_duration_since(clock.now()));
    }
    let recomputed = pump(&mut controller, &mut host, &clock);
    steps.push(DropdownStep {
        label: "scroll settled",
        result: *controller.result(),
        recomputed,
    });

    host.resize(ViewportSize::new(1000.0, 1200.0));
    controller.handle_event(ViewportEventKind::Resize, clock.now());
    clock.advance(settings.debounce());
    let recomputed = pump(&mut controller, &mut host, &clock);
    steps.push(DropdownStep {
        label: "resize settled",
        result: *controller.result(),
        recomputed,
    });

    controller.close(&mut host);
    steps.push(DropdownStep {
        label: "close",
        result: *controller.result(),
        recomputed: false,
    });

    log::debug!("Dropdown demo finished after {} steps", steps.len());
    let report = DropdownReport {
        steps,
        frames_scheduled: host.scheduled_frames(),
        subscriptions_after_close: host.subscription_count(),
    };
    controller.dispose(&mut host);
    Ok(report)
}

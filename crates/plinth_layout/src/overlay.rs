//! Recomputation lifecycle for an anchored overlay.
//!
//! [`OverlayPositionController`] keeps a panel's [`PositionResult`] in step with
//! its trigger:
//! - On open it measures and solves synchronously, before the consumer paints.
//! - While open, resize and scroll events arm a trailing debounce; when it
//!   expires the re-solve is scheduled on the next before-paint frame.
//! - On close it tears everything down and resets to the empty result at once.
//!
//! The controller is single-threaded and cooperative. The host delivers events
//! through [`handle_event`](OverlayPositionController::handle_event), drives the
//! debounce with [`poll`](OverlayPositionController::poll) and reports due frames
//! through [`on_frame`](OverlayPositionController::on_frame).

use std::time::Duration;
use web_time::Instant;

use crate::debounce::Debouncer;
use crate::error::LayoutResult;
use crate::event::ViewportEventKind;
use crate::host::{ElementId, FrameHandle, Geometry, OverlayHost, SubscriptionId};
use crate::position::{solve_measured, PositionConfig, PositionResult};

/// Lifecycle phase of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Not shown; output is the empty result
    #[default]
    Closed,
    /// Opening; the initial measurement is in progress
    Measuring,
    /// Shown with a computed placement
    Positioned,
}

/// Keeps an overlay panel positioned against its trigger.
#[derive(Debug)]
pub struct OverlayPositionController {
    trigger: ElementId,
    panel: ElementId,
    config: PositionConfig,
    phase: OverlayPhase,
    result: PositionResult,
    debouncer: Debouncer,
    /// Frame callback the next recompute is waiting on
    pending_frame: Option<FrameHandle>,
    subscriptions: Vec<SubscriptionId>,
}

impl OverlayPositionController {
    /// Create a closed controller for a trigger/panel pair.
    pub fn new(trigger: ElementId, panel: ElementId, config: PositionConfig) -> Self {
        Self {
            trigger,
            panel,
            config,
            phase: OverlayPhase::Closed,
            result: PositionResult::empty(),
            debouncer: Debouncer::default(),
            pending_frame: None,
            subscriptions: Vec::new(),
        }
    }

    /// Builder: set the resize/scroll debounce delay.
    pub fn with_debounce(mut self, delay: Duration) -> LayoutResult<Self> {
        self.debouncer = Debouncer::new(delay)?;
        Ok(self)
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Check if the overlay is open.
    pub fn is_open(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    /// The placement to apply. Empty while closed.
    pub fn result(&self) -> &PositionResult {
        &self.result
    }

    pub fn config(&self) -> &PositionConfig {
        &self.config
    }

    pub fn trigger(&self) -> ElementId {
        self.trigger
    }

    pub fn panel(&self) -> ElementId {
        self.panel
    }

    /// When the pending debounced recompute becomes due, if one is armed.
    ///
    /// Hosts with their own event loop use this to know when to call [`poll`](Self::poll).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Frame callback a recompute is waiting on, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Replace the configuration. An open overlay is re-solved immediately.
    pub fn set_config<H: Geometry + ?Sized>(&mut self, config: PositionConfig, host: &H) {
        self.config = config;
        if self.phase == OverlayPhase::Positioned {
            self.recompute(host);
        }
    }

    /// Open the overlay: measure and solve synchronously, then start listening
    /// for resize and scroll.
    ///
    /// Opening an already open overlay refreshes it.
    pub fn open<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> &PositionResult {
        if self.is_open() {
            self.refresh(&*host);
            return &self.result;
        }

        self.phase = OverlayPhase::Measuring;
        self.result = self.measure_and_solve(&*host);
        self.phase = OverlayPhase::Positioned;

        for kind in [ViewportEventKind::Resize, ViewportEventKind::Scroll] {
            let subscription = host.subscribe(kind, kind.listener_options());
            self.subscriptions.push(subscription);
        }

        log::debug!(
            "Overlay {:?}: opened (empty placement: {})",
            self.panel,
            self.result.is_empty()
        );
        &self.result
    }

    /// Close the overlay: cancel pending work, drop listeners and reset the
    /// output to the empty result. No debounce applies.
    pub fn close<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        if !self.is_open() {
            return;
        }

        self.teardown(host);
        self.result = PositionResult::empty();
        self.phase = OverlayPhase::Closed;
        log::debug!("Overlay {:?}: closed", self.panel);
    }

    /// Open or close to match `open`.
    pub fn set_open<H: OverlayHost + ?Sized>(&mut self, open: bool, host: &mut H) {
        if open {
            self.open(host);
        } else {
            self.close(host);
        }
    }

    /// Release every host resource held by the controller.
    pub fn dispose<H: OverlayHost + ?Sized>(mut self, host: &mut H) {
        self.close(host);
    }

    /// A subscribed viewport event fired. Arms the trailing debounce.
    ///
    /// Events arriving while closed are ignored.
    pub fn handle_event(&mut self, kind: ViewportEventKind, now: Instant) {
        if self.phase != OverlayPhase::Positioned {
            log::trace!("Overlay {:?}: ignoring {:?} while closed", self.panel, kind);
            return;
        }
        self.debouncer.trigger(now);
    }

    /// Advance the debounce clock. When the quiet period has elapsed the
    /// recompute is scheduled before the next paint, or run right away if the
    /// host cannot schedule frames.
    ///
    /// Returns true if a recompute was scheduled or performed.
    pub fn poll<H: OverlayHost + ?Sized>(&mut self, now: Instant, host: &mut H) -> bool {
        if self.phase != OverlayPhase::Positioned || !self.debouncer.fire_if_due(now) {
            return false;
        }

        if let Some(previous) = self.pending_frame.take() {
            host.cancel_frame(previous);
        }

        match host.schedule_before_paint() {
            Some(handle) => {
                log::trace!("Overlay {:?}: recompute scheduled on {:?}", self.panel, handle);
                self.pending_frame = Some(handle);
            }
            None => self.recompute(&*host),
        }
        true
    }

    /// A scheduled frame is due. Applies the recompute if `handle` is the
    /// frame this controller is waiting on and the overlay is still open.
    ///
    /// Late or foreign callbacks are no-ops; returns whether the result was recomputed.
    pub fn on_frame<H: Geometry + ?Sized>(&mut self, handle: FrameHandle, host: &H) -> bool {
        if self.phase != OverlayPhase::Positioned || self.pending_frame != Some(handle) {
            log::trace!("Overlay {:?}: dropping stale frame {:?}", self.panel, handle);
            return false;
        }

        self.pending_frame = None;
        self.recompute(host);
        true
    }

    /// Re-solve an open overlay in place, synchronously.
    pub fn refresh<H: Geometry + ?Sized>(&mut self, host: &H) {
        if self.phase == OverlayPhase::Positioned {
            self.recompute(host);
        }
    }

    fn recompute<H: Geometry + ?Sized>(&mut self, host: &H) {
        let result = self.measure_and_solve(host);
        if result != self.result {
            log::trace!("Overlay {:?}: placement changed to {:?}", self.panel, result);
        }
        self.result = result;
    }

    fn measure_and_solve<H: Geometry + ?Sized>(&self, host: &H) -> PositionResult {
        let trigger = host.measure(self.trigger);
        let panel = host.measure(self.panel);
        if trigger.is_none() || panel.is_none() {
            log::trace!("Overlay {:?}: element not measurable, no override", self.panel);
        }
        solve_measured(trigger, panel, host.viewport_size(), &self.config)
    }

    fn teardown<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        self.debouncer.cancel();
        if let Some(handle) = self.pending_frame.take() {
            host.cancel_frame(handle);
        }
        for subscription in self.subscriptions.drain(..) {
            host.unsubscribe(subscription);
        }
    }
}

//! In-memory host for non-browser targets and tests.
//!
//! [`HeadlessHost`] keeps element rects in a map, records subscriptions and
//! queues before-paint frames until [`take_due_frames`](HeadlessHost::take_due_frames)
//! drains them. It can also run without a frame scheduler, in which case
//! controllers fall back to synchronous recomputation.

use std::collections::{HashMap, HashSet};

use crate::event::{ListenerOptions, ViewportEventKind};
use crate::geometry::{Rect, ViewportSize};
use crate::host::{ElementId, EventSource, FrameHandle, FrameScheduler, Geometry, SubscriptionId};

/// A host whose geometry, listeners and frames live in memory.
#[derive(Debug)]
pub struct HeadlessHost {
    viewport: ViewportSize,
    elements: HashMap<ElementId, Rect>,
    subscriptions: HashMap<SubscriptionId, (ViewportEventKind, ListenerOptions)>,
    /// Frames scheduled and not yet run or cancelled, in scheduling order
    pending_frames: Vec<FrameHandle>,
    /// Frames cancelled since the last paint
    cancelled_frames: HashSet<FrameHandle>,
    frame_scheduling: bool,
    next_id: u64,
    scheduled_total: usize,
}

impl HeadlessHost {
    /// Create a host with an empty element map.
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            elements: HashMap::new(),
            subscriptions: HashMap::new(),
            pending_frames: Vec::new(),
            cancelled_frames: HashSet::new(),
            frame_scheduling: true,
            next_id: 1,
            scheduled_total: 0,
        }
    }

    /// Builder: disable paint scheduling.
    pub fn without_frame_scheduler(mut self) -> Self {
        self.frame_scheduling = false;
        self
    }

    /// Set (or move) an element's rect.
    pub fn place(&mut self, element: ElementId, rect: Rect) {
        self.elements.insert(element, rect);
    }

    /// Remove an element; later measurements of it return `None`.
    pub fn detach(&mut self, element: ElementId) {
        self.elements.remove(&element);
    }

    /// Change the viewport size.
    pub fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    /// Scroll the page content by `dy` pixels, moving every element up.
    pub fn scroll_content(&mut self, dy: f32) {
        for rect in self.elements.values_mut() {
            *rect = rect.translate(0.0, -dy);
        }
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Check if any live subscription listens for `kind`.
    pub fn is_subscribed(&self, kind: ViewportEventKind) -> bool {
        self.subscriptions.values().any(|(k, _)| *k == kind)
    }

    /// Options of the first live subscription for `kind`.
    pub fn listener_options(&self, kind: ViewportEventKind) -> Option<ListenerOptions> {
        self.subscriptions
            .values()
            .find(|(k, _)| *k == kind)
            .map(|(_, options)| *options)
    }

    /// Total frames ever scheduled.
    pub fn scheduled_frames(&self) -> usize {
        self.scheduled_total
    }

    /// Frames scheduled and neither run nor cancelled.
    pub fn pending_frame_count(&self) -> usize {
        self.pending_frames.len()
    }

    /// Check if a frame was cancelled since the last paint.
    pub fn was_cancelled(&self, handle: FrameHandle) -> bool {
        self.cancelled_frames.contains(&handle)
    }

    /// "Paint": hand out every pending frame, oldest first.
    ///
    /// Forgets frames cancelled before this paint.
    pub fn take_due_frames(&mut self) -> Vec<FrameHandle> {
        self.cancelled_frames.clear();
        std::mem::take(&mut self.pending_frames)
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Geometry for HeadlessHost {
    fn measure(&self, element: ElementId) -> Option<Rect> {
        self.elements.get(&element).copied()
    }

    fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }
}

impl EventSource for HeadlessHost {
    fn subscribe(&mut self, kind: ViewportEventKind, options: ListenerOptions) -> SubscriptionId {
        let id = SubscriptionId(self.next_id());
        self.subscriptions.insert(id, (kind, options));
        id
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        self.subscriptions.remove(&subscription);
    }
}

impl FrameScheduler for HeadlessHost {
    fn schedule_before_paint(&mut self) -> Option<FrameHandle> {
        if !self.frame_scheduling {
            return None;
        }
        let handle = FrameHandle(self.next_id());
        self.pending_frames.push(handle);
        self.scheduled_total += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending_frames.len();
        self.pending_frames.retain(|pending| *pending != handle);
        if self.pending_frames.len() != before {
            self.cancelled_frames.insert(handle);
        }
    }
}

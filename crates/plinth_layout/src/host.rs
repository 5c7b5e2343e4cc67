//! Capabilities a host environment provides to the controllers.
//!
//! The controllers never own UI elements, timers or listeners themselves.
//! They ask the host to measure, subscribe and schedule, and the host calls
//! back into the controller when a subscribed event fires or a scheduled
//! frame is due.

use crate::event::{ListenerOptions, ViewportEventKind};
use crate::geometry::{Rect, ViewportSize};

/// Opaque handle to a UI element owned by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Handle returned by an event subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle to a scheduled before-paint callback, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Geometry queries.
pub trait Geometry {
    /// Bounding rect of an element in viewport coordinates.
    ///
    /// Returns `None` for a detached or missing element; never panics.
    fn measure(&self, element: ElementId) -> Option<Rect>;

    /// Current viewport size.
    fn viewport_size(&self) -> ViewportSize;
}

/// Viewport event subscriptions.
pub trait EventSource {
    /// Start delivering `kind` events to the subscriber.
    fn subscribe(&mut self, kind: ViewportEventKind, options: ListenerOptions) -> SubscriptionId;

    /// Stop delivering events for a subscription. Unknown ids are ignored.
    fn unsubscribe(&mut self, subscription: SubscriptionId);
}

/// Paint-aligned deferral.
pub trait FrameScheduler {
    /// Request a callback just before the next repaint.
    ///
    /// Returns `None` when the host has no paint scheduling; the caller then
    /// runs the work synchronously.
    fn schedule_before_paint(&mut self) -> Option<FrameHandle>;

    /// Cancel a pending callback. Already-fired or unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Everything an overlay controller needs from its host.
pub trait OverlayHost: Geometry + EventSource + FrameScheduler {}

impl<T: Geometry + EventSource + FrameScheduler> OverlayHost for T {}

//! Viewport events that can invalidate an overlay placement.

use serde::{Deserialize, Serialize};

/// Kind of viewport event a controller listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportEventKind {
    /// Window resized
    Resize,
    /// Window or any ancestor container scrolled
    Scroll,
}

impl ViewportEventKind {
    /// Listener options a controller subscribes this kind with.
    ///
    /// Scroll listens in capture mode so scrolling of any ancestor
    /// container is seen, not just the window.
    pub fn listener_options(self) -> ListenerOptions {
        match self {
            ViewportEventKind::Resize => ListenerOptions::default(),
            ViewportEventKind::Scroll => ListenerOptions {
                capture_ancestors: true,
            },
        }
    }
}

/// Options passed to an event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// Observe the event on every ancestor container during capture
    pub capture_ancestors: bool,
}

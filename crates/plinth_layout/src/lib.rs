//! plinth_layout - Layout computation for anchored overlays and windowed lists
//!
//! This crate provides two pure solvers and the controllers that decide when
//! to run them:
//! - [`solve`] places a floating panel next to its trigger inside the viewport,
//!   and [`OverlayPositionController`] keeps that placement current.
//! - [`compute_window`] picks the rows of a fixed-row-height list to render,
//!   and [`ScrollWindowController`] owns the scroll offset that drives it.

pub mod constants;
mod debounce;
mod error;
mod event;
mod geometry;
mod headless;
mod host;
mod overlay;
mod position;
mod scroll;
mod window;

pub use debounce::Debouncer;
pub use error::{LayoutError, LayoutResult};
pub use event::{ListenerOptions, ViewportEventKind};
pub use geometry::{Rect, ViewportSize};
pub use headless::HeadlessHost;
pub use host::{ElementId, EventSource, FrameHandle, FrameScheduler, Geometry, OverlayHost, SubscriptionId};
pub use overlay::{OverlayPhase, OverlayPositionController};
pub use position::{solve, solve_measured, Alignment, HorizontalAnchor, PositionConfig, PositionResult, VerticalAnchor};
pub use scroll::{ScrollState, ScrollWindowController};
pub use window::{compute_window, try_compute_window, WindowConfig, WindowResult};

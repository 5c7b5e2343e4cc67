//! Error types for layout configuration.

use std::time::Duration;
use thiserror::Error;

/// Errors raised when a layout configuration is rejected.
///
/// Missing measurements and out-of-range scroll offsets are recovered locally
/// and never produce one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Row height must be finite and strictly positive
    #[error("Invalid item height: {value} (must be finite and greater than zero)")]
    InvalidItemHeight {
        /// The rejected height
        value: f32,
    },

    /// Viewport height must be finite and strictly positive
    #[error("Invalid viewport height: {value} (must be finite and greater than zero)")]
    InvalidViewportHeight {
        /// The rejected height
        value: f32,
    },

    /// Debounce delay longer than the accepted maximum
    #[error("Invalid debounce delay: {delay:?}")]
    InvalidDebounceDelay {
        /// The rejected delay
        delay: Duration,
    },
}

/// Result type for layout configuration.
pub type LayoutResult<T> = Result<T, LayoutError>;

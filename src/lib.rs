//! plinth - Anchored overlay and windowed list layout
//!
//! Application layer on top of [`plinth_layout`]: JSON configuration and
//! scripted demos that drive the controllers against a headless host.

pub mod config;
pub mod demos;

pub use config::{AppConfig, ConfigError, LogLevel};

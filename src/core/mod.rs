//! Core module - application infrastructure around the rules engine
//!
//! Everything here serves the binary and other hosts rather than the rules
//! themselves:
//!
//! - [`settings`] - [`EngineSettings`] loaded from / saved to JSON
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - [`SettingsError`] for settings I/O

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use logging::init_logging;
pub use settings::EngineSettings;

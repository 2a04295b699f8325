//! Input/output: command-line shell, configuration, errors and export

/// Command-line interface and command execution
pub mod cli;
/// Defaults and layout constants
pub mod configuration;
/// Error types
pub mod error;
/// Parameter form parsing
pub mod form;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Render pass progress display
pub mod progress;

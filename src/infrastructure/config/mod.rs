//! Configuration loading and validation.
//!
//! The loader parses a YAML document, builds the logging sink it
//! describes, and runs the full validation pass before anything downstream
//! sees the configuration. Every failure is terminal and carries an
//! operator-facing diagnostic.

pub mod error;
pub mod loader;
pub mod validator;

pub use error::ConfigError;
pub use loader::{ConfigLoader, LoadedConfig};
pub use validator::{Validator, MIN_SEGMENT_LENGTH};

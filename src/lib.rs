//! Segstream - configuration core for a segmented media pipeline
//!
//! Segstream cuts an input stream into segments, encodes them against one
//! or more encoding profiles, and pushes the results out through transfer
//! profiles (ftp, scp, s3, or local copy). This crate is the part that has
//! to be right before any of that starts: it loads the pipeline
//! configuration, brings up the logging sink the document asks for, and
//! validates every setting the downstream stages depend on, so a bad
//! document fails fast with one actionable diagnostic instead of crashing
//! an encoder or a transfer mid-run.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration document model,
//!   transfer types, and the capability-probe port
//! - **Infrastructure Layer** (`infrastructure`): the loader, the
//!   validation rules, the logging sink, and the system-backed probe
//!
//! # Example
//!
//! ```no_run
//! use segstream::{ConfigLoader, SystemCapabilities};
//!
//! fn main() -> Result<(), segstream::ConfigError> {
//!     let loaded = ConfigLoader::load("pipeline.yaml", &SystemCapabilities::new())?;
//!     let segment_length = loaded.config().get_i64("segment_length");
//!     println!("segment length: {segment_length:?}");
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{ConfigDocument, TransferType, UnknownTransferType};
pub use domain::ports::CapabilityProbe;
pub use infrastructure::config::{
    ConfigError, ConfigLoader, LoadedConfig, Validator, MIN_SEGMENT_LENGTH,
};
pub use infrastructure::logging::LogSink;
pub use infrastructure::transfer::SystemCapabilities;

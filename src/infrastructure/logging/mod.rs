//! Logging infrastructure built on tracing.
//!
//! One sink per configuration load, targeting a file or standard output
//! as the document requests.

pub mod sink;

pub use sink::LogSink;

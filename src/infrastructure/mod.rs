//! Infrastructure layer: adapters around the domain model.
//!
//! - Configuration loading and validation
//! - Logging sinks
//! - Transfer capability probing
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod config;
pub mod logging;
pub mod transfer;

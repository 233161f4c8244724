//! Transfer subsystem adapters.
//!
//! Only the capability probe lives here; the transfer implementations
//! themselves consume the validated configuration elsewhere.

pub mod capability;

pub use capability::SystemCapabilities;

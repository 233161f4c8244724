//! Domain layer: configuration document model and port traits.

pub mod models;
pub mod ports;

pub use models::{ConfigDocument, TransferType, UnknownTransferType};
pub use ports::CapabilityProbe;

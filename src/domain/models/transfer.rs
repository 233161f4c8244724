use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ports::CapabilityProbe;

/// Mechanism used to move finished segments to their destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    Ftp,
    Scp,
    S3,
    Copy,
}

/// Error for a `transfer_type` value outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The given transfer type is not known: {0}")]
pub struct UnknownTransferType(pub String);

impl TransferType {
    /// Every known transfer mechanism.
    pub const ALL: [Self; 4] = [Self::Ftp, Self::Scp, Self::S3, Self::Copy];

    /// The lowercase name used in configuration documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ftp => "ftp",
            Self::Scp => "scp",
            Self::S3 => "s3",
            Self::Copy => "copy",
        }
    }

    /// Whether this mechanism is usable in the current environment.
    ///
    /// Local copy needs no optional dependencies and is always available;
    /// the rest is answered by the transfer subsystem's probe.
    pub fn is_available(self, probe: &dyn CapabilityProbe) -> bool {
        match self {
            Self::Ftp => probe.can_ftp(),
            Self::Scp => probe.can_scp(),
            Self::S3 => probe.can_s3(),
            Self::Copy => true,
        }
    }
}

impl FromStr for TransferType {
    type Err = UnknownTransferType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ftp" => Ok(Self::Ftp),
            "scp" => Ok(Self::Scp),
            "s3" => Ok(Self::S3),
            "copy" => Ok(Self::Copy),
            other => Err(UnknownTransferType(other.to_string())),
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::{TransferType, UnknownTransferType};

/// Errors produced while loading or validating a pipeline configuration.
///
/// `Read` and `Parse` mean the document never came into existence; every
/// other variant means the document parsed but violates a constraint the
/// pipeline depends on. All of them are terminal for the load: there is no
/// retry and no partially validated configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("The config file can not be read: {path}: {source}")]
    Read {
        /// Path handed to the loader.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not a well-formed YAML mapping.
    #[error("The config file is not a valid config document: {path}: {source}")]
    Parse {
        /// Path handed to the loader.
        path: PathBuf,
        /// Underlying YAML failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// A key the validator depends on is absent or holds the wrong kind of
    /// value.
    #[error("Required config key is missing or has an unexpected type: {0}")]
    MissingKey(&'static str),

    /// `log_type` selects a file sink but the file can not be written.
    #[error("The given log file can not be written to: {0}")]
    LogFileNotWritable(PathBuf),

    /// `temp_dir` is not an existing, writable directory.
    #[error("Temp directory does not exist or can not be written to: {0}")]
    TempDirNotUsable(PathBuf),

    /// `input_location` can not be opened for reading.
    #[error("The input file can not be read: {0}")]
    InputNotReadable(PathBuf),

    /// `segment_length` is below the three second floor.
    #[error("Segment length can not be less than 3 seconds: {0}")]
    SegmentLengthTooShort(i64),

    /// `encoding_profile` names a key with no matching top-level section.
    #[error("The given encoding profile was not found in the config: {0}")]
    EncodingProfileNotFound(String),

    /// `transfer_profile` names a key with no matching top-level section.
    #[error("The given transfer profile was not found in the config: {0}")]
    TransferProfileNotFound(String),

    /// A transfer profile's `transfer_type` is outside the known set.
    #[error(transparent)]
    UnknownTransferType(#[from] UnknownTransferType),

    /// A transfer profile names a valid mechanism that the current
    /// environment can not perform.
    #[error("The given transfer type is not available in this environment: {transfer_type} (required by profile {profile})")]
    TransferTypeUnavailable {
        /// Profile section that asked for the mechanism.
        profile: String,
        /// The mechanism the environment is missing.
        transfer_type: TransferType,
    },
}

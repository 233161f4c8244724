use std::fs::{File, OpenOptions};
use std::path::Path;

use serde_yaml::Value;

use super::error::ConfigError;
use crate::domain::models::{ConfigDocument, TransferType};
use crate::domain::ports::CapabilityProbe;
use crate::infrastructure::logging::LogSink;

/// Shortest segment the pipeline will cut, in seconds.
pub const MIN_SEGMENT_LENGTH: i64 = 3;

/// Rule engine run against a parsed configuration before the pipeline
/// starts.
///
/// Checks run in a fixed order and stop at the first violation, so a
/// broken document always produces the same single diagnostic: filesystem
/// accessibility first, then the segment length floor, then profile
/// cross-references, then transfer capabilities.
pub struct Validator<'a> {
    probe: &'a dyn CapabilityProbe,
}

impl<'a> Validator<'a> {
    /// Create a validator backed by the given capability probe.
    pub fn new(probe: &'a dyn CapabilityProbe) -> Self {
        Self { probe }
    }

    /// Run every check against `config`.
    ///
    /// On the first violation, writes exactly one error-level message to
    /// `log` and returns the matching [`ConfigError`]. A passing document
    /// produces no log output at all.
    pub fn validate(&self, config: &ConfigDocument, log: &LogSink) -> Result<(), ConfigError> {
        self.run_checks(config).inspect_err(|err| log.error(err))
    }

    fn run_checks(&self, config: &ConfigDocument) -> Result<(), ConfigError> {
        Self::check_log_file(config)?;
        Self::check_temp_dir(config)?;
        Self::check_input(config)?;
        Self::check_segment_length(config)?;
        Self::check_encoding_profiles(config)?;
        self.check_transfer_profiles(config)?;
        Ok(())
    }

    fn check_log_file(config: &ConfigDocument) -> Result<(), ConfigError> {
        if config.get_str("log_type") != Some("FILE") {
            return Ok(());
        }
        let path = config
            .get_str("log_file")
            .ok_or(ConfigError::MissingKey("log_file"))?;
        if !file_writable(Path::new(path)) {
            return Err(ConfigError::LogFileNotWritable(path.into()));
        }
        Ok(())
    }

    fn check_temp_dir(config: &ConfigDocument) -> Result<(), ConfigError> {
        let dir = config
            .get_str("temp_dir")
            .ok_or(ConfigError::MissingKey("temp_dir"))?;
        let dir = Path::new(dir);
        if !dir.is_dir() || !dir_writable(dir) {
            return Err(ConfigError::TempDirNotUsable(dir.into()));
        }
        Ok(())
    }

    fn check_input(config: &ConfigDocument) -> Result<(), ConfigError> {
        let input = config
            .get_str("input_location")
            .ok_or(ConfigError::MissingKey("input_location"))?;
        if File::open(input).is_err() {
            return Err(ConfigError::InputNotReadable(input.into()));
        }
        Ok(())
    }

    fn check_segment_length(config: &ConfigDocument) -> Result<(), ConfigError> {
        let length = config
            .get_i64("segment_length")
            .ok_or(ConfigError::MissingKey("segment_length"))?;
        if length < MIN_SEGMENT_LENGTH {
            return Err(ConfigError::SegmentLengthTooShort(length));
        }
        Ok(())
    }

    fn check_encoding_profiles(config: &ConfigDocument) -> Result<(), ConfigError> {
        let names = config
            .string_list("encoding_profile")
            .ok_or(ConfigError::MissingKey("encoding_profile"))?;
        for name in names {
            if config.section(name).is_none() {
                return Err(ConfigError::EncodingProfileNotFound(name.to_string()));
            }
        }
        Ok(())
    }

    fn check_transfer_profiles(&self, config: &ConfigDocument) -> Result<(), ConfigError> {
        let names = config
            .string_list("transfer_profile")
            .ok_or(ConfigError::MissingKey("transfer_profile"))?;
        for name in names {
            let section = config
                .section(name)
                .ok_or_else(|| ConfigError::TransferProfileNotFound(name.to_string()))?;

            // An absent transfer_type reads as the empty string and falls
            // out of the known set like any other bad value.
            let raw = section
                .get(Value::from("transfer_type"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            let transfer_type: TransferType = raw.parse()?;

            if !transfer_type.is_available(self.probe) {
                return Err(ConfigError::TransferTypeUnavailable {
                    profile: name.to_string(),
                    transfer_type,
                });
            }
        }
        Ok(())
    }
}

/// Whether `path` can be opened for appending, creating it if needed.
fn file_writable(path: &Path) -> bool {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .is_ok()
}

/// Whether a file can actually be created inside `dir`.
fn dir_writable(dir: &Path) -> bool {
    tempfile::tempfile_in(dir).is_ok()
}

use std::fs;
use std::ops;
use std::path::Path;

use serde_yaml::Value;

use super::error::ConfigError;
use super::validator::Validator;
use crate::domain::models::ConfigDocument;
use crate::domain::ports::CapabilityProbe;
use crate::infrastructure::logging::LogSink;

/// Loads and validates a pipeline configuration file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the document at `path`, build its log sink, and validate it.
    ///
    /// The capability probe is supplied by the transfer subsystem (or a
    /// fake under test) and decides whether each referenced transfer
    /// mechanism is usable. Any failure, from an unreadable file through a
    /// violated constraint, is fatal to the load: no document escapes and
    /// the caller is expected to stop the pipeline.
    pub fn load(
        path: impl AsRef<Path>,
        probe: &dyn CapabilityProbe,
    ) -> Result<LoadedConfig, ConfigError> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ConfigDocument::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let log = LogSink::build(&config);
        Validator::new(probe).validate(&config, &log)?;

        Ok(LoadedConfig { config, log })
    }
}

/// A validated configuration together with the sink built for it.
///
/// The document is read-only from here on; downstream stages look settings
/// up by key and log through the bundled sink.
#[derive(Debug)]
pub struct LoadedConfig {
    config: ConfigDocument,
    log: LogSink,
}

impl LoadedConfig {
    /// The validated document.
    pub fn config(&self) -> &ConfigDocument {
        &self.config
    }

    /// The sink every pipeline stage should log through.
    pub fn log(&self) -> &LogSink {
        &self.log
    }

    /// Split into document and sink, for handing them to different owners.
    pub fn into_parts(self) -> (ConfigDocument, LogSink) {
        (self.config, self.log)
    }
}

impl ops::Index<&str> for LoadedConfig {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.config[key]
    }
}

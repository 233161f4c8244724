//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use segstream::CapabilityProbe;
use tempfile::TempDir;

/// Capability probe with scripted answers.
pub struct FakeProbe {
    pub ftp: bool,
    pub scp: bool,
    pub s3: bool,
}

impl FakeProbe {
    pub const fn all() -> Self {
        Self {
            ftp: true,
            scp: true,
            s3: true,
        }
    }
}

impl CapabilityProbe for FakeProbe {
    fn can_ftp(&self) -> bool {
        self.ftp
    }

    fn can_scp(&self) -> bool {
        self.scp
    }

    fn can_s3(&self) -> bool {
        self.s3
    }
}

/// On-disk pipeline workspace: a writable temp directory and a readable
/// input file, plus helpers to lay config files down next to them.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.ts");
        fs::write(&input, b"mpegts").unwrap();
        Self { dir, input }
    }

    /// A complete valid document wired to this workspace's paths. Tests
    /// derive broken variants with `str::replace` or by appending
    /// sections.
    pub fn valid_yaml(&self) -> String {
        format!(
            "log_level: INFO\n\
             temp_dir: \"{temp}\"\n\
             input_location: \"{input}\"\n\
             segment_length: 10\n\
             encoding_profile: ep_low\n\
             transfer_profile: tp_main\n\
             ep_low:\n  bandwidth: 240\n  video_codec: libx264\n\
             tp_main:\n  transfer_type: copy\n  directory: /srv/segments\n",
            temp = self.dir.path().display(),
            input = self.input.display(),
        )
    }

    /// The `input_location` line as it appears in [`Self::valid_yaml`].
    pub fn input_line(&self) -> String {
        format!("input_location: \"{}\"", self.input.display())
    }

    /// Write `yaml` to a config file inside the workspace.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.dir.path().join("pipeline.yaml");
        fs::write(&path, yaml).unwrap();
        path
    }
}

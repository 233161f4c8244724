use std::env;
use std::path::Path;

use crate::domain::ports::CapabilityProbe;

/// Capability probe backed by the running system.
///
/// The ftp, scp, and s3 transfer stages shell out to external client
/// tools, so a mechanism is usable exactly when its client is on `PATH`:
/// `curl` for ftp uploads, `scp` for scp, and the `aws` CLI for s3.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCapabilities;

impl SystemCapabilities {
    /// Create a probe over the current process environment.
    pub const fn new() -> Self {
        Self
    }
}

impl CapabilityProbe for SystemCapabilities {
    fn can_ftp(&self) -> bool {
        binary_on_path("curl")
    }

    fn can_scp(&self) -> bool {
        binary_on_path("scp")
    }

    fn can_s3(&self) -> bool {
        binary_on_path("aws")
    }
}

/// Whether an executable named `name` exists in any `PATH` entry.
fn binary_on_path(name: &str) -> bool {
    let Some(path) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path).any(|dir| is_executable(&dir.join(name)))
}

#[cfg(unix)]
fn is_executable(candidate: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    candidate
        .metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(candidate: &Path) -> bool {
    candidate.is_file()
}

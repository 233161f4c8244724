//! Port traits implemented by the infrastructure layer.

/// Capability queries answered by the transfer subsystem.
///
/// Each query reports whether the optional runtime dependencies for one
/// transfer mechanism are present in the current environment. Injected into
/// validation so unavailable-mechanism paths can be exercised with fakes
/// instead of requiring the real tooling to be installed.
pub trait CapabilityProbe {
    /// Whether ftp transfers can be performed.
    fn can_ftp(&self) -> bool;

    /// Whether scp transfers can be performed.
    fn can_scp(&self) -> bool;

    /// Whether s3 uploads can be performed.
    fn can_s3(&self) -> bool;
}

//! Hardware identifier inventory
//!
//! The platform-specific side of detection: collecting raw hardware
//! identifiers (SMBIOS/DMI UUIDs) from the host. The source sits behind a
//! narrow trait so the classifier and orchestrator stay platform-independent
//! and unit-testable without real hardware access or elevated privileges.

use crate::errors::AppResult;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Default sysfs locations for the SMBIOS/DMI product UUID.
/// `/sys/hypervisor/uuid` exists on Xen guests (the older EC2 instance
/// families); the DMI path covers Nitro-era hardware.
pub const DEFAULT_SMBIOS_PATHS: &[&str] =
    &["/sys/hypervisor/uuid", "/sys/class/dmi/id/product_uuid"];

/// Source of zero or more raw hardware identifier strings
pub trait IdentifierSource {
    /// Collect the raw identifiers currently visible on this platform.
    fn identifiers(&self) -> AppResult<Vec<String>>;
}

/// Reads SMBIOS/DMI identifiers from sysfs
pub struct SmbiosSource {
    paths: Vec<PathBuf>,
}

impl SmbiosSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl Default for SmbiosSource {
    fn default() -> Self {
        Self::new(DEFAULT_SMBIOS_PATHS.iter().map(PathBuf::from).collect())
    }
}

impl IdentifierSource for SmbiosSource {
    fn identifiers(&self) -> AppResult<Vec<String>> {
        let mut identifiers = Vec::new();
        for path in &self.paths {
            // A missing or unreadable entry is normal on most hardware
            match fs::read_to_string(path) {
                Ok(raw) => {
                    let trimmed = raw.trim();
                    if !trimmed.is_empty() {
                        identifiers.push(trimmed.to_string());
                    }
                }
                Err(e) => {
                    debug!("skipping {}: {}", path.display(), e);
                }
            }
        }
        Ok(identifiers)
    }
}

/// Fixed in-memory identifier list, the injectable counterpart of
/// `SmbiosSource` for tests and embedding callers that already hold the
/// identifiers.
pub struct StaticSource {
    identifiers: Vec<String>,
}

impl StaticSource {
    pub fn new(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }
}

impl IdentifierSource for StaticSource {
    fn identifiers(&self) -> AppResult<Vec<String>> {
        Ok(self.identifiers.clone())
    }
}

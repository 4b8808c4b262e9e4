//! Optional process-wide registry.
//!
//! Hosts that want a single registry for the whole process install it once
//! at startup and read it from anywhere afterwards. Installation happens
//! exactly once; the value is read-only for the process lifetime and holds
//! no external resources, so there is no teardown.

use std::sync::OnceLock;

use thiserror::Error;

use crate::registry::PluginRegistry;

static GLOBAL: OnceLock<PluginRegistry> = OnceLock::new();

/// Errors from installing the process-wide registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InstallError {
    /// A registry was already installed for this process.
    #[error("a plugin registry is already installed for this process")]
    AlreadyInstalled,
}

/// Install the process-wide registry.
///
/// Call once at startup, before anything reads [`global`]. A second call
/// fails and leaves the first installation in place.
pub fn install_global(registry: PluginRegistry) -> Result<(), InstallError> {
    GLOBAL
        .set(registry)
        .map_err(|_| InstallError::AlreadyInstalled)
}

/// The process-wide registry, if one has been installed.
pub fn global() -> Option<&'static PluginRegistry> {
    GLOBAL.get()
}

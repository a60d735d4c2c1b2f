//! Platform-specific permission implementations.

#[cfg(target_os = "android")]
pub mod android;

use crate::{Permission, PermissionError, PermissionGate, PermissionStatus};

/// Gate for platforms without runtime notification permissions.
///
/// Every query reports [`PermissionError::NotSupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedGate;

impl PermissionGate for UnsupportedGate {
    fn status(&self, _permission: Permission) -> Result<PermissionStatus, PermissionError> {
        Err(PermissionError::NotSupported)
    }

    fn request(&self, _permission: Permission) -> Result<(), PermissionError> {
        Err(PermissionError::NotSupported)
    }
}

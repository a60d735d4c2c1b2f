//! Runtime permission handling for Android notifications.
//!
//! Starting with API level 33 ("Tiramisu") an app has to hold
//! `POST_NOTIFICATIONS` before anything it posts becomes visible. The
//! [`PermissionGate`] trait checks the grant and asks for it when missing;
//! [`sys::android::AndroidPermissionGate`] binds it to an Android activity.

#![warn(missing_docs)]

/// Platform-specific implementations.
pub mod sys;

use thiserror::Error;

/// API level that introduced runtime consent for notifications.
pub const TIRAMISU: i32 = 33;

/// Request code passed to `Activity.requestPermissions`.
pub const REQUEST_CODE: i32 = 101;

/// Permissions this crate knows how to check and request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Permission {
    /// Posting notifications (`android.permission.POST_NOTIFICATIONS`).
    PostNotifications,
}

impl Permission {
    /// Fully qualified manifest name of the permission.
    #[must_use]
    pub const fn manifest_name(self) -> &'static str {
        match self {
            Self::PostNotifications => "android.permission.POST_NOTIFICATIONS",
        }
    }

    /// Lowest API level on which the permission must be granted at runtime.
    #[must_use]
    pub const fn min_api_level(self) -> i32 {
        match self {
            Self::PostNotifications => TIRAMISU,
        }
    }

    /// Whether the permission needs a runtime grant on the given API level.
    #[must_use]
    pub const fn is_runtime(self, api_level: i32) -> bool {
        api_level >= self.min_api_level()
    }
}

/// The current status of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    /// Permission has been granted by the user.
    Granted,
    /// Permission has not been granted (yet).
    Denied,
    /// The platform version does not gate this permission at runtime.
    NotRequired,
}

impl PermissionStatus {
    /// Whether the app may act as if the permission is held.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted | Self::NotRequired)
    }
}

/// Errors that can occur when checking or requesting permissions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Permissions cannot be queried on this platform.
    #[error("permission not supported on this platform")]
    NotSupported,
    /// The platform call failed.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Checks and requests runtime permissions.
pub trait PermissionGate {
    /// Current status of `permission`, without prompting the user.
    ///
    /// # Errors
    /// Returns a [`PermissionError`] if the platform cannot be queried.
    fn status(&self, permission: Permission) -> Result<PermissionStatus, PermissionError>;

    /// Ask the platform to prompt the user for `permission`.
    ///
    /// The answer arrives asynchronously on the platform side; this only
    /// issues the request.
    ///
    /// # Errors
    /// Returns a [`PermissionError`] if the request could not be issued.
    fn request(&self, permission: Permission) -> Result<(), PermissionError>;

    /// Request `permission` if, and only if, it is not held yet.
    ///
    /// Returns the status observed before any request was made. Calling this
    /// when the permission is already granted does nothing.
    ///
    /// # Errors
    /// Returns a [`PermissionError`] if the status check or the request fails.
    fn ensure_permission(
        &self,
        permission: Permission,
    ) -> Result<PermissionStatus, PermissionError> {
        let status = self.status(permission)?;
        if status.is_granted() {
            return Ok(status);
        }

        log::info!("requesting {}", permission.manifest_name());
        self.request(permission)?;
        Ok(status)
    }

    /// Whether `permission` is currently held. Query failures count as "no".
    fn has_permission(&self, permission: Permission) -> bool {
        matches!(self.status(permission), Ok(status) if status.is_granted())
    }
}

impl<T: PermissionGate + ?Sized> PermissionGate for &T {
    fn status(&self, permission: Permission) -> Result<PermissionStatus, PermissionError> {
        (**self).status(permission)
    }

    fn request(&self, permission: Permission) -> Result<(), PermissionError> {
        (**self).request(permission)
    }
}

//! Icon and image resolution.
//!
//! Each helper returns or records a [`Diagnostic`] instead of failing, so a
//! broken image only costs the feature it was meant for.

use crate::diagnostics::{Diagnostic, Diagnostics, ImagePurpose};
use crate::host::{NotificationHost, SmallIcon};
use std::fmt;
use std::path::{Path, PathBuf};

/// A `file://` URI for an image that existed when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUri {
    path: PathBuf,
}

impl ImageUri {
    /// Absolute path on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ImageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file://{}", self.path.display())
    }
}

/// Resolve `relative_path` against `app_root` into a file URI.
///
/// # Errors
/// Returns [`Diagnostic::ImageNotFound`] if nothing exists at the joined path.
pub fn resolve_image_uri(
    app_root: &Path,
    relative_path: impl AsRef<Path>,
    purpose: ImagePurpose,
) -> Result<ImageUri, Diagnostic> {
    let path = app_root.join(relative_path);
    if path.exists() {
        Ok(ImageUri { path })
    } else {
        Err(Diagnostic::ImageNotFound { purpose, path })
    }
}

/// Resolve an optional path; an empty path means the feature is not wanted.
pub(crate) fn resolve_optional(
    app_root: &Path,
    relative_path: &str,
    purpose: ImagePurpose,
    diagnostics: &mut Diagnostics,
) -> Option<ImageUri> {
    if relative_path.is_empty() {
        return None;
    }
    resolve_image_uri(app_root, relative_path, purpose)
        .map_err(|diagnostic| diagnostics.record(diagnostic))
        .ok()
}

/// Decode the application icon for use as a large icon.
///
/// `None` when the icon cannot be decoded, e.g. adaptive icons that are not
/// backed by a bitmap.
pub(crate) fn resolve_app_icon_bitmap<H: NotificationHost>(
    host: &H,
    diagnostics: &mut Diagnostics,
) -> Option<H::Bitmap> {
    match host.app_icon_bitmap() {
        Ok(bitmap) => Some(bitmap),
        Err(err) => {
            diagnostics.record(Diagnostic::IconDecode(format!("app icon: {err}")));
            None
        }
    }
}

/// Attach the custom small icon, falling back to the application icon.
pub(crate) fn insert_small_icon<H: NotificationHost>(
    host: &H,
    builder: &mut H::Builder,
    app_root: &Path,
    custom_path: &str,
    diagnostics: &mut Diagnostics,
) {
    if !custom_path.is_empty() {
        let attached = resolve_image_uri(app_root, custom_path, ImagePurpose::SmallIcon)
            .and_then(|uri| {
                host.decode_bitmap(&uri)
                    .map_err(|err| Diagnostic::IconDecode(format!("{uri}: {err}")))
            })
            .and_then(|bitmap| {
                host.set_small_icon(builder, SmallIcon::Bitmap(&bitmap))
                    .map_err(|err| Diagnostic::IconDecode(format!("small icon: {err}")))
            });
        match attached {
            Ok(()) => return,
            Err(diagnostic) => diagnostics.record(diagnostic),
        }
    }

    if let Err(err) = host.set_small_icon(builder, SmallIcon::AppDefault) {
        diagnostics.record(Diagnostic::Builder(format!("default small icon: {err}")));
    }
}

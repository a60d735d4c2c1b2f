//! The host notification service the dispatcher drives.
//!
//! [`NotificationHost`] is the only surface the dispatcher touches. The
//! Android binding lives in [`crate::sys::android`]; tests plug in an
//! in-memory host.

use crate::channel::Channel;
use crate::id::NotificationId;
use crate::resolve::ImageUri;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a host binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A JNI call failed or threw.
    #[error("JNI error: {0}")]
    Jni(String),
    /// An image could not be decoded into a bitmap.
    #[error("decode failed: {0}")]
    Decode(String),
    /// The host service is not available in this process.
    #[error("host unavailable: {0}")]
    Unavailable(String),
}

/// Notification priority, mirroring `Notification.PRIORITY_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// Lowest priority.
    Min,
    /// Below default.
    Low,
    /// Platform default.
    #[default]
    Default,
    /// Above default; may peek on screen.
    High,
    /// Highest priority.
    Max,
}

impl Priority {
    /// Platform integer value of this priority.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Min => -2,
            Self::Low => -1,
            Self::Default => 0,
            Self::High => 1,
            Self::Max => 2,
        }
    }
}

/// Small icon to attach to a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallIcon<'a, B> {
    /// The application's own icon resource.
    AppDefault,
    /// An icon created from a decoded bitmap.
    Bitmap(&'a B),
}

/// Expanded presentation style to attach to a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style<'a, B> {
    /// One long block of text.
    BigText(&'a str),
    /// One row per line.
    Inbox(&'a [String]),
    /// A large image.
    BigPicture(&'a B),
}

/// Capabilities of the platform notification service.
///
/// Builders and bitmaps are opaque handles owned by the host. Every call may
/// fail; the dispatcher downgrades failures instead of propagating them.
pub trait NotificationHost {
    /// Handle to a notification builder under construction.
    type Builder;
    /// Handle to a decoded bitmap.
    type Bitmap;

    /// Platform API level (`Build.VERSION.SDK_INT`).
    fn api_level(&self) -> i32;

    /// Directory relative image paths are resolved against.
    fn app_root(&self) -> PathBuf;

    /// Create `channel`, or leave an existing channel with the same id as is.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the platform rejects the channel.
    fn create_channel(&self, channel: &Channel) -> Result<(), HostError>;

    /// Start a builder that posts to `channel_id`.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the builder cannot be created.
    fn new_builder(&self, channel_id: &str) -> Result<Self::Builder, HostError>;

    /// Set title and body text.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the builder rejects the text.
    fn set_content(
        &self,
        builder: &mut Self::Builder,
        title: &str,
        text: &str,
    ) -> Result<(), HostError>;

    /// Enable the default sound, vibration and lights, and set `priority`.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the builder rejects either setting.
    fn set_alerts(&self, builder: &mut Self::Builder, priority: Priority) -> Result<(), HostError>;

    /// Set the status bar icon.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the icon cannot be attached.
    fn set_small_icon(
        &self,
        builder: &mut Self::Builder,
        icon: SmallIcon<'_, Self::Bitmap>,
    ) -> Result<(), HostError>;

    /// Set the image shown next to the text.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the bitmap cannot be attached.
    fn set_large_icon(
        &self,
        builder: &mut Self::Builder,
        bitmap: &Self::Bitmap,
    ) -> Result<(), HostError>;

    /// Replace the builder's expanded style with `style`.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the style cannot be built or attached.
    fn set_style(
        &self,
        builder: &mut Self::Builder,
        style: Style<'_, Self::Bitmap>,
    ) -> Result<(), HostError>;

    /// Decode the image at `uri`.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the stream cannot be opened or decoded.
    fn decode_bitmap(&self, uri: &ImageUri) -> Result<Self::Bitmap, HostError>;

    /// Decode the application's own icon resource.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the resource is not a decodable bitmap.
    fn app_icon_bitmap(&self) -> Result<Self::Bitmap, HostError>;

    /// Build the notification and post it under `id`.
    ///
    /// # Errors
    /// Returns a [`HostError`] if building or posting fails.
    fn notify(&self, id: NotificationId, builder: Self::Builder) -> Result<(), HostError>;
}

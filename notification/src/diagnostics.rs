//! Failures a send recovers from.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which image a path was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImagePurpose {
    /// Custom small icon.
    SmallIcon,
    /// Large icon next to the text.
    LargeIcon,
    /// Expanded big picture.
    BigPicture,
}

impl fmt::Display for ImagePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SmallIcon => "small icon",
            Self::LargeIcon => "large icon",
            Self::BigPicture => "big picture",
        })
    }
}

/// A failure that was caught, logged and downgraded during a send.
///
/// None of these stop delivery; they only remove the feature they concern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Not running on Android; nothing was sent.
    #[error("notifications are only delivered on Android, skipping send")]
    PlatformUnsupported,
    /// Checking or requesting the notification permission failed.
    #[error("notification permission request failed: {0}")]
    PermissionRequest(String),
    /// The host refused to create the channel.
    #[error("failed to create channel `{channel_id}`: {message}")]
    Channel {
        /// Id of the channel that could not be created.
        channel_id: String,
        /// Host error message.
        message: String,
    },
    /// A supplied image path does not exist under the application root.
    #[error("{purpose} image not found at {}", .path.display())]
    ImageNotFound {
        /// What the image was for.
        purpose: ImagePurpose,
        /// Absolute path that was checked.
        path: PathBuf,
    },
    /// An icon could not be decoded or attached.
    #[error("failed to decode icon: {0}")]
    IconDecode(String),
    /// A presentation style could not be applied.
    #[error("failed to apply notification style: {0}")]
    StyleApplication(String),
    /// A legacy input was supplied; it has no effect.
    #[error("`{parameter}` is deprecated, use {replacement}")]
    Deprecated {
        /// Name of the legacy input.
        parameter: &'static str,
        /// Inputs to use instead.
        replacement: &'static str,
    },
    /// Title, text, defaults or priority could not be set.
    #[error("failed to configure notification: {0}")]
    Builder(String),
    /// The notification could not be built or handed to the host.
    #[error("failed to deliver notification: {0}")]
    Delivery(String),
}

impl Diagnostic {
    /// Level the diagnostic is logged at when recorded.
    pub(crate) const fn level(&self) -> log::Level {
        match self {
            Self::PlatformUnsupported => log::Level::Info,
            _ => log::Level::Warn,
        }
    }
}

/// Diagnostics collected over one send; each entry is logged when recorded.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        log::log!(diagnostic.level(), "{diagnostic}");
        self.0.push(diagnostic);
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

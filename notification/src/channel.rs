//! Notification channels.

/// Channel name used when the caller does not pick one.
pub const DEFAULT_CHANNEL_NAME: &str = "Default Channel";

/// Channel id used when the caller does not pick one.
pub const DEFAULT_CHANNEL_ID: &str = "default_channel";

/// API level that introduced notification channels (Oreo).
pub const CHANNELS_MIN_API_LEVEL: i32 = 26;

/// Importance of a channel, mirroring `NotificationManager.IMPORTANCE_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    /// Never shown.
    None,
    /// Shown only in the shade, below the fold.
    Min,
    /// Shown everywhere, never makes noise.
    Low,
    /// Shown everywhere, makes noise.
    #[default]
    Default,
    /// Makes noise and peeks on screen.
    High,
}

impl Importance {
    /// Platform integer value of this importance.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Min => 1,
            Self::Low => 2,
            Self::Default => 3,
            Self::High => 4,
        }
    }
}

/// A delivery channel notifications are posted to.
///
/// The host deduplicates channels by id, so creating the same channel
/// repeatedly is an upsert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Channel {
    /// Stable identifier.
    pub id: String,
    /// Name shown in system settings.
    pub name: String,
    /// Importance applied on first creation.
    pub importance: Importance,
}

impl Channel {
    /// Create a channel description.
    pub fn new(id: impl Into<String>, name: impl Into<String>, importance: Importance) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            importance,
        }
    }
}

/// Derive a channel id from a display name: spaces become `_`, then lower-cased.
#[must_use]
pub fn derive_channel_id(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// The explicit id when present, otherwise one derived from `name`.
#[must_use]
pub fn resolve_channel_id(explicit: &str, name: &str) -> String {
    if explicit.is_empty() {
        derive_channel_id(name)
    } else {
        explicit.to_owned()
    }
}

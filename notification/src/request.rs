//! What to post.

use crate::channel::{
    Channel, DEFAULT_CHANNEL_ID, DEFAULT_CHANNEL_NAME, Importance, resolve_channel_id,
};
use crate::diagnostics::Diagnostic;
use serde::Deserialize;

/// A single notification to post.
///
/// Built with [`NotificationRequest::new`] and the chained setters, or
/// deserialized from JSON where every field except `title` and `message` is
/// optional. Empty strings mean "not set" for every optional path and text.
///
/// ```
/// use droidnotify_notification::NotificationRequest;
///
/// let request = NotificationRequest::new("Download finished", "report.pdf")
///     .channel_name("Downloads")
///     .big_text("report.pdf was saved to the Downloads folder.");
/// assert_eq!(request.channel().id, "default_channel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationRequest {
    title: String,
    message: String,
    #[serde(default = "default_channel_name")]
    channel_name: String,
    #[serde(default = "default_channel_id")]
    channel_id: String,
    #[serde(default)]
    custom_app_icon_path: String,
    #[serde(default)]
    big_picture_path: String,
    #[serde(default)]
    large_icon_path: String,
    #[serde(default)]
    big_text: String,
    #[serde(default)]
    lines: String,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    img_path: Option<String>,
}

fn default_channel_name() -> String {
    DEFAULT_CHANNEL_NAME.to_owned()
}

fn default_channel_id() -> String {
    DEFAULT_CHANNEL_ID.to_owned()
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            channel_name: default_channel_name(),
            channel_id: default_channel_id(),
            custom_app_icon_path: String::new(),
            big_picture_path: String::new(),
            large_icon_path: String::new(),
            big_text: String::new(),
            lines: String::new(),
            style: None,
            img_path: None,
        }
    }
}

impl NotificationRequest {
    /// A plain notification on the default channel.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Parse a request from JSON.
    ///
    /// # Errors
    /// Returns the parse error if `json` is not a valid request object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Display name of the channel.
    #[must_use]
    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = name.into();
        self
    }

    /// Channel id. An empty id is derived from the channel name.
    #[must_use]
    pub fn channel_id(mut self, id: impl Into<String>) -> Self {
        self.channel_id = id.into();
        self
    }

    /// Small icon image, relative to the application root.
    #[must_use]
    pub fn custom_app_icon(mut self, path: impl Into<String>) -> Self {
        self.custom_app_icon_path = path.into();
        self
    }

    /// Image shown expanded below the text, relative to the application root.
    #[must_use]
    pub fn big_picture(mut self, path: impl Into<String>) -> Self {
        self.big_picture_path = path.into();
        self
    }

    /// Image shown next to the text, relative to the application root.
    #[must_use]
    pub fn large_icon(mut self, path: impl Into<String>) -> Self {
        self.large_icon_path = path.into();
        self
    }

    /// Long body shown when expanded. Takes precedence over [`lines`](Self::lines).
    #[must_use]
    pub fn big_text(mut self, text: impl Into<String>) -> Self {
        self.big_text = text.into();
        self
    }

    /// Newline-delimited lines shown in inbox layout when expanded.
    #[must_use]
    pub fn lines(mut self, lines: impl Into<String>) -> Self {
        self.lines = lines.into();
        self
    }

    /// Legacy style selector. Has no effect besides a diagnostic.
    #[deprecated(note = "use `big_picture` or `big_text`")]
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Legacy image path. Has no effect besides a diagnostic.
    #[deprecated(note = "use `large_icon` or `big_picture`")]
    #[must_use]
    pub fn img_path(mut self, path: impl Into<String>) -> Self {
        self.img_path = Some(path.into());
        self
    }

    /// Notification title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Notification body text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The channel this request posts to, always at high importance.
    #[must_use]
    pub fn channel(&self) -> Channel {
        Channel::new(
            resolve_channel_id(&self.channel_id, &self.channel_name),
            self.channel_name.clone(),
            Importance::High,
        )
    }

    /// Custom small icon path, empty when unset.
    #[must_use]
    pub fn custom_app_icon_path(&self) -> &str {
        &self.custom_app_icon_path
    }

    /// Big picture path, empty when unset.
    #[must_use]
    pub fn big_picture_path(&self) -> &str {
        &self.big_picture_path
    }

    /// Large icon path, empty when unset.
    #[must_use]
    pub fn large_icon_path(&self) -> &str {
        &self.large_icon_path
    }

    /// Big text body, empty when unset.
    #[must_use]
    pub fn big_text_body(&self) -> &str {
        &self.big_text
    }

    /// Raw newline-delimited inbox lines, empty when unset.
    #[must_use]
    pub fn raw_lines(&self) -> &str {
        &self.lines
    }

    /// One diagnostic per legacy input that was supplied.
    pub(crate) fn deprecations(&self) -> impl Iterator<Item = Diagnostic> {
        let img_path = self
            .img_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|_| Diagnostic::Deprecated {
                parameter: "img_path",
                replacement: "large_icon_path or big_picture_path",
            });
        let style = self
            .style
            .as_deref()
            .filter(|style| !style.is_empty())
            .map(|_| Diagnostic::Deprecated {
                parameter: "style",
                replacement: "big_picture_path or big_text",
            });
        img_path.into_iter().chain(style)
    }
}

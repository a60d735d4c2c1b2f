//! Text presentation style selection.

use crate::host::Style;
use crate::request::NotificationRequest;

/// The single text style a request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextStyle {
    /// Long body text.
    BigText(String),
    /// One row per line.
    Inbox(Vec<String>),
}

impl TextStyle {
    /// Pick the text style for `request`: big text wins over lines, and
    /// neither yields `None`.
    ///
    /// Lines are split on `\n` as given; empty rows are kept.
    #[must_use]
    pub fn select(request: &NotificationRequest) -> Option<Self> {
        let big_text = request.big_text_body();
        let lines = request.raw_lines();

        if !big_text.is_empty() {
            Some(Self::BigText(big_text.to_owned()))
        } else if !lines.is_empty() {
            Some(Self::Inbox(lines.split('\n').map(str::to_owned).collect()))
        } else {
            None
        }
    }

    /// Borrow as a host style.
    #[must_use]
    pub fn as_style<B>(&self) -> Style<'_, B> {
        match self {
            Self::BigText(text) => Style::BigText(text),
            Self::Inbox(lines) => Style::Inbox(lines),
        }
    }
}

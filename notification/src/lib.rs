//! Best-effort Android notifications.
//!
//! [`Dispatcher`] turns a [`NotificationRequest`] into a posted notification:
//! it asks for the notification permission, makes sure the channel exists,
//! attaches icons and an expanded style, and posts the result under a random
//! [`NotificationId`]. Anything that goes wrong after the platform check is
//! logged and reported as a [`Diagnostic`], never returned as an error.
//!
//! ```no_run
//! use droidnotify_notification::{Dispatcher, NotificationRequest, NotifyConfig, UnsupportedHost};
//! use droidnotify_permission::sys::UnsupportedGate;
//!
//! let dispatcher = Dispatcher::new(NotifyConfig::detect(), UnsupportedHost, UnsupportedGate);
//! let request = NotificationRequest::new("Build finished", "All 128 tests passed")
//!     .channel_name("Builds")
//!     .channel_id("")
//!     .lines("unit: 112\nintegration: 16");
//! let _id = dispatcher.send(&request);
//! ```

#![warn(missing_docs)]

mod channel;
mod config;
mod diagnostics;
mod dispatcher;
mod host;
mod id;
mod request;
mod resolve;
mod style;

/// Platform-specific implementations.
pub mod sys;

pub use channel::{
    CHANNELS_MIN_API_LEVEL, Channel, DEFAULT_CHANNEL_ID, DEFAULT_CHANNEL_NAME, Importance,
    derive_channel_id, resolve_channel_id,
};
pub use config::NotifyConfig;
pub use diagnostics::{Diagnostic, ImagePurpose};
pub use dispatcher::{Dispatcher, SendOutcome, send};
pub use host::{HostError, NotificationHost, Priority, SmallIcon, Style};
pub use id::{ID_RANGE, IdSource, NotificationId, RandomIds};
pub use request::NotificationRequest;
pub use resolve::{ImageUri, resolve_image_uri};
pub use style::TextStyle;
pub use sys::UnsupportedHost;

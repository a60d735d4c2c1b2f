//! # Droidnotify
//!
//! Best-effort local notifications for Android apps written in Rust.
//!
//! A send asks for the notification permission, creates the channel, attaches
//! icons and an expanded style, and posts the notification under a random id.
//! Failures along the way are logged and reported, never raised, so a broken
//! image costs only the picture and not the notification.
//!
//! ## Features
//!
//! - `notification`: Building and posting notifications.
//! - `permission`: The `POST_NOTIFICATIONS` runtime permission.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! droidnotify = { version = "0.1", features = ["notification"] }
//! ```
//!
//! ```rust,ignore
//! use droidnotify::notification::{NotificationRequest, sys::android};
//!
//! fn notify(env: &mut jni::JNIEnv, activity: &jni::objects::JObject) {
//!     let Ok(dispatcher) = android::dispatcher(env, activity) else { return };
//!     let request = NotificationRequest::new("Download complete", "report.pdf")
//!         .big_picture("assets/preview.png");
//!     let _id = dispatcher.send(&request);
//! }
//! ```

#[cfg(feature = "notification")]
pub use droidnotify_notification as notification;

#[cfg(feature = "permission")]
pub use droidnotify_permission as permission;

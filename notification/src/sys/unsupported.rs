//! Stand-in host for platforms without a notification binding.

use crate::channel::Channel;
use crate::host::{HostError, NotificationHost, Priority, SmallIcon, Style};
use crate::id::NotificationId;
use crate::resolve::ImageUri;
use std::path::PathBuf;

const REASON: &str = "no notification service on this platform";

/// Host whose every capability reports [`HostError::Unavailable`].
///
/// Lets code that builds a [`Dispatcher`](crate::Dispatcher) compile and run
/// off-device; with a detected configuration the dispatcher never reaches it.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedHost;

fn unavailable<T>() -> Result<T, HostError> {
    Err(HostError::Unavailable(REASON.to_owned()))
}

impl NotificationHost for UnsupportedHost {
    type Builder = ();
    type Bitmap = ();

    fn api_level(&self) -> i32 {
        0
    }

    fn app_root(&self) -> PathBuf {
        PathBuf::from("./")
    }

    fn create_channel(&self, _channel: &Channel) -> Result<(), HostError> {
        unavailable()
    }

    fn new_builder(&self, _channel_id: &str) -> Result<(), HostError> {
        unavailable()
    }

    fn set_content(&self, _: &mut (), _title: &str, _text: &str) -> Result<(), HostError> {
        unavailable()
    }

    fn set_alerts(&self, _: &mut (), _priority: Priority) -> Result<(), HostError> {
        unavailable()
    }

    fn set_small_icon(&self, _: &mut (), _icon: SmallIcon<'_, ()>) -> Result<(), HostError> {
        unavailable()
    }

    fn set_large_icon(&self, _: &mut (), _bitmap: &()) -> Result<(), HostError> {
        unavailable()
    }

    fn set_style(&self, _: &mut (), _style: Style<'_, ()>) -> Result<(), HostError> {
        unavailable()
    }

    fn decode_bitmap(&self, _uri: &ImageUri) -> Result<(), HostError> {
        unavailable()
    }

    fn app_icon_bitmap(&self) -> Result<(), HostError> {
        unavailable()
    }

    fn notify(&self, _id: NotificationId, _builder: ()) -> Result<(), HostError> {
        unavailable()
    }
}

//! Platform bindings for [`NotificationHost`](crate::NotificationHost).

#[cfg(target_os = "android")]
pub mod android;
#[cfg(target_os = "android")]
pub use android::AndroidHost;

mod unsupported;
pub use unsupported::UnsupportedHost;

/// Run `close` whatever `result` holds; an error in `result` wins over one
/// from `close`.
#[cfg(any(target_os = "android", test))]
pub(crate) fn close_after<T, E>(
    result: Result<T, E>,
    close: impl FnOnce() -> Result<(), E>,
) -> Result<T, E> {
    let closed = close();
    let value = result?;
    closed.map(|()| value)
}

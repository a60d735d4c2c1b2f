//! Notification identifiers.

use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;

/// Range identifiers are drawn from.
pub const ID_RANGE: RangeInclusive<i32> = 1..=1000;

/// Identifier a notification was posted under.
///
/// Drawn at random from [`ID_RANGE`]; two sends may receive the same id, in
/// which case the platform decides how the second notification is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(i32);

impl NotificationId {
    /// Wrap a raw platform id.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw id passed to `NotificationManager.notify`.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Source of identifiers for new notifications.
pub trait IdSource {
    /// Produce the id for the next notification.
    fn next_id(&self) -> NotificationId;
}

impl<F> IdSource for F
where
    F: Fn() -> NotificationId,
{
    fn next_id(&self) -> NotificationId {
        self()
    }
}

/// Uniformly random ids from [`ID_RANGE`], no collision avoidance.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> NotificationId {
        NotificationId(rand::rng().random_range(ID_RANGE))
    }
}

//! Per-screen view state
//!
//! Each screen is a plain value the UI keeps in a signal. Loads follow the
//! same two-step shape everywhere: `begin_load` moves the screen to
//! [`Phase::Loading`] and returns a [`Ticket`](crate::scope::Ticket); `settle`
//! commits the outcome if the ticket is still current.

mod artist;
mod catalogue;
mod nav;

pub use artist::{ArtistScreen, DetailTab, DETAIL_FAILED_MESSAGE};
pub use catalogue::{CatalogueScreen, LIST_FAILED_MESSAGE};
pub use nav::NavMenu;

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for notification ids, so a timed dismissal only clears its own toast.
static NOTIFICATION_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<T> {
    Loading,
    Ready(T),
    /// The fetch failed. No data is kept.
    Failed,
}

impl<T> Default for Phase<T> {
    fn default() -> Self {
        Phase::Loading
    }
}

impl<T> Phase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Phase::Failed)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Phase::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A transient, user-visible message about a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: NOTIFICATION_ID_COUNTER.fetch_add(1, Ordering::Relaxed) + 1,
            message: message.into(),
        }
    }
}

/// Clear `slot` only if it still holds notification `id`.
fn dismiss(slot: &mut Option<Notification>, id: u64) -> bool {
    if slot.as_ref().is_some_and(|n| n.id == id) {
        *slot = None;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_defaults_to_loading() {
        let phase: Phase<u8> = Phase::default();
        assert!(phase.is_loading());
        assert_eq!(phase.ready(), None);
    }

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::new("a");
        let b = Notification::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn dismiss_ignores_other_ids() {
        let first = Notification::new("first");
        let second = Notification::new("second");
        let mut slot = Some(second.clone());

        assert!(!dismiss(&mut slot, first.id));
        assert_eq!(slot.as_ref(), Some(&second));
        assert!(dismiss(&mut slot, second.id));
        assert_eq!(slot, None);
    }
}

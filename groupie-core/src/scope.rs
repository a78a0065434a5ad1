//! Task scopes for stale-result suppression
//!
//! A screen instance owns one [`TaskScope`]. Every fetch wave takes a
//! [`Ticket`] from it before issuing requests, and hands the ticket back when
//! committing the result. A ticket stops being current when a newer one is
//! issued or when the scope is cancelled on teardown; commits with a stale
//! ticket are dropped.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct ScopeState {
    generation: AtomicU64,
    cancelled: AtomicBool,
}

/// Cloning shares the same scope.
#[derive(Debug, Clone, Default)]
pub struct TaskScope {
    state: Arc<ScopeState>,
}

/// Permission to commit the result of one fetch wave.
#[derive(Debug, Clone)]
pub struct Ticket {
    state: Arc<ScopeState>,
    generation: u64,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new wave, superseding every earlier ticket.
    pub fn issue(&self) -> Ticket {
        let generation = self.state.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            state: self.state.clone(),
            generation,
        }
    }

    /// Tear the scope down. No ticket from it will be current again.
    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        !self.state.cancelled.load(Ordering::SeqCst)
            && self.state.generation.load(Ordering::SeqCst) == self.generation
    }
}

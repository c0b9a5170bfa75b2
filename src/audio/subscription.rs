use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::TrackId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub generation: u64,
    pub track_id: TrackId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayRequest {
    pub ticket: Ticket,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub ticket: Ticket,
    pub ended: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Listeners {
    active: Arc<Mutex<Option<Listener>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, ticket: Ticket) -> Subscription {
        *self.lock() = Some(Listener {
            ticket,
            ended: false,
        });
        Subscription {
            listeners: self.clone(),
            ticket,
        }
    }

    pub fn current(&self) -> Option<Ticket> {
        self.lock().map(|l| l.ticket)
    }

    pub fn with_active<R>(&self, f: impl FnOnce(&mut Listener) -> R) -> Option<R> {
        self.lock().as_mut().map(f)
    }

    fn lock(&self) -> MutexGuard<'_, Option<Listener>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Registration guard; dropping it unregisters the listener unless a newer
/// ticket already replaced it.
#[derive(Debug)]
#[must_use = "dropping a subscription unregisters it"]
pub struct Subscription {
    listeners: Listeners,
    ticket: Ticket,
}

impl Subscription {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut slot = self.listeners.lock();
        if slot.is_some_and(|l| l.ticket == self.ticket) {
            *slot = None;
        }
    }
}

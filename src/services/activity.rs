//! Activity source — user-interaction signals as an explicit capability.
//!
//! DESIGN
//! ======
//! Instead of listening on an ambient event bus, interested parties
//! subscribe a handler and the shell emits signals into the hub. The session
//! manager subscribes exactly one handler that refreshes its activity
//! timestamp; tests drive the hub directly as a double.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

/// Recognized user-interaction signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySignal {
    PointerMove,
    KeyPress,
    Click,
    Scroll,
    Touch,
}

pub type ActivityHandler = Arc<dyn Fn(ActivitySignal) + Send + Sync>;

/// Subscription capability over user-interaction signals.
pub trait ActivitySource: Send + Sync {
    fn subscribe(&self, handler: ActivityHandler) -> Uuid;
    fn unsubscribe(&self, id: Uuid);
}

/// Fan-out hub: every emitted signal reaches every live subscriber.
#[derive(Default)]
pub struct ActivityHub {
    handlers: Mutex<HashMap<Uuid, ActivityHandler>>,
}

impl ActivityHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `signal` to all current subscribers.
    ///
    /// Handlers are snapshotted before delivery so one may re-enter the hub
    /// without deadlocking.
    pub fn emit(&self, signal: ActivitySignal) {
        let handlers: Vec<ActivityHandler> = {
            let guard = self
                .handlers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            guard.values().cloned().collect()
        };
        for handler in handlers {
            handler(signal);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl ActivitySource for ActivityHub {
    fn subscribe(&self, handler: ActivityHandler) -> Uuid {
        let id = Uuid::new_v4();
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, handler);
        id
    }

    fn unsubscribe(&self, id: Uuid) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }
}

#[cfg(test)]
#[path = "activity_test.rs"]
mod tests;

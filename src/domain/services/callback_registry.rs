//! Registry of inbound event handlers, one per event name.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::domain::entities::EventName;

/// Identifies one installation of a slot.
///
/// Removing with a stale token (one whose slot was since replaced) leaves the
/// newer handler in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotToken {
    callback_name: String,
    generation: u64,
}

impl SlotToken {
    /// Returns the slot name the host invokes.
    #[must_use]
    pub fn callback_name(&self) -> &str {
        &self.callback_name
    }
}

struct Slot {
    generation: u64,
    sender: mpsc::UnboundedSender<Value>,
}

#[derive(Default)]
struct RegistryInner {
    slots: HashMap<String, Slot>,
    next_generation: u64,
}

/// Maps host slot names to single-consumer channels.
///
/// At most one handler exists per event name: installing a second one
/// replaces the first, whose receiver then observes a closed channel.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl CallbackRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a handler slot for the event, replacing any previous one.
    pub fn install(&self, event: &EventName) -> (SlotToken, mpsc::UnboundedReceiver<Value>) {
        let callback_name = event.callback_name();
        let (sender, receiver) = mpsc::unbounded_channel();

        let mut inner = self.inner.lock();
        let generation = inner.next_generation;
        inner.next_generation += 1;

        if let Some(previous) = inner
            .slots
            .insert(callback_name.clone(), Slot { generation, sender })
        {
            debug!(
                callback = %callback_name,
                replaced_generation = previous.generation,
                "Replacing existing handler"
            );
        }

        (
            SlotToken {
                callback_name,
                generation,
            },
            receiver,
        )
    }

    /// Removes the slot installed under `token`.
    ///
    /// Returns `false` if the slot was already removed or has been replaced.
    pub fn remove(&self, token: &SlotToken) -> bool {
        let mut inner = self.inner.lock();

        let current = inner
            .slots
            .get(&token.callback_name)
            .is_some_and(|slot| slot.generation == token.generation);

        if current {
            inner.slots.remove(&token.callback_name);
        }
        current
    }

    /// Hands a payload to the handler behind `callback_name`.
    ///
    /// Returns whether a live handler received it. A slot whose receiver was
    /// dropped is cleared on the way.
    pub fn deliver(&self, callback_name: &str, payload: Value) -> bool {
        let mut inner = self.inner.lock();

        let Some(slot) = inner.slots.get(callback_name) else {
            debug!(callback = %callback_name, "No handler installed, dropping event");
            return false;
        };

        if slot.sender.send(payload).is_ok() {
            trace!(callback = %callback_name, "Event delivered");
            true
        } else {
            debug!(callback = %callback_name, "Handler receiver gone, clearing slot");
            inner.slots.remove(callback_name);
            false
        }
    }

    /// Returns whether a handler is installed for the event.
    #[must_use]
    pub fn is_registered(&self, event: &EventName) -> bool {
        self.inner.lock().slots.contains_key(&event.callback_name())
    }

    /// Returns the number of installed handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().slots.len()
    }

    /// Returns whether no handler is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Shared UI state — chat transcript, streaming flag, and the active config.
//!
//! DESIGN
//! ======
//! `ChatStore` is the single source of truth consumed by every UI component.
//! State lives behind one `RwLock`, so a snapshot is always a coherent view:
//! a reader never sees a message append interleaved with a config replace.
//! Components subscribe for [`StoreEvent`] notifications and re-query a
//! snapshot when one arrives; the store pushes edges, never state.
//!
//! The store is deliberately permissive (no validation): a config with
//! dangling references or duplicate resource names is stored unchanged.
//! Producers run [`crate::validate::validate`] before calling in.
//!
//! ERROR HANDLING
//! ==============
//! Mutations cannot fail. Event delivery is best-effort: a subscriber with a
//! full channel misses the event, and a subscriber whose receiver was dropped
//! is pruned on the next broadcast. Neither case blocks or fails a mutation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::event::StoreEvent;
use crate::model::{Message, SimConfig};

// =============================================================================
// STATE
// =============================================================================

/// The three shared fields, as one coherent value.
///
/// Also serves as the snapshot type handed to readers; [`ChatStore::snapshot`]
/// clones the whole thing under a single read lock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    /// True while an assistant response is being produced.
    pub is_streaming: bool,
    /// Append-only transcript, oldest first.
    pub messages: Vec<Message>,
    /// The active configuration, replaced wholesale. `None` when no
    /// conversation has produced one yet (or it was cleared).
    pub sim_config: Option<SimConfig>,
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Handle returned by [`ChatStore::subscribe`]. Dropping the receiver is a
/// valid way to unsubscribe; the store prunes the dead sender lazily.
pub struct Subscription {
    pub id: Uuid,
    pub events: mpsc::Receiver<StoreEvent>,
}

// =============================================================================
// STORE
// =============================================================================

/// Shared state container. Clone is cheap; all inner fields are Arc-wrapped,
/// so clones observe the same state.
#[derive(Clone, Default)]
pub struct ChatStore {
    state: Arc<RwLock<ChatState>>,
    subscribers: Arc<RwLock<HashMap<Uuid, mpsc::Sender<StoreEvent>>>>,
}

impl ChatStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Clone the full state under one read lock. Never a torn combination.
    pub async fn snapshot(&self) -> ChatState {
        self.state.read().await.clone()
    }

    pub async fn is_streaming(&self) -> bool {
        self.state.read().await.is_streaming
    }

    pub async fn message_count(&self) -> usize {
        self.state.read().await.messages.len()
    }

    /// Clone of the transcript, oldest first.
    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.messages.clone()
    }

    /// Clone of the active configuration, if any.
    pub async fn sim_config(&self) -> Option<SimConfig> {
        self.state.read().await.sim_config.clone()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Set the streaming flag. Setting the current value again is a no-op and
    /// emits nothing, so subscribers only ever see real edges.
    pub async fn set_streaming(&self, active: bool) {
        {
            let mut state = self.state.write().await;
            if state.is_streaming == active {
                return;
            }
            state.is_streaming = active;
        }
        debug!(active, "streaming flag changed");
        self.broadcast(StoreEvent::StreamingChanged { active }).await;
    }

    /// Append a message to the transcript and return its index.
    ///
    /// The transcript is append-only: stored messages are never mutated or
    /// reordered, and readers only ever receive clones.
    pub async fn append_message(&self, message: Message) -> usize {
        let index;
        {
            let mut state = self.state.write().await;
            index = state.messages.len();
            state.messages.push(message);
        }
        debug!(index, "message appended");
        self.broadcast(StoreEvent::MessageAppended { index }).await;
        index
    }

    /// Replace the configuration slot wholesale; `None` clears it.
    ///
    /// Last write wins. No merging and no validation here — a config with a
    /// self-looping process or duplicate resource names is stored as given.
    pub async fn set_sim_config(&self, config: Option<SimConfig>) {
        let event = match &config {
            Some(c) => {
                info!(title = %c.title, processes = c.processes.len(), "sim config replaced");
                StoreEvent::SimConfigReplaced
            }
            None => {
                info!("sim config cleared");
                StoreEvent::SimConfigCleared
            }
        };
        {
            let mut state = self.state.write().await;
            state.sim_config = config;
        }
        self.broadcast(event).await;
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a subscriber. `capacity` bounds the event channel; a slow
    /// consumer that fills it misses events rather than blocking mutations,
    /// and should re-query a snapshot on the next event it does receive.
    pub async fn subscribe(&self, capacity: usize) -> Subscription {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::channel(capacity.max(1));
        self.subscribers.write().await.insert(id, tx);
        debug!(%id, "subscriber added");
        Subscription { id, events: rx }
    }

    /// Remove a subscriber. Unknown IDs are ignored.
    pub async fn unsubscribe(&self, id: Uuid) {
        if self.subscribers.write().await.remove(&id).is_some() {
            debug!(%id, "subscriber removed");
        }
    }

    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }

    /// Fan an event out to all subscribers. Best-effort: full channels are
    /// skipped, closed channels are pruned.
    async fn broadcast(&self, event: StoreEvent) {
        let mut dropped: Vec<Uuid> = Vec::new();
        {
            let subscribers = self.subscribers.read().await;
            for (id, tx) in subscribers.iter() {
                match tx.try_send(event) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(_)) => {
                        debug!(%id, ?event, "subscriber channel full; event dropped");
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => {
                        dropped.push(*id);
                    }
                }
            }
        }
        if !dropped.is_empty() {
            let mut subscribers = self.subscribers.write().await;
            for id in dropped {
                subscribers.remove(&id);
                debug!(%id, "pruned dropped subscriber");
            }
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

//! Per-context conversation history

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::protocol::message::Message;

/// In-memory, append-only message log keyed by context ID
///
/// Each context has its own lock. A request that holds a [`ContextHistory`] has
/// exclusive append access to that context until the guard is dropped, so two
/// requests on the same context never interleave their messages. Entries live for
/// the lifetime of the store; nothing is evicted or persisted.
#[derive(Debug, Default)]
pub struct HistoryStore {
    contexts: RwLock<HashMap<String, Arc<Mutex<Vec<Message>>>>>,
}

impl HistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    async fn entry(&self, context_id: &str) -> Arc<Mutex<Vec<Message>>> {
        if let Some(entry) = self.contexts.read().await.get(context_id) {
            return entry.clone();
        }

        self.contexts
            .write()
            .await
            .entry(context_id.to_string())
            .or_default()
            .clone()
    }

    /// Take exclusive access to a context, creating it if absent
    pub async fn lock(&self, context_id: &str) -> ContextHistory {
        let guard = self.entry(context_id).await.lock_owned().await;
        ContextHistory { messages: guard }
    }

    /// Append one message to a context
    pub async fn append(&self, context_id: &str, message: Message) {
        self.lock(context_id).await.push(message);
    }

    /// Messages of a context in arrival order; empty if the context is unknown
    pub async fn get(&self, context_id: &str) -> Vec<Message> {
        let entry = self.contexts.read().await.get(context_id).cloned();
        match entry {
            Some(entry) => entry.lock().await.clone(),
            None => Vec::new(),
        }
    }

    /// Number of known contexts
    pub async fn len(&self) -> usize {
        self.contexts.read().await.len()
    }

    /// Check if no context has been created yet
    pub async fn is_empty(&self) -> bool {
        self.contexts.read().await.is_empty()
    }
}

/// Exclusive handle on one context's history
#[derive(Debug)]
pub struct ContextHistory {
    messages: OwnedMutexGuard<Vec<Message>>,
}

impl ContextHistory {
    /// Append a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Copy of the full history so far
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Number of messages in the context
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the context has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

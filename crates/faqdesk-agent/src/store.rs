//! ConversationStore: per-conversation locking over a `DashMap`.
//!
//! The map shard lock is held only long enough to fetch or create a
//! conversation's handle. Mutation happens under that conversation's own
//! mutex, so one id is serialized and distinct ids never wait on each other.
//!
//! Records are never evicted: the store grows for the process lifetime.

use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::conversation::Conversation;

type Handle = Arc<Mutex<Conversation>>;

/// Thread-safe, process-lifetime conversation store.
#[derive(Default)]
pub struct ConversationStore {
    conversations: DashMap<String, Handle>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh opaque conversation id.
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    /// Use `requested` when present and non-empty, otherwise generate an id.
    pub fn resolve_id(requested: Option<&str>) -> String {
        match requested {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Self::generate_id(),
        }
    }

    fn handle(&self, id: &str) -> Handle {
        if let Some(existing) = self.conversations.get(id) {
            return Arc::clone(existing.value());
        }
        let entry = self.conversations.entry(id.to_string()).or_insert_with(|| {
            tracing::debug!("🆕 Conversation {id} created");
            Arc::new(Mutex::new(Conversation::new(id)))
        });
        Arc::clone(entry.value())
    }

    /// Run `f` on the conversation for `id`, creating it on first use.
    ///
    /// Calls for the same id run one at a time.
    pub fn with_conversation<R>(&self, id: &str, f: impl FnOnce(&mut Conversation) -> R) -> R {
        let handle = self.handle(id);
        let mut conv = handle.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *conv)
    }

    /// Cloned snapshot of a conversation.
    pub fn get(&self, id: &str) -> Option<Conversation> {
        let handle = Arc::clone(self.conversations.get(id)?.value());
        let conv = handle.lock().unwrap_or_else(PoisonError::into_inner);
        Some(conv.clone())
    }

    /// Number of conversations held.
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}

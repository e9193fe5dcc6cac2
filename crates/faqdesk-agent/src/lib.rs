//! # FaqDesk Agent
//! The chat engine: ranks each message against the knowledge base and runs the
//! dialogue policy on the conversation's state.
//!
//! ## Flow
//! ```text
//! ChatRequest { message, conversationId? }
//!   ↓ resolve id (generate when absent)
//! KnowledgeBase::rank(message, k)        (no lock held)
//!   ↓
//! ConversationStore::with_conversation   (per-id lock)
//!   ├── push user turn
//!   ├── DialoguePolicy::decide → reply, handoff, streak update
//!   └── push assistant turn
//!   ↓
//! ChatResponse { reply, suggestions, handoff, conversationId }
//! ```

pub mod conversation;
pub mod policy;
pub mod store;

use std::sync::Arc;

use faqdesk_core::config::FaqDeskConfig;
use faqdesk_core::types::{ChatRequest, ChatResponse, FaqSummary};
use faqdesk_knowledge::KnowledgeBase;

pub use conversation::Conversation;
pub use policy::{Decision, DialoguePolicy};
pub use store::ConversationStore;

/// Clip `text` to at most `max_chars` characters.
fn clip_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The FaqDesk agent: knowledge base, conversation store, and policy.
pub struct Agent {
    knowledge: Arc<KnowledgeBase>,
    conversations: ConversationStore,
    policy: DialoguePolicy,
    top_k: usize,
    max_message_chars: usize,
}

impl Agent {
    pub fn new(knowledge: Arc<KnowledgeBase>, config: &FaqDeskConfig) -> Self {
        Self {
            knowledge,
            conversations: ConversationStore::new(),
            policy: DialoguePolicy::new(&config.dialogue),
            // at least the top match is needed for the confidence check
            top_k: config.knowledge.suggestions.max(1),
            max_message_chars: config.dialogue.max_message_chars,
        }
    }

    /// Load the knowledge base named by `config` and build an agent on it.
    pub fn from_config(config: &FaqDeskConfig) -> Self {
        let knowledge = KnowledgeBase::load(&config.knowledge);
        Self::new(Arc::new(knowledge), config)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    pub fn policy(&self) -> &DialoguePolicy {
        &self.policy
    }

    /// Every knowledge-base question, in stored order.
    pub fn list_faqs(&self) -> Vec<FaqSummary> {
        self.knowledge.list()
    }

    /// Answer one message. Never fails: malformed input was already
    /// defaulted into `request`.
    pub fn chat(&self, request: ChatRequest) -> ChatResponse {
        let conversation_id = ConversationStore::resolve_id(request.conversation_id.as_deref());
        let message = request.message;

        let matches = self
            .knowledge
            .rank(clip_chars(&message, self.max_message_chars), self.top_k);
        let suggestions: Vec<String> = matches.iter().map(|m| m.item.question.clone()).collect();
        let top = matches.first();

        let decision = self.conversations.with_conversation(&conversation_id, |conv| {
            conv.push_user(message);
            let decision = self.policy.decide(top, conv);
            conv.push_assistant(decision.reply.clone());
            decision
        });

        tracing::debug!(
            conversation = %conversation_id,
            top_score = top.map(|m| m.score).unwrap_or(0.0),
            confident = decision.confident,
            handoff = decision.handoff,
            "💬 chat turn"
        );
        if decision.handoff {
            tracing::info!("🙋 Handoff requested for conversation {conversation_id}");
        }

        ChatResponse {
            reply: decision.reply,
            suggestions,
            handoff: decision.handoff,
            conversation_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_chars() {
        assert_eq!(clip_chars("hello", 10), "hello");
        assert_eq!(clip_chars("hello", 3), "hel");
        assert_eq!(clip_chars("héllo", 2), "hé");
        assert_eq!(clip_chars("", 0), "");
        assert_eq!(clip_chars("abc", 0), "");
    }
}

//! Dialogue policy: confident answer or fallback, with streak-based handoff.

use faqdesk_core::config::DialogueConfig;
use faqdesk_core::types::ScoredMatch;

use crate::conversation::Conversation;

/// Outcome of one policy step.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub reply: String,
    pub handoff: bool,
    /// Whether the top match cleared the confidence threshold.
    pub confident: bool,
}

#[derive(Debug, Clone)]
pub struct DialoguePolicy {
    pub confidence_threshold: f64,
    pub handoff_after: u32,
    pub fallback_reply: String,
}

impl DialoguePolicy {
    pub fn new(config: &DialogueConfig) -> Self {
        Self {
            confidence_threshold: config.confidence_threshold,
            handoff_after: config.handoff_after,
            fallback_reply: config.fallback_reply.clone(),
        }
    }

    /// Decide the reply for `top` and update the conversation's streak.
    ///
    /// No top match (empty knowledge base) counts as low confidence.
    pub fn decide(&self, top: Option<&ScoredMatch>, conv: &mut Conversation) -> Decision {
        match top {
            Some(m) if m.score >= self.confidence_threshold => {
                conv.reset_streak();
                Decision {
                    reply: m.item.answer.clone(),
                    handoff: false,
                    confident: true,
                }
            }
            _ => {
                let streak = conv.bump_streak();
                Decision {
                    reply: self.fallback_reply.clone(),
                    handoff: streak >= self.handoff_after,
                    confident: false,
                }
            }
        }
    }
}

impl Default for DialoguePolicy {
    fn default() -> Self {
        Self::new(&DialogueConfig::default())
    }
}

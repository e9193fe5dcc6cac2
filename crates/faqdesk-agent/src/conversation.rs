//! Per-conversation record: append-only turns and the low-confidence streak.

use chrono::{DateTime, Utc};
use serde::Serialize;

use faqdesk_core::types::Turn;

#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub id: String,
    turns: Vec<Turn>,
    /// Consecutive replies whose top match fell below the threshold.
    low_streak: u32,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Conversation {
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            turns: Vec::new(),
            low_streak: 0,
            created_at: now,
            last_activity: now,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn low_streak(&self) -> u32 {
        self.low_streak
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Turn::assistant(content));
    }

    fn push(&mut self, turn: Turn) {
        self.last_activity = turn.at;
        self.turns.push(turn);
    }

    /// Record a confident answer.
    pub fn reset_streak(&mut self) {
        self.low_streak = 0;
    }

    /// Record a low-confidence reply and return the new streak length.
    pub fn bump_streak(&mut self) -> u32 {
        self.low_streak = self.low_streak.saturating_add(1);
        self.low_streak
    }
}

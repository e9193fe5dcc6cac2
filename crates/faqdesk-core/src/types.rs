//! Shared data types: knowledge-base entries, conversation turns, chat payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single question/answer pair in the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KbEntry {
    pub question: String,
    pub answer: String,
}

impl KbEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A knowledge-base entry with its similarity to a query, in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch {
    pub item: KbEntry,
    pub score: f64,
}

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

/// Incoming chat request.
///
/// Malformed bodies never fail: a missing or non-string `message` becomes `""`,
/// and a missing, empty, or non-string `conversationId` becomes `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, conversation_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            conversation_id,
        }
    }

    /// Build a request from an arbitrary JSON value, substituting defaults.
    pub fn from_value(body: &serde_json::Value) -> Self {
        let message = body["message"].as_str().unwrap_or("").to_string();
        let conversation_id = body["conversationId"]
            .as_str()
            .filter(|id| !id.is_empty())
            .map(String::from);
        Self {
            message,
            conversation_id,
        }
    }

    /// Build a request from raw body bytes. Invalid JSON is treated as `{}`.
    pub fn from_slice(raw: &[u8]) -> Self {
        let body: serde_json::Value =
            serde_json::from_slice(raw).unwrap_or(serde_json::Value::Null);
        Self::from_value(&body)
    }
}

/// Outgoing chat response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub suggestions: Vec<String>,
    pub handoff: bool,
    pub conversation_id: String,
}

/// Entry in the FAQ listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqSummary {
    pub question: String,
}

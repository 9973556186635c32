//! Chat message domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message payload type. Only text exists in this build; a real client
/// would add images, reactions, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
}

/// One message in a conversation.
///
/// The displayed history is read-only in this build: sends are validated
/// and logged but never appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub sender_id: String,
    pub sender_name: String,
    pub kind: MessageKind,
}

impl ChatMessage {
    /// Create a text message
    pub fn text(
        id: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            timestamp,
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            kind: MessageKind::Text,
        }
    }

    /// Whether this message was sent by the given user.
    ///
    /// The chat view uses this to attribute bubbles left (them) or
    /// right (us).
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }

    /// Short clock label for display next to the bubble
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

//! Conversation and message types.

use serde::{Deserialize, Serialize};

/// Sender id used for messages written by the local user.
pub const ME: &str = "me";

/// Whether a conversation partner is currently reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Offline,
}

/// The other side of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub status: PresenceStatus,
}

impl Participant {
    /// Upper-cased first letters of each name part ("Maria Rodriguez" -> "MR").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A single message in a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique within its thread.
    pub id: String,
    /// [`ME`] or the participant's id.
    pub sender_id: String,
    pub text: String,
    /// ISO-8601 timestamp.
    pub timestamp: String,
}

impl Message {
    pub fn is_mine(&self) -> bool {
        self.sender_id == ME
    }
}

/// A conversation's ordered message history plus participant metadata.
///
/// Messages are kept in insertion order, which is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub conversation_id: String,
    pub participant: Participant,
    pub messages: Vec<Message>,
    /// Cleared when the conversation is activated.
    #[serde(default)]
    pub unread: bool,
}

impl Thread {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Builds the list-view summary of this thread.
    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            conversation_id: self.conversation_id.clone(),
            participant: self.participant.clone(),
            last_message: self.last_message().cloned(),
            is_read: !self.unread,
        }
    }
}

/// What the conversation list shows for one thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub participant: Participant,
    pub last_message: Option<Message>,
    pub is_read: bool,
}

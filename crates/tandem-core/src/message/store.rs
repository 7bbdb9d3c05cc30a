//! Message store: conversation threads and the active conversation.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;

use super::model::{ConversationSummary, ME, Message, Thread};
use super::seed;
use crate::error::{Result, TandemError};
use crate::ids::{format_timestamp, parse_timestamp, time_based_id};
use crate::storage::{KeyValueStore, keys, load_json, save_json};

/// Owns the conversation id to thread mapping and tracks which
/// conversation is active.
///
/// Threads are kept in a `BTreeMap`, so "the first conversation" is always
/// the smallest conversation id. Activating a conversation marks it read.
pub struct MessageStore {
    storage: Arc<dyn KeyValueStore>,
    threads: BTreeMap<String, Thread>,
    active_conversation_id: Option<String>,
}

impl MessageStore {
    /// Hydrates the thread map from storage, seeding it when absent.
    ///
    /// No conversation is active after opening.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let threads = match load_json(storage.as_ref(), keys::CONVERSATIONS)? {
            Some(threads) => threads,
            None => {
                let threads = seed::threads();
                save_json(storage.as_ref(), keys::CONVERSATIONS, &threads)?;
                threads
            }
        };

        tracing::debug!(conversations = threads.len(), "Message store hydrated");

        Ok(Self {
            storage,
            threads,
            active_conversation_id: None,
        })
    }

    fn persist(&self) -> Result<()> {
        save_json(self.storage.as_ref(), keys::CONVERSATIONS, &self.threads)
    }

    pub fn active_conversation_id(&self) -> Option<&str> {
        self.active_conversation_id.as_deref()
    }

    /// The thread currently displayed, if any.
    pub fn active_thread(&self) -> Option<&Thread> {
        self.active_conversation_id
            .as_deref()
            .and_then(|id| self.threads.get(id))
    }

    pub fn thread(&self, conversation_id: &str) -> Option<&Thread> {
        self.threads.get(conversation_id)
    }

    pub fn threads(&self) -> &BTreeMap<String, Thread> {
        &self.threads
    }

    /// Number of conversations with unread messages.
    pub fn unread_count(&self) -> usize {
        self.threads.values().filter(|thread| thread.unread).count()
    }

    /// Summaries for the conversation list, filtered by a case-insensitive
    /// substring of the participant's name. An empty search matches all.
    pub fn conversations(&self, search: &str) -> Vec<ConversationSummary> {
        let needle = search.to_lowercase();
        self.threads
            .values()
            .filter(|thread| thread.participant.name.to_lowercase().contains(&needle))
            .map(Thread::summary)
            .collect()
    }

    /// Makes a conversation active and marks it read.
    ///
    /// If `conversation_id` is not in the mapping, the first conversation
    /// (smallest id) becomes active instead. With no conversations at all,
    /// nothing is active.
    ///
    /// # Returns
    ///
    /// The id that actually became active.
    pub fn set_active_conversation_id(&mut self, conversation_id: &str) -> Result<Option<&str>> {
        let resolved = if self.threads.contains_key(conversation_id) {
            Some(conversation_id.to_string())
        } else {
            let fallback = self.threads.keys().next().cloned();
            tracing::debug!(
                requested = conversation_id,
                fallback = ?fallback,
                "Conversation not found, falling back to first conversation"
            );
            fallback
        };

        if let Some(id) = resolved.as_deref() {
            self.mark_read(id)?;
        }

        self.active_conversation_id = resolved;
        Ok(self.active_conversation_id.as_deref())
    }

    fn mark_read(&mut self, conversation_id: &str) -> Result<()> {
        let was_unread = match self.threads.get_mut(conversation_id) {
            Some(thread) if thread.unread => {
                thread.unread = false;
                true
            }
            _ => false,
        };

        if was_unread {
            if let Err(e) = self.persist() {
                if let Some(thread) = self.threads.get_mut(conversation_id) {
                    thread.unread = true;
                }
                return Err(e);
            }
        }
        Ok(())
    }

    /// Appends a message from the local user to a thread.
    ///
    /// The timestamp is the current time, or the previous message's time
    /// if the clock reads earlier, so a thread stays chronological. No
    /// reply is generated.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Message))`: the appended message
    /// - `Ok(None)`: no such conversation; nothing changed
    /// - `Err(_)`: blank text, or the write failed (nothing changed)
    pub fn send_message(&mut self, conversation_id: &str, text: &str) -> Result<Option<Message>> {
        if text.trim().is_empty() {
            return Err(TandemError::validation("text", "Message text must not be empty"));
        }

        let Some(thread) = self.threads.get_mut(conversation_id) else {
            tracing::warn!(conversation_id, "Ignoring message for unknown conversation");
            return Ok(None);
        };

        let now = Utc::now();
        let sent_at = thread
            .last_message()
            .and_then(|last| parse_timestamp(&last.timestamp))
            .filter(|last| *last > now)
            .unwrap_or(now);

        let id = time_based_id("msg", now, |candidate| {
            thread.messages.iter().any(|message| message.id == candidate)
        });
        let message = Message {
            id,
            sender_id: ME.to_string(),
            text: text.to_string(),
            timestamp: format_timestamp(sent_at),
        };
        thread.messages.push(message.clone());

        if let Err(e) = self.persist() {
            if let Some(thread) = self.threads.get_mut(conversation_id) {
                thread.messages.pop();
            }
            return Err(e);
        }

        tracing::info!(
            conversation_id,
            message_id = %message.id,
            "Message sent"
        );
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::MockKeyValueStore;

    fn open_seeded() -> (Arc<MockKeyValueStore>, MessageStore) {
        let storage = Arc::new(MockKeyValueStore::default());
        let store = MessageStore::open(storage.clone()).unwrap();
        (storage, store)
    }

    #[test]
    fn test_open_seeds_three_conversations() {
        let (storage, store) = open_seeded();

        assert_eq!(store.threads().len(), 3);
        assert_eq!(store.thread("1").unwrap().messages.len(), 5);
        assert_eq!(store.unread_count(), 1);
        assert!(store.active_conversation_id().is_none());
        assert!(storage.raw(keys::CONVERSATIONS).is_some());
    }

    #[test]
    fn test_set_active_existing_conversation() {
        let (_, mut store) = open_seeded();

        let active = store.set_active_conversation_id("3").unwrap();

        assert_eq!(active, Some("3"));
        assert_eq!(store.active_conversation_id(), Some("3"));
        assert_eq!(
            store.active_thread().unwrap().participant.name,
            "Sophie Dubois"
        );
    }

    #[test]
    fn test_set_active_unknown_falls_back_to_first() {
        let (_, mut store) = open_seeded();

        let active = store.set_active_conversation_id("nope").unwrap();

        assert_eq!(active, Some("1"));
        assert_eq!(store.active_conversation_id(), Some("1"));
    }

    #[test]
    fn test_fallback_uses_string_order_of_ids() {
        let thread = |id: &str| {
            format!(
                r#"{{"conversationId":"{id}","participant":{{"id":"{id}","name":"P{id}","status":"online"}},"messages":[]}}"#
            )
        };
        let raw = format!(r#"{{"2":{},"10":{}}}"#, thread("2"), thread("10"));
        let storage = Arc::new(MockKeyValueStore::with_value(keys::CONVERSATIONS, &raw));
        let mut store = MessageStore::open(storage).unwrap();

        assert_eq!(store.set_active_conversation_id("missing").unwrap(), Some("10"));
    }

    #[test]
    fn test_set_active_with_no_conversations() {
        let storage = Arc::new(MockKeyValueStore::with_value(keys::CONVERSATIONS, "{}"));
        let mut store = MessageStore::open(storage).unwrap();

        assert_eq!(store.set_active_conversation_id("1").unwrap(), None);
        assert!(store.active_thread().is_none());
    }

    #[test]
    fn test_activation_marks_read_and_persists() {
        let (storage, mut store) = open_seeded();
        assert!(store.thread("2").unwrap().unread);
        let writes = storage.write_count(keys::CONVERSATIONS);

        store.set_active_conversation_id("2").unwrap();

        assert!(!store.thread("2").unwrap().unread);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(storage.write_count(keys::CONVERSATIONS), writes + 1);

        // Re-activating a read thread does not write again
        store.set_active_conversation_id("2").unwrap();
        assert_eq!(storage.write_count(keys::CONVERSATIONS), writes + 1);
    }

    #[test]
    fn test_send_message_appends_one_message_from_me() {
        let (_, mut store) = open_seeded();
        let previous = store.thread("1").unwrap().last_message().unwrap().clone();

        let sent = store
            .send_message("1", "¿Qué tal mañana a las dos?")
            .unwrap()
            .unwrap();

        let thread = store.thread("1").unwrap();
        assert_eq!(thread.messages.len(), 6);
        assert_eq!(thread.last_message().unwrap(), &sent);
        assert_eq!(sent.sender_id, ME);
        assert!(
            parse_timestamp(&sent.timestamp).unwrap()
                >= parse_timestamp(&previous.timestamp).unwrap()
        );
    }

    #[test]
    fn test_send_message_keeps_thread_chronological_when_clock_lags() {
        let future = r#"{"9": {
            "conversationId": "9",
            "participant": {"id": "9", "name": "Yuki Sato", "status": "offline"},
            "messages": [{"id": "1", "senderId": "9", "text": "Mata ne", "timestamp": "2999-01-01T00:00:00"}]
        }}"#;
        let storage = Arc::new(MockKeyValueStore::with_value(keys::CONVERSATIONS, future));
        let mut store = MessageStore::open(storage).unwrap();

        let sent = store.send_message("9", "Hai!").unwrap().unwrap();

        assert_eq!(
            parse_timestamp(&sent.timestamp),
            parse_timestamp("2999-01-01T00:00:00")
        );
    }

    #[test]
    fn test_send_message_ids_unique_within_thread() {
        let (_, mut store) = open_seeded();

        let first = store.send_message("3", "Merci !").unwrap().unwrap();
        let second = store.send_message("3", "À bientôt").unwrap().unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_send_message_to_unknown_conversation_is_noop() {
        let (storage, mut store) = open_seeded();
        let before = store.threads().clone();
        let writes = storage.write_count(keys::CONVERSATIONS);

        let result = store.send_message("42", "Anyone there?").unwrap();

        assert!(result.is_none());
        assert_eq!(store.threads(), &before);
        assert_eq!(storage.write_count(keys::CONVERSATIONS), writes);
    }

    #[test]
    fn test_send_blank_message_is_rejected() {
        let (_, mut store) = open_seeded();

        let err = store.send_message("1", "   ").unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.thread("1").unwrap().messages.len(), 5);
    }

    #[test]
    fn test_sent_messages_survive_reopen() {
        let (storage, mut store) = open_seeded();
        store.send_message("2", "Sure, next Tuesday works.").unwrap();
        let expected = store.threads().clone();

        let reopened = MessageStore::open(storage).unwrap();

        assert_eq!(reopened.threads(), &expected);
    }

    #[test]
    fn test_conversations_search() {
        let (_, store) = open_seeded();

        let all = store.conversations("");
        assert_eq!(all.len(), 3);
        assert!(!all[1].is_read);

        let matches = store.conversations("DUBO");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].conversation_id, "3");

        assert!(store.conversations("zzz").is_empty());
    }
}

//! Stores running on the JSON file adapter, across process-like restarts.

use std::sync::Arc;

use tandem_core::account::{AccountStore, NotificationUpdate};
use tandem_core::message::{ME, MessageStore};
use tandem_core::profile::{ProfileStore, ProfileUpdate, Proficiency};
use tandem_core::session::{NewSession, SessionStore};
use tandem_core::storage::{KeyValueStore, keys};
use tandem_infrastructure::JsonFileStore;
use tempfile::TempDir;

fn open_store(temp_dir: &TempDir) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::new(temp_dir.path().join("storage.json")))
}

#[test]
fn test_first_start_persists_seed_data() {
    let temp_dir = TempDir::new().unwrap();
    let storage = open_store(&temp_dir);

    let sessions = SessionStore::open(storage.clone()).unwrap();
    MessageStore::open(storage.clone()).unwrap();

    assert_eq!(sessions.upcoming_sessions().len(), 2);
    assert_eq!(sessions.past_sessions().len(), 2);
    assert_eq!(
        storage.keys().unwrap(),
        vec![
            keys::CONVERSATIONS,
            keys::PAST_SESSIONS,
            keys::UPCOMING_SESSIONS
        ]
    );
}

#[test]
fn test_scheduled_session_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let added = {
        let mut sessions = SessionStore::open(open_store(&temp_dir)).unwrap();
        sessions
            .add_session(NewSession {
                partner_name: "Aisha Khan".to_string(),
                date: "2025-04-02T17:00:00".to_string(),
                duration: 60,
                language: "Arabic".to_string(),
                topic: "Arabic practice session".to_string(),
                notes: Some("Greetings and small talk".to_string()),
            })
            .unwrap()
    };

    let reopened = SessionStore::open(open_store(&temp_dir)).unwrap();

    assert_eq!(reopened.upcoming_sessions().len(), 3);
    assert_eq!(reopened.upcoming_sessions()[0], added);
    assert_eq!(reopened.past_sessions()[0].partner_name, "Sophie Dubois");
}

#[test]
fn test_messages_and_read_state_survive_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut messages = MessageStore::open(open_store(&temp_dir)).unwrap();
        messages.set_active_conversation_id("2").unwrap();
        messages
            .send_message("2", "Next week is fine, how about Tuesday?")
            .unwrap()
            .unwrap();
    }

    let reopened = MessageStore::open(open_store(&temp_dir)).unwrap();
    let thread = reopened.thread("2").unwrap();

    assert!(!thread.unread);
    assert_eq!(thread.messages.len(), 2);
    assert_eq!(thread.last_message().unwrap().sender_id, ME);
    // Active conversation is view state and is not persisted
    assert_eq!(reopened.active_conversation_id(), None);
}

#[test]
fn test_login_is_shared_through_the_user_key() {
    let temp_dir = TempDir::new().unwrap();

    AccountStore::new(open_store(&temp_dir))
        .login("learner@example.com", "hunter2")
        .unwrap();

    let user = AccountStore::new(open_store(&temp_dir))
        .current_user()
        .unwrap()
        .unwrap();
    assert_eq!(user.email, "learner@example.com");
    assert_eq!(user.display_name(), "John Doe");
}

#[test]
fn test_corrupt_snapshot_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let storage = open_store(&temp_dir);
    storage.set(keys::UPCOMING_SESSIONS, "[{\"id\": 1}]").unwrap();

    let result = SessionStore::open(storage);

    assert!(result.err().unwrap().is_serialization());
}

#[test]
fn test_profile_and_notifications_survive_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let storage = open_store(&temp_dir);
        AccountStore::new(storage.clone())
            .login("kim@example.com", "pw")
            .unwrap();
        AccountStore::new(storage.clone())
            .update_notifications(NotificationUpdate {
                email: Some(false),
                ..Default::default()
            })
            .unwrap();
        ProfileStore::new(storage)
            .update(ProfileUpdate {
                learn: vec![("Korean".to_string(), Proficiency::Beginner)],
                ..Default::default()
            })
            .unwrap();
    }

    let storage = open_store(&temp_dir);
    let profile = ProfileStore::new(storage.clone()).load().unwrap();
    assert_eq!(profile.email, "kim@example.com");
    assert_eq!(profile.learning_languages, vec!["Spanish", "French", "Korean"]);

    let settings = AccountStore::new(storage.clone())
        .notification_settings()
        .unwrap();
    assert!(!settings.email);
    assert!(settings.sessions);
    assert_eq!(
        storage.keys().unwrap(),
        vec![keys::NOTIFICATIONS, keys::PROFILE, keys::USER]
    );
}

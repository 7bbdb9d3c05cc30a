//! Key-value persistence port.
//!
//! Stores never talk to a concrete backend. They hold an
//! `Arc<dyn KeyValueStore>` and encode their collections as JSON strings
//! under the keys listed in [`keys`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Keys under which the application state is persisted.
pub mod keys {
    /// The local user written at login.
    pub const USER: &str = "user";
    /// Upcoming practice sessions, newest first.
    pub const UPCOMING_SESSIONS: &str = "upcomingSessions";
    /// Past practice sessions.
    pub const PAST_SESSIONS: &str = "pastSessions";
    /// Conversation id to thread mapping.
    pub const CONVERSATIONS: &str = "conversations";
    /// The edited learner profile.
    pub const PROFILE: &str = "profile";
    /// Notification switches from the account settings.
    pub const NOTIFICATIONS: &str = "notificationSettings";
}

/// A string-keyed, string-valued persistent store.
///
/// This trait decouples the stores from the storage mechanism (a JSON file
/// on disk, an in-memory map in tests). Implementations only need to honour
/// last-write-wins semantics for a single writer.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Loads and decodes the JSON value stored under `key`.
///
/// # Returns
///
/// - `Ok(Some(T))`: the key exists and decoded cleanly
/// - `Ok(None)`: the key is absent
/// - `Err(_)`: the backend failed or the stored value is malformed
pub fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}


#[cfg(test)]
mod tests {
    use super::test_support::MockKeyValueStore;
    use super::*;

    #[test]
    fn test_load_missing_key() {
        let store = MockKeyValueStore::default();
        let loaded: Option<Vec<String>> = load_json(&store, "absent").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MockKeyValueStore::default();
        let value = vec!["b".to_string(), "a".to_string()];

        save_json(&store, "letters", &value).unwrap();

        let loaded: Vec<String> = load_json(&store, "letters").unwrap().unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let store = MockKeyValueStore::with_value("letters", "[not json");
        let err = load_json::<Vec<String>>(&store, "letters").unwrap_err();
        assert!(err.is_serialization());
    }
}

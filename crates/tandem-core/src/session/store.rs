//! Session store: upcoming and past practice sessions.

use std::sync::Arc;

use chrono::Utc;

use super::model::{NewSession, Session};
use super::seed;
use crate::error::Result;
use crate::ids::time_based_id;
use crate::storage::{KeyValueStore, keys, load_json, save_json};

/// Owns the upcoming and past session collections.
///
/// The two collections are maintained separately. Nothing here moves a
/// session from upcoming to past as its date elapses.
///
/// Every mutation is written through to the injected [`KeyValueStore`]
/// before it becomes visible, so a failed write leaves the store unchanged.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    upcoming: Vec<Session>,
    past: Vec<Session>,
}

impl SessionStore {
    /// Hydrates both collections from storage, seeding any that are absent.
    ///
    /// Both collections are written back once hydrated, so the seed data is
    /// persisted on first use. A malformed stored value is returned as a
    /// serialization error.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let upcoming = Self::hydrate(storage.as_ref(), keys::UPCOMING_SESSIONS, seed::upcoming_sessions)?;
        let past = Self::hydrate(storage.as_ref(), keys::PAST_SESSIONS, seed::past_sessions)?;

        save_json(storage.as_ref(), keys::UPCOMING_SESSIONS, &upcoming)?;
        save_json(storage.as_ref(), keys::PAST_SESSIONS, &past)?;

        tracing::debug!(
            upcoming = upcoming.len(),
            past = past.len(),
            "Session store hydrated"
        );

        Ok(Self {
            storage,
            upcoming,
            past,
        })
    }

    fn hydrate(
        storage: &dyn KeyValueStore,
        key: &str,
        seed: fn() -> Vec<Session>,
    ) -> Result<Vec<Session>> {
        match load_json(storage, key)? {
            Some(sessions) => Ok(sessions),
            None => {
                tracing::debug!(key, "No persisted sessions, using seed data");
                Ok(seed())
            }
        }
    }

    /// Upcoming sessions, most recently scheduled first.
    pub fn upcoming_sessions(&self) -> &[Session] {
        &self.upcoming
    }

    pub fn past_sessions(&self) -> &[Session] {
        &self.past
    }

    /// Finds a session by id in either collection.
    pub fn find(&self, id: &str) -> Option<&Session> {
        self.upcoming
            .iter()
            .chain(self.past.iter())
            .find(|session| session.id == id)
    }

    /// Schedules a new session.
    ///
    /// Assigns a unique time-based id and prepends the session to the
    /// upcoming list. No date or overlap checks are made, and the past
    /// list is never touched.
    ///
    /// # Returns
    ///
    /// The stored session, including its generated id.
    pub fn add_session(&mut self, session: NewSession) -> Result<Session> {
        let id = time_based_id("session", Utc::now(), |candidate| {
            self.find(candidate).is_some()
        });
        let session = session.with_id(id);

        let mut upcoming = Vec::with_capacity(self.upcoming.len() + 1);
        upcoming.push(session.clone());
        upcoming.extend(self.upcoming.iter().cloned());

        save_json(self.storage.as_ref(), keys::UPCOMING_SESSIONS, &upcoming)?;
        self.upcoming = upcoming;

        tracing::info!(
            session_id = %session.id,
            partner = %session.partner_name,
            date = %session.date,
            "Session scheduled"
        );

        Ok(session)
    }
}

//! Practice session domain models.

use serde::{Deserialize, Serialize};

/// A scheduled language practice session.
///
/// Serialized with camelCase field names so the persisted
/// `upcomingSessions` / `pastSessions` arrays keep their established shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique identifier, assigned by the store at creation.
    pub id: String,
    /// Free-form partner name (not a reference into the partner directory).
    pub partner_name: String,
    /// Local date-time, `YYYY-MM-DDTHH:MM:SS`.
    pub date: String,
    /// Length in minutes.
    pub duration: u32,
    pub language: String,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A session that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub partner_name: String,
    pub date: String,
    pub duration: u32,
    pub language: String,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewSession {
    /// Attaches an id, producing a stored session.
    pub fn with_id(self, id: String) -> Session {
        Session {
            id,
            partner_name: self.partner_name,
            date: self.date,
            duration: self.duration,
            language: self.language,
            topic: self.topic,
            notes: self.notes,
        }
    }
}

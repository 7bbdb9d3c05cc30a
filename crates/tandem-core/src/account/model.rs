//! LocalUser domain model.

use serde::{Deserialize, Serialize};

/// The user record kept in local storage after the mock login.
///
/// Not validated against any server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub is_logged_in: bool,
}

impl LocalUser {
    /// Name shown in navigation and on the profile.
    ///
    /// Uses `name` when set, otherwise the part of the email before `@`
    /// with its first letter upper-cased, otherwise `"User"`.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }

        let local_part = self.email.split('@').next().unwrap_or_default();
        let mut chars = local_part.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "User".to_string(),
        }
    }
}

/// Which notifications the user wants. Everything is on until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub sessions: bool,
    pub messages: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            sessions: true,
            messages: true,
        }
    }
}

/// A partial change to [`NotificationSettings`]; `None` keeps the switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationUpdate {
    pub email: Option<bool>,
    pub sessions: Option<bool>,
    pub messages: Option<bool>,
}

impl NotificationUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, settings: NotificationSettings) -> NotificationSettings {
        NotificationSettings {
            email: self.email.unwrap_or(settings.email),
            sessions: self.sessions.unwrap_or(settings.sessions),
            messages: self.messages.unwrap_or(settings.messages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, name: Option<&str>) -> LocalUser {
        LocalUser {
            email: email.to_string(),
            name: name.map(str::to_string),
            is_logged_in: true,
        }
    }

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(user("jane@example.com", Some("Jane Roe")).display_name(), "Jane Roe");
    }

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(user("jane.roe@example.com", None).display_name(), "Jane.roe");
    }

    #[test]
    fn test_notification_update_keeps_unset_switches() {
        let update = NotificationUpdate {
            sessions: Some(false),
            ..Default::default()
        };

        let settings = update.apply(NotificationSettings::default());

        assert_eq!(
            settings,
            NotificationSettings {
                email: true,
                sessions: false,
                messages: true
            }
        );
        assert!(NotificationUpdate::default().is_empty());
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(user("", None).display_name(), "User");
        assert_eq!(user("@example.com", Some("  ")).display_name(), "User");
    }
}

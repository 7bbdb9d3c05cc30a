//! Account store backed by the `user` key.

use std::sync::Arc;

use super::model::{LocalUser, NotificationSettings, NotificationUpdate};
use crate::error::{Result, TandemError};
use crate::storage::{KeyValueStore, keys, load_json, save_json};

/// Name written for every mock login.
pub const DEMO_USER_NAME: &str = "John Doe";

/// Reads and writes the local user record.
///
/// There is no logout: once written, the record stays until storage is
/// cleared by other means.
pub struct AccountStore {
    storage: Arc<dyn KeyValueStore>,
}

impl AccountStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Performs the mock login.
    ///
    /// Both fields are required. The password is only checked for presence
    /// and is never stored.
    pub fn login(&self, email: &str, password: &str) -> Result<LocalUser> {
        Self::validate_credentials(email, password)?;

        let user = LocalUser {
            email: email.trim().to_string(),
            name: Some(DEMO_USER_NAME.to_string()),
            is_logged_in: true,
        };
        save_json(self.storage.as_ref(), keys::USER, &user)?;

        tracing::info!(email = %user.email, "User logged in");
        Ok(user)
    }

    /// Checks that both login fields are filled in, reporting each
    /// missing one.
    pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
        let mut errors = Vec::new();
        if email.trim().is_empty() {
            errors.push(TandemError::validation("email", "Please enter your email."));
        }
        if password.is_empty() {
            errors.push(TandemError::validation("password", "Please enter your password."));
        }
        TandemError::from_many(errors)
    }

    /// The stored user, if anyone has logged in.
    pub fn current_user(&self) -> Result<Option<LocalUser>> {
        load_json(self.storage.as_ref(), keys::USER)
    }

    /// Saved notification switches, or all on when never saved.
    pub fn notification_settings(&self) -> Result<NotificationSettings> {
        Ok(load_json(self.storage.as_ref(), keys::NOTIFICATIONS)?.unwrap_or_default())
    }

    /// Applies and saves a change to the notification switches.
    pub fn update_notifications(&self, update: NotificationUpdate) -> Result<NotificationSettings> {
        let settings = update.apply(self.notification_settings()?);
        save_json(self.storage.as_ref(), keys::NOTIFICATIONS, &settings)?;

        tracing::info!(
            email = settings.email,
            sessions = settings.sessions,
            messages = settings.messages,
            "Notification settings saved"
        );
        Ok(settings)
    }

    /// Mock password reset: nothing is sent, the address the instructions
    /// would go to is returned.
    ///
    /// # Errors
    ///
    /// `TandemError::NotFound` when nobody is logged in.
    pub fn request_password_change(&self) -> Result<String> {
        let user = self
            .current_user()?
            .ok_or_else(|| TandemError::not_found("user", "current"))?;

        tracing::info!(email = %user.email, "Password change requested");
        Ok(user.email)
    }
}

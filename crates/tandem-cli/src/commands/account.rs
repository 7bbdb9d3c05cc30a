use std::io::Write;

use anyhow::Result;
use tandem_core::account::{AccountStore, NotificationSettings, NotificationUpdate};

use super::{NOT_LOGGED_IN, user_error};
use crate::app::App;

/// Mock login: validate, wait for the fake round trip, store the user.
pub async fn login(app: &App, email: &str, password: &str, out: &mut impl Write) -> Result<()> {
    AccountStore::validate_credentials(email, password).map_err(user_error)?;

    app.simulate_round_trip().await;

    let user = app.account().login(email, password).map_err(user_error)?;
    writeln!(out, "Login successful! Welcome back, {}.", user.display_name())?;
    Ok(())
}

pub fn whoami(app: &App, out: &mut impl Write) -> Result<()> {
    match app.account().current_user()? {
        Some(user) => writeln!(out, "{} <{}>", user.display_name(), user.email)?,
        None => writeln!(out, "{}", NOT_LOGGED_IN)?,
    }
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn write_notifications(out: &mut impl Write, settings: &NotificationSettings) -> Result<()> {
    writeln!(out, "Notifications")?;
    writeln!(out, "  Email notifications        {}", on_off(settings.email))?;
    writeln!(out, "  Session reminders          {}", on_off(settings.sessions))?;
    writeln!(out, "  New message notifications  {}", on_off(settings.messages))?;
    Ok(())
}

/// Account settings: shows the email and notification switches, saving
/// any switch that was given. A password change is only acknowledged.
pub fn settings(
    app: &App,
    update: NotificationUpdate,
    change_password: bool,
    out: &mut impl Write,
) -> Result<()> {
    let account = app.account();

    if change_password {
        account.request_password_change().map_err(user_error)?;
        writeln!(
            out,
            "Password change requested. Check your email for instructions to change your password."
        )?;
    }

    let notifications = if update.is_empty() {
        account.notification_settings()?
    } else {
        let saved = account.update_notifications(update)?;
        writeln!(out, "Settings saved. Your account settings have been updated successfully.")?;
        saved
    };

    match account.current_user()? {
        Some(user) => writeln!(out, "Email address: {}", user.email)?,
        None => writeln!(out, "Email address: (not logged in)")?,
    }
    write_notifications(out, &notifications)
}

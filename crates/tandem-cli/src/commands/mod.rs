pub mod account;
pub mod messages;
pub mod partners;
pub mod profile;
pub mod sessions;

use anyhow::anyhow;
use chrono::{Local, NaiveDateTime};
use tandem_core::TandemError;
use tandem_core::ids::parse_timestamp;

pub(crate) const NOT_LOGGED_IN: &str = "Not logged in. Run `tandem login` first.";

/// Turns a core error into a user-facing one. Validation failures are
/// listed field by field, like inline form messages. A missing partner or
/// user points at the command that fixes it; the core error stays attached
/// as the source.
pub(crate) fn user_error(err: TandemError) -> anyhow::Error {
    let redirect = match &err {
        TandemError::NotFound {
            entity_type: "partner",
            id,
        } => Some(format!(
            "Partner selection required: no partner with id '{}'. Run `tandem partners` to choose one.",
            id
        )),
        TandemError::NotFound {
            entity_type: "user", ..
        } => Some(NOT_LOGGED_IN.to_string()),
        _ => None,
    };
    if let Some(message) = redirect {
        return anyhow::Error::new(err).context(message);
    }

    if !err.is_validation() {
        return err.into();
    }

    let lines: Vec<String> = err
        .validation_messages()
        .iter()
        .map(|(field, message)| format!("  {}: {}", field, message))
        .collect();
    anyhow!("Missing information\n{}", lines.join("\n"))
}

/// "Sat, Mar 22 2025 14:00" for a session's local date-time, or the raw
/// string when it does not parse.
pub(crate) fn format_session_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|date| date.format("%a, %b %e %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// "Mar 19 14:30" for a message timestamp, on the local clock.
pub(crate) fn format_message_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|instant| instant.with_timezone(&Local).format("%b %e %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::App;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use tandem_infrastructure::{AppConfig, InMemoryStore};

    /// App over fresh in-memory storage with no simulated latency.
    pub(crate) fn test_app() -> App {
        let mut config = AppConfig::default();
        config.network.simulated_latency_ms = 0;
        App::with_storage(config, Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn test_user_error_lists_fields() {
        let err = TandemError::Multiple(vec![
            TandemError::validation("date", "Date is required"),
            TandemError::validation("time", "Time is required"),
        ]);

        let message = user_error(err).to_string();

        assert_eq!(
            message,
            "Missing information\n  date: Date is required\n  time: Time is required"
        );
    }

    #[test]
    fn test_user_error_passes_other_errors_through() {
        let message = user_error(TandemError::storage("disk full")).to_string();
        assert_eq!(message, "Storage error: disk full");
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(format_session_date("2025-03-22T14:00:00"), "Sat, Mar 22 2025 14:00");
        assert_eq!(format_session_date("someday"), "someday");
    }

    #[test]
    fn test_message_time_uses_local_clock() {
        let sent = Utc.with_ymd_and_hms(2025, 3, 19, 14, 30, 0).unwrap();
        let expected = sent.with_timezone(&Local).format("%b %e %H:%M").to_string();

        assert_eq!(format_message_time("2025-03-19T14:30:00.000Z"), expected);
        assert_eq!(format_message_time("2025-03-19T14:30:00"), expected);
        assert_eq!(format_message_time("garbled"), "garbled");
    }

    #[test]
    fn test_user_error_missing_partner() {
        let err = user_error(TandemError::not_found("partner", "12"));

        assert_eq!(
            err.to_string(),
            "Partner selection required: no partner with id '12'. Run `tandem partners` to choose one."
        );
        assert!(err.downcast_ref::<TandemError>().unwrap().is_not_found());
    }
}

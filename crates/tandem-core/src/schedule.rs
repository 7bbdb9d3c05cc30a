//! Schedule form validation.
//!
//! Turns the raw strings of a scheduling form into a [`NewSession`] for
//! the session store, reporting every invalid field at once.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{Result, TandemError};
use crate::session::NewSession;

/// Duration preselected by the form, in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Raw scheduling form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRequest {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    /// Minutes, as typed
    pub duration: String,
    pub topic: Option<String>,
    pub notes: Option<String>,
}

impl ScheduleRequest {
    /// Validates the form against `today` and builds the session.
    ///
    /// An empty topic becomes `"<language> practice session"`; empty notes
    /// are dropped.
    pub fn into_new_session(self, partner_name: &str, language: &str, today: NaiveDate) -> Result<NewSession> {
        let mut errors = Vec::new();

        let date = match self.date.trim() {
            "" => {
                errors.push(TandemError::validation("date", "Date is required"));
                None
            }
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) if date < today => {
                    errors.push(TandemError::validation(
                        "date",
                        "Date must be today or in the future",
                    ));
                    None
                }
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(TandemError::validation("date", "Date must be YYYY-MM-DD"));
                    None
                }
            },
        };

        let time = match self.time.trim() {
            "" => {
                errors.push(TandemError::validation("time", "Time is required"));
                None
            }
            raw => match NaiveTime::parse_from_str(raw, "%H:%M") {
                Ok(time) => Some(time),
                Err(_) => {
                    errors.push(TandemError::validation("time", "Time must be HH:MM"));
                    None
                }
            },
        };

        let duration = match self.duration.trim() {
            "" => {
                errors.push(TandemError::validation("duration", "Duration is required"));
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(minutes) if minutes > 0 => Some(minutes),
                _ => {
                    errors.push(TandemError::validation(
                        "duration",
                        "Duration must be a positive number of minutes",
                    ));
                    None
                }
            },
        };

        TandemError::from_many(errors)?;

        let (Some(date), Some(time), Some(duration)) = (date, time, duration) else {
            return Err(TandemError::internal("schedule validation left a field unset"));
        };

        let topic = non_empty(self.topic).unwrap_or_else(|| format!("{} practice session", language));

        Ok(NewSession {
            partner_name: partner_name.to_string(),
            date: format!("{}T{}:00", date.format("%Y-%m-%d"), time.format("%H:%M")),
            duration,
            language: language.to_string(),
            topic,
            notes: non_empty(self.notes),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

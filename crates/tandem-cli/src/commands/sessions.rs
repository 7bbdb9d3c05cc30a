use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tandem_core::schedule::ScheduleRequest;
use tandem_core::session::Session;

use super::{format_session_date, user_error};
use crate::app::App;

fn write_session(out: &mut impl Write, session: &Session) -> Result<()> {
    writeln!(
        out,
        "  {}  {:>3} min  {:<9} {}: {}",
        format_session_date(&session.date),
        session.duration,
        session.language,
        session.partner_name,
        session.topic
    )?;
    if let Some(notes) = &session.notes {
        writeln!(out, "      {}", notes)?;
    }
    Ok(())
}

/// Prints upcoming sessions, then past ones.
pub fn list(app: &App, out: &mut impl Write) -> Result<()> {
    let store = app.sessions()?;

    writeln!(out, "Upcoming sessions ({})", store.upcoming_sessions().len())?;
    for session in store.upcoming_sessions() {
        write_session(out, session)?;
    }

    writeln!(out, "Past sessions ({})", store.past_sessions().len())?;
    for session in store.past_sessions() {
        write_session(out, session)?;
    }
    Ok(())
}

/// Schedules a session with a partner from the directory.
pub async fn schedule(
    app: &App,
    partner_id: &str,
    request: ScheduleRequest,
    today: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    let partner = app.partners().find(partner_id).map_err(user_error)?;

    let new_session = request
        .into_new_session(&partner.name, &partner.native_language, today)
        .map_err(user_error)?;

    let mut store = app.sessions()?;
    let session = store.add_session(new_session).map_err(user_error)?;

    app.simulate_round_trip().await;

    writeln!(
        out,
        "Session scheduled! Your session with {} is on {}.",
        session.partner_name,
        format_session_date(&session.date)
    )?;
    Ok(())
}

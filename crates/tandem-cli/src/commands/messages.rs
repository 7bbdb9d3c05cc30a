use std::io::Write;

use anyhow::Result;
use tandem_core::message::PresenceStatus;

use super::{format_message_time, user_error};
use crate::app::App;

fn status_label(status: PresenceStatus) -> &'static str {
    match status {
        PresenceStatus::Online => "online",
        PresenceStatus::Offline => "offline",
    }
}

/// Prints the conversation list. Unread conversations are starred.
pub fn list(app: &App, search: &str, out: &mut impl Write) -> Result<()> {
    let store = app.messages()?;
    let conversations = store.conversations(search);

    if conversations.is_empty() {
        writeln!(out, "No conversations found")?;
        return Ok(());
    }

    for conversation in conversations {
        let marker = if conversation.is_read { ' ' } else { '*' };
        let (when, text) = conversation
            .last_message
            .as_ref()
            .map(|m| (format_message_time(&m.timestamp), m.text.as_str()))
            .unwrap_or_default();
        writeln!(
            out,
            "{} [{}] {} ({})  {}  {}",
            marker,
            conversation.conversation_id,
            conversation.participant.name,
            status_label(conversation.participant.status),
            when,
            text
        )?;
    }
    Ok(())
}

/// Opens a conversation: it becomes active and is marked read.
///
/// An unknown id opens the first conversation instead.
pub fn show(app: &App, conversation_id: &str, out: &mut impl Write) -> Result<()> {
    let mut store = app.messages()?;
    store.set_active_conversation_id(conversation_id)?;

    let Some(thread) = store.active_thread() else {
        writeln!(out, "No conversations found")?;
        return Ok(());
    };

    writeln!(
        out,
        "{} ({}) [{}]",
        thread.participant.name,
        status_label(thread.participant.status),
        thread.participant.initials()
    )?;
    for message in &thread.messages {
        let author = if message.is_mine() {
            "me"
        } else {
            thread.participant.name.as_str()
        };
        writeln!(
            out,
            "  {}  {}: {}",
            format_message_time(&message.timestamp),
            author,
            message.text
        )?;
    }
    Ok(())
}

pub fn send(app: &App, conversation_id: &str, text: &str, out: &mut impl Write) -> Result<()> {
    let mut store = app.messages()?;

    match store.send_message(conversation_id, text).map_err(user_error)? {
        Some(message) => writeln!(out, "Sent at {}", format_message_time(&message.timestamp))?,
        None => writeln!(out, "No conversation with id '{}'; nothing sent.", conversation_id)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_app;

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_marks_unread() {
        let app = test_app();

        let printed = run(|out| list(&app, "", out));

        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("* [2] Hiroshi Tanaka (offline)"));
        assert!(lines[0].starts_with("  [1] Maria Rodriguez (online)"));
    }

    #[test]
    fn test_show_marks_read() {
        let app = test_app();

        let printed = run(|out| show(&app, "2", out));
        assert!(printed.starts_with("Hiroshi Tanaka (offline) [HT]"));

        let listed = run(|out| list(&app, "hiroshi", out));
        assert!(listed.starts_with("  [2]"));
    }

    #[test]
    fn test_show_unknown_opens_first() {
        let app = test_app();
        let printed = run(|out| show(&app, "missing", out));
        assert!(printed.starts_with("Maria Rodriguez"));
    }

    #[test]
    fn test_send_then_show() {
        let app = test_app();

        let sent = run(|out| send(&app, "3", "Merci, Sophie !", out));
        assert!(sent.starts_with("Sent at "));

        let shown = run(|out| show(&app, "3", out));
        assert!(shown.lines().last().unwrap().ends_with("me: Merci, Sophie !"));
    }

    #[test]
    fn test_send_unknown_and_blank() {
        let app = test_app();

        let printed = run(|out| send(&app, "42", "Hello?", out));
        assert_eq!(printed, "No conversation with id '42'; nothing sent.\n");

        let mut out = Vec::new();
        let err = send(&app, "1", "  ", &mut out).unwrap_err();
        assert!(err.to_string().contains("text: Message text must not be empty"));
    }
}

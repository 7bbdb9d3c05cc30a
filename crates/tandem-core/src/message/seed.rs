//! Demo conversations used when nothing has been persisted yet.

use std::collections::BTreeMap;

use super::model::{ME, Message, Participant, PresenceStatus, Thread};

fn participant(id: &str, name: &str, status: PresenceStatus) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
        status,
    }
}

fn message(id: &str, sender_id: &str, text: &str, timestamp: &str) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender_id.to_string(),
        text: text.to_string(),
        timestamp: timestamp.to_string(),
    }
}

/// The three seeded threads, keyed by conversation id.
pub fn threads() -> BTreeMap<String, Thread> {
    let threads = vec![
        Thread {
            conversation_id: "1".to_string(),
            participant: participant("1", "Maria Rodriguez", PresenceStatus::Online),
            messages: vec![
                message("1", "1", "Hola! How is your Spanish practice going?", "2025-03-19T14:30:00"),
                message("2", ME, "Muy bien, gracias! I've been practicing every day.", "2025-03-19T14:35:00"),
                message(
                    "3",
                    "1",
                    "That's great to hear! Do you want to focus on any specific topics in our next session?",
                    "2025-03-19T14:40:00",
                ),
                message(
                    "4",
                    ME,
                    "I'd like to practice ordering food and making reservations if that's okay.",
                    "2025-03-19T14:45:00",
                ),
                message(
                    "5",
                    "1",
                    "Perfect! We can role-play restaurant scenarios. Looking forward to our session tomorrow!",
                    "2025-03-19T15:30:00",
                ),
            ],
            unread: false,
        },
        Thread {
            conversation_id: "2".to_string(),
            participant: participant("2", "Hiroshi Tanaka", PresenceStatus::Offline),
            messages: vec![message(
                "1",
                "2",
                "Can we reschedule our session to next week?",
                "2025-03-19T10:15:00",
            )],
            unread: true,
        },
        Thread {
            conversation_id: "3".to_string(),
            participant: participant("3", "Sophie Dubois", PresenceStatus::Online),
            messages: vec![message(
                "1",
                "3",
                "I found a great resource for learning French idioms!",
                "2025-03-18T20:45:00",
            )],
            unread: false,
        },
    ];

    threads
        .into_iter()
        .map(|thread| (thread.conversation_id.clone(), thread))
        .collect()
}

//! Demo sessions used when nothing has been persisted yet.

use super::model::Session;

fn session(
    id: &str,
    partner_name: &str,
    date: &str,
    duration: u32,
    language: &str,
    topic: &str,
    notes: &str,
) -> Session {
    Session {
        id: id.to_string(),
        partner_name: partner_name.to_string(),
        date: date.to_string(),
        duration,
        language: language.to_string(),
        topic: topic.to_string(),
        notes: Some(notes.to_string()),
    }
}

/// The two seeded upcoming sessions.
pub fn upcoming_sessions() -> Vec<Session> {
    vec![
        session(
            "1",
            "Maria Rodriguez",
            "2025-03-22T14:00:00",
            30,
            "Spanish",
            "Restaurant conversations",
            "We'll practice common phrases used in restaurants, how to order food, ask for the bill, and make special requests.",
        ),
        session(
            "2",
            "Hiroshi Tanaka",
            "2025-03-24T09:00:00",
            45,
            "Japanese",
            "Travel vocabulary",
            "Focus on vocabulary for transportation, asking for directions, and booking accommodations.",
        ),
    ]
}

/// The two seeded past sessions.
pub fn past_sessions() -> Vec<Session> {
    vec![
        session(
            "3",
            "Sophie Dubois",
            "2025-03-15T16:30:00",
            60,
            "French",
            "Daily routines",
            "Practice describing your daily routine, using reflexive verbs and time expressions.",
        ),
        session(
            "4",
            "Li Wei",
            "2025-03-10T11:00:00",
            30,
            "Mandarin",
            "Basic introductions",
            "Learn how to introduce yourself, ask basic questions, and respond to common greetings.",
        ),
    ]
}

//! Profile domain model.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages a profile can name as native or learning.
pub const LANGUAGES: [&str; 11] = [
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Russian",
    "Japanese",
    "Korean",
    "Mandarin",
    "Arabic",
];

/// Self-assessed level in a learning language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Elementary,
    Intermediate,
    Advanced,
    Fluent,
    Native,
}

impl Proficiency {
    pub const ALL: [Proficiency; 6] = [
        Proficiency::Beginner,
        Proficiency::Elementary,
        Proficiency::Intermediate,
        Proficiency::Advanced,
        Proficiency::Fluent,
        Proficiency::Native,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Elementary => "Elementary",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Fluent => "Fluent",
            Proficiency::Native => "Native",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = String;

    /// Case-insensitive level name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|l| l.as_str()).collect();
                format!("unknown level '{}' (expected one of {})", s, names.join(", "))
            })
    }
}

/// The learner's public profile.
///
/// `learning_languages` keeps the order languages were added in;
/// `proficiency` has an entry for each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub native_language: String,
    pub learning_languages: Vec<String>,
    #[serde(default)]
    pub proficiency: BTreeMap<String, Proficiency>,
    pub availability: String,
    pub interests: String,
}

impl Profile {
    /// Up to two upper-cased initials of the name, for the avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// `(language, level)` pairs in learning order.
    pub fn learning(&self) -> impl Iterator<Item = (&str, Option<Proficiency>)> {
        self.learning_languages
            .iter()
            .map(|language| (language.as_str(), self.proficiency.get(language).copied()))
    }
}

/// The editable fields of a profile. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub native_language: Option<String>,
    pub availability: Option<String>,
    pub interests: Option<String>,
    /// Sets the level for a language, adding it to the learning list if new.
    pub learn: Vec<(String, Proficiency)>,
    /// Languages to stop learning.
    pub drop: Vec<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_parsing() {
        assert_eq!("advanced".parse::<Proficiency>(), Ok(Proficiency::Advanced));
        assert_eq!(" Native ".parse::<Proficiency>(), Ok(Proficiency::Native));
        assert!("expert".parse::<Proficiency>().unwrap_err().contains("Beginner, Elementary"));
    }

    #[test]
    fn test_profile_wire_format() {
        let profile = Profile {
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            bio: String::new(),
            native_language: "Portuguese".to_string(),
            learning_languages: vec!["Korean".to_string()],
            proficiency: BTreeMap::from([("Korean".to_string(), Proficiency::Elementary)]),
            availability: "Mornings".to_string(),
            interests: String::new(),
        };

        let json = serde_json::to_string(&profile).unwrap();

        assert!(json.contains("\"nativeLanguage\":\"Portuguese\""));
        assert!(json.contains("\"proficiency\":{\"Korean\":\"Elementary\"}"));
        assert_eq!(profile.initials(), "AS");
        assert_eq!(
            profile.learning().collect::<Vec<_>>(),
            vec![("Korean", Some(Proficiency::Elementary))]
        );
    }

    #[test]
    fn test_empty_update() {
        assert!(ProfileUpdate::default().is_empty());
        let update = ProfileUpdate {
            bio: Some("Hi".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}

//! Profile store backed by the `profile` key.

use std::sync::Arc;

use super::model::{LANGUAGES, Profile, ProfileUpdate};
use super::seed::default_profile;
use crate::account::LocalUser;
use crate::error::{Result, TandemError};
use crate::storage::{KeyValueStore, keys, load_json, save_json};

fn canonical_language(name: &str) -> Option<&'static str> {
    LANGUAGES
        .into_iter()
        .find(|language| language.eq_ignore_ascii_case(name.trim()))
}

/// Reads and edits the learner profile.
///
/// Nothing is written until the first successful edit; before that the
/// profile is the seeded default filled in from the logged-in user.
pub struct ProfileStore {
    storage: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// The current profile.
    ///
    /// The email always follows the logged-in user; it cannot be edited
    /// here.
    pub fn load(&self) -> Result<Profile> {
        let user: Option<LocalUser> = load_json(self.storage.as_ref(), keys::USER)?;

        let profile = match load_json::<Profile>(self.storage.as_ref(), keys::PROFILE)? {
            Some(mut stored) => {
                if let Some(user) = &user {
                    stored.email = user.email.clone();
                }
                stored
            }
            None => default_profile(user.as_ref()),
        };
        Ok(profile)
    }

    /// Applies an edit and saves the result.
    ///
    /// Every field is checked before anything is written: a blank name, a
    /// language outside [`LANGUAGES`], learning one's native language, or
    /// dropping a language that is not being learned are all reported
    /// together and leave the stored profile untouched.
    pub fn update(&self, update: ProfileUpdate) -> Result<Profile> {
        let mut profile = self.load()?;
        let mut errors = Vec::new();

        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                errors.push(TandemError::validation("name", "Name is required"));
            } else {
                profile.name = name.to_string();
            }
        }
        if let Some(bio) = update.bio {
            profile.bio = bio.trim().to_string();
        }
        if let Some(availability) = update.availability {
            profile.availability = availability.trim().to_string();
        }
        if let Some(interests) = update.interests {
            profile.interests = interests.trim().to_string();
        }
        if let Some(native) = update.native_language {
            match canonical_language(&native) {
                Some(language) => profile.native_language = language.to_string(),
                None => errors.push(TandemError::validation(
                    "nativeLanguage",
                    format!("Unknown language '{}'", native),
                )),
            }
        }

        for dropped in &update.drop {
            let position = profile
                .learning_languages
                .iter()
                .position(|language| language.eq_ignore_ascii_case(dropped.trim()));
            match position {
                Some(index) => {
                    let language = profile.learning_languages.remove(index);
                    profile.proficiency.remove(&language);
                }
                None => errors.push(TandemError::validation(
                    "learningLanguages",
                    format!("'{}' is not in your learning languages", dropped),
                )),
            }
        }

        for (requested, level) in update.learn {
            let Some(language) = canonical_language(&requested) else {
                errors.push(TandemError::validation(
                    "learningLanguages",
                    format!("Unknown language '{}'", requested),
                ));
                continue;
            };
            if language == profile.native_language {
                errors.push(TandemError::validation(
                    "learningLanguages",
                    format!("{} is already your native language", language),
                ));
                continue;
            }
            if !profile.learning_languages.iter().any(|l| l == language) {
                profile.learning_languages.push(language.to_string());
            }
            profile.proficiency.insert(language.to_string(), level);
        }

        TandemError::from_many(errors)?;

        save_json(self.storage.as_ref(), keys::PROFILE, &profile)?;
        tracing::info!(name = %profile.name, "Profile updated");
        Ok(profile)
    }
}

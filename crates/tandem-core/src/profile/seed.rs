//! Profile defaults for a learner who has not edited their profile yet.

use std::collections::BTreeMap;

use super::model::{Profile, Proficiency};
use crate::account::LocalUser;

/// The demo profile. Name and email come from the logged-in user, if any.
pub fn default_profile(user: Option<&LocalUser>) -> Profile {
    Profile {
        name: user.map(LocalUser::display_name).unwrap_or_default(),
        email: user.map(|u| u.email.clone()).unwrap_or_default(),
        bio: "Language enthusiast passionate about learning Spanish and French. I enjoy traveling and experiencing different cultures."
            .to_string(),
        native_language: "English".to_string(),
        learning_languages: vec!["Spanish".to_string(), "French".to_string()],
        proficiency: BTreeMap::from([
            ("Spanish".to_string(), Proficiency::Intermediate),
            ("French".to_string(), Proficiency::Beginner),
        ]),
        availability: "Evenings and weekends".to_string(),
        interests: "Travel, cooking, literature, music".to_string(),
    }
}

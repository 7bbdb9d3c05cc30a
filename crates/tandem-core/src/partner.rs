//! Language partner directory.
//!
//! A fixed list of demo partners with the simple filters the browse view
//! applies. Filtering is a linear scan; there is no index.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TandemError};

/// A language partner available for practice sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub native_language: String,
    pub learning_language: String,
    pub rating: f32,
    /// Free text such as "Evenings & Weekends".
    pub availability: String,
}

/// Browse filters. Empty fields match every partner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerFilter {
    /// Case-insensitive substring of the partner's name.
    pub query: String,
    /// Exact native language.
    pub native_language: Option<String>,
    /// Exact learning language.
    pub learning_language: Option<String>,
    /// Case-insensitive substring of the availability text.
    pub availability: Option<String>,
}

impl PartnerFilter {
    pub fn matches(&self, partner: &Partner) -> bool {
        let matches_search = partner
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let matches_language = self
            .native_language
            .as_deref()
            .is_none_or(|lang| lang.is_empty() || partner.native_language == lang);
        let matches_learning = self
            .learning_language
            .as_deref()
            .is_none_or(|lang| lang.is_empty() || partner.learning_language == lang);
        let matches_availability = self.availability.as_deref().is_none_or(|slot| {
            partner
                .availability
                .to_lowercase()
                .contains(&slot.to_lowercase())
        });

        matches_search && matches_language && matches_learning && matches_availability
    }
}

/// The set of partners a user can browse and schedule with.
#[derive(Debug, Clone)]
pub struct PartnerDirectory {
    partners: Vec<Partner>,
}

impl PartnerDirectory {
    pub fn new(partners: Vec<Partner>) -> Self {
        Self { partners }
    }

    /// The eight demo partners.
    pub fn seeded() -> Self {
        let partner = |id: &str, name: &str, native: &str, learning: &str, rating: f32, availability: &str| Partner {
            id: id.to_string(),
            name: name.to_string(),
            native_language: native.to_string(),
            learning_language: learning.to_string(),
            rating,
            availability: availability.to_string(),
        };

        Self::new(vec![
            partner("1", "Maria Rodriguez", "Spanish", "English", 4.8, "Evenings & Weekends"),
            partner("2", "Hiroshi Tanaka", "Japanese", "English", 4.9, "Mornings"),
            partner("3", "Sophie Dubois", "French", "German", 4.7, "Weekends"),
            partner("4", "Li Wei", "Mandarin", "English", 4.6, "Evenings"),
            partner("5", "Carlos Mendoza", "Spanish", "French", 4.5, "Afternoons"),
            partner("6", "Aisha Khan", "Arabic", "English", 4.9, "Flexible"),
            partner("7", "Paolo Rossi", "Italian", "German", 4.7, "Evenings"),
            partner("8", "Yuki Sato", "Japanese", "Spanish", 4.8, "Weekends"),
        ])
    }

    pub fn all(&self) -> &[Partner] {
        &self.partners
    }

    /// Looks up a partner by id.
    ///
    /// # Errors
    ///
    /// `TandemError::NotFound` when no partner has this id.
    pub fn find(&self, id: &str) -> Result<&Partner> {
        self.partners
            .iter()
            .find(|partner| partner.id == id)
            .ok_or_else(|| TandemError::not_found("partner", id))
    }

    /// Partners matching every set filter, in directory order.
    pub fn search(&self, filter: &PartnerFilter) -> Vec<&Partner> {
        self.partners
            .iter()
            .filter(|partner| filter.matches(partner))
            .collect()
    }

    /// Distinct native languages, sorted, for the language filter options.
    pub fn native_languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self
            .partners
            .iter()
            .map(|partner| partner.native_language.as_str())
            .collect();
        languages.sort_unstable();
        languages.dedup();
        languages
    }
}

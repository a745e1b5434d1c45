//! Locale support: the fixed language and education-level option lists, and
//! the UI label tables keyed by language name.
//!
//! Only some languages carry their own table. Any other value, supported or
//! not, resolves to the default language's table.

mod tables;

use serde::Serialize;

use crate::session::view::ActiveView;

pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_EDUCATION_LEVEL: &str = "Undergraduate";

/// Languages offered in the profile form, by display name.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "English",
    "Hindi (हिंदी)",
    "Bengali (বাংলা)",
    "Marathi (मराठी)",
    "Telugu (తెలుగు)",
    "Tamil (தமிழ்)",
    "Gujarati (ગુજરાતી)",
    "Urdu (اردو)",
    "Kannada (ಕನ್ನಡ)",
    "Odia (ଓଡ଼ିଆ)",
    "Malayalam (മലയാളം)",
    "Punjabi (ਪੰਜਾਬੀ)",
    "Assamese (অসমীয়া)",
    "Sanskrit (संस्कृतम्)",
];

pub const EDUCATION_LEVELS: &[&str] = &[
    "School",
    "High School",
    "Undergraduate",
    "Graduate",
    "Post Graduation",
    "Post Doc",
];

pub fn is_supported_language(name: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&name)
}

/// One quote per top-level view.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quotes {
    pub profile: &'static str,
    pub recommendations: &'static str,
    pub skills: &'static str,
    pub trends: &'static str,
}

/// Flat key → string table of UI labels for one language.
#[derive(Debug)]
pub struct LocaleTable {
    pub language: &'static str,
    labels: &'static [(&'static str, &'static str)],
    pub quotes: Quotes,
}

impl LocaleTable {
    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn labels(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.labels.iter().copied()
    }

    pub fn quote_for(&self, view: ActiveView) -> &'static str {
        match view {
            ActiveView::Profile => self.quotes.profile,
            ActiveView::Recommendations => self.quotes.recommendations,
            ActiveView::Skills => self.quotes.skills,
            ActiveView::Trends => self.quotes.trends,
        }
    }
}

/// Resolves the table for `language`, falling back to the default language.
pub fn table_for(language: &str) -> &'static LocaleTable {
    tables::ALL
        .iter()
        .copied()
        .find(|t| t.language == language)
        .unwrap_or(&tables::ENGLISH)
}

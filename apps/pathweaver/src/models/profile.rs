use serde::{Deserialize, Serialize};

use crate::locale::{DEFAULT_EDUCATION_LEVEL, DEFAULT_LANGUAGE};

/// The user's profile. Every gateway call reads it; only the profile view writes it.
///
/// `interests` and `skills` keep insertion order. Duplicates are rejected at
/// add time only (`add_skill` / `add_interest`); a wholesale replace via
/// [`ProfileUpdate`] is taken as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub education_level: String,
    pub major: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub goals: String,
    pub history: String,
    pub language: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            education_level: DEFAULT_EDUCATION_LEVEL.to_string(),
            major: String::new(),
            interests: Vec::new(),
            skills: Vec::new(),
            goals: String::new(),
            history: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Profile {
    /// Names of required fields that are blank. Recommendation generation
    /// needs both `name` and `major`.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.major.trim().is_empty() {
            missing.push("major");
        }
        missing
    }

    /// Returns true if the skill was appended.
    pub fn add_skill(&mut self, value: &str) -> bool {
        push_unique(&mut self.skills, value)
    }

    pub fn remove_skill(&mut self, value: &str) -> bool {
        remove_exact(&mut self.skills, value)
    }

    /// Returns true if the interest was appended.
    pub fn add_interest(&mut self, value: &str) -> bool {
        push_unique(&mut self.interests, value)
    }

    pub fn remove_interest(&mut self, value: &str) -> bool {
        remove_exact(&mut self.interests, value)
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || list.iter().any(|existing| existing == trimmed) {
        return false;
    }
    list.push(trimmed.to_string());
    true
}

fn remove_exact(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|existing| existing != value);
    list.len() != before
}

/// Partial profile edit. Each present field replaces the stored one wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub education_level: Option<String>,
    pub major: Option<String>,
    pub interests: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub goals: Option<String>,
    pub history: Option<String>,
    pub language: Option<String>,
}

impl ProfileUpdate {
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(level) = self.education_level {
            profile.education_level = level;
        }
        if let Some(major) = self.major {
            profile.major = major;
        }
        if let Some(interests) = self.interests {
            profile.interests = interests;
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        if let Some(goals) = self.goals {
            profile.goals = goals;
        }
        if let Some(history) = self.history {
            profile.history = history;
        }
        if let Some(language) = self.language {
            profile.language = language;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_form_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.education_level, "Undergraduate");
        assert_eq!(profile.language, "English");
        assert!(profile.name.is_empty());
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_missing_required_fields_reports_blank_name_and_major() {
        let profile = Profile {
            name: "   ".to_string(),
            ..Profile::default()
        };
        assert_eq!(profile.missing_required_fields(), vec!["name", "major"]);

        let complete = Profile {
            name: "Arjun".to_string(),
            major: "B.Tech".to_string(),
            ..Profile::default()
        };
        assert!(complete.missing_required_fields().is_empty());
    }

    #[test]
    fn test_add_skill_trims_and_rejects_duplicates() {
        let mut profile = Profile::default();
        assert!(profile.add_skill("  Python "));
        assert!(!profile.add_skill("Python"));
        assert!(!profile.add_skill("   "));
        assert!(profile.add_skill("Rust"));
        assert_eq!(profile.skills, vec!["Python", "Rust"]);
    }

    #[test]
    fn test_add_interest_preserves_insertion_order() {
        let mut profile = Profile::default();
        profile.add_interest("Space");
        profile.add_interest("AI");
        profile.add_interest("Finance");
        assert_eq!(profile.interests, vec!["Space", "AI", "Finance"]);
    }

    #[test]
    fn test_remove_is_exact_match() {
        let mut profile = Profile::default();
        profile.add_skill("Python");
        assert!(!profile.remove_skill("python"));
        assert!(profile.remove_skill("Python"));
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_update_replaces_only_present_fields() {
        let mut profile = Profile {
            name: "Arjun".to_string(),
            major: "B.Tech".to_string(),
            skills: vec!["Python".to_string()],
            ..Profile::default()
        };
        let update: ProfileUpdate = serde_json::from_value(serde_json::json!({
            "major": "Commerce",
            "language": "Hindi (हिंदी)"
        }))
        .unwrap();
        update.apply_to(&mut profile);

        assert_eq!(profile.name, "Arjun");
        assert_eq!(profile.major, "Commerce");
        assert_eq!(profile.language, "Hindi (हिंदी)");
        assert_eq!(profile.skills, vec!["Python"]);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let value = serde_json::to_value(Profile::default()).unwrap();
        assert!(value.get("educationLevel").is_some());
        assert!(value.get("education_level").is_none());
    }
}

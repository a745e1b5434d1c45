use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = String;

    /// Case-insensitive; anything outside the three levels is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Course,
    Article,
}

const VIDEO_HINTS: &[&str] = &["video", "youtube", "vimeo", "webinar"];
const COURSE_HINTS: &[&str] = &[
    "course", "coursera", "udemy", "edx", "nptel", "swayam", "bootcamp", "certification",
];

impl ResourceKind {
    /// Maps a free-form resource type onto the three kinds.
    /// Unrecognised values (documentation, blogs, books) count as articles.
    pub fn classify(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        if VIDEO_HINTS.iter().any(|h| lower.contains(h)) {
            ResourceKind::Video
        } else if COURSE_HINTS.iter().any(|h| lower.contains(h)) {
            ResourceKind::Course
        } else {
            ResourceKind::Article
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestion {
    pub name: String,
    pub description: String,
    pub importance: String,
    pub learning_resources: Vec<LearningResource>,
    pub difficulty: Difficulty,
    pub trending_status: bool,
}

//! Declared output schemas (Gemini OpenAPI subset) for the JSON contracts.

use serde_json::{json, Value};

pub const RECOMMENDATION_FIELDS: &[&str] = &[
    "title",
    "description",
    "alignmentScore",
    "salaryRange",
    "minSalary",
    "location",
    "requiredSkills",
    "roadmap",
    "marketOutlook",
];

pub const SKILL_FIELDS: &[&str] = &[
    "name",
    "description",
    "importance",
    "learningResources",
    "difficulty",
    "trendingStatus",
];

pub const DIFFICULTY_VALUES: &[&str] = &["Beginner", "Intermediate", "Advanced"];
pub const RESOURCE_KIND_VALUES: &[&str] = &["video", "course", "article"];

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

pub fn recommendations_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "alignmentScore": { "type": "INTEGER", "description": "0 to 100" },
                "salaryRange": { "type": "STRING" },
                "minSalary": { "type": "NUMBER" },
                "location": { "type": "STRING" },
                "requiredSkills": string_array(),
                "roadmap": string_array(),
                "marketOutlook": { "type": "STRING" }
            },
            "required": RECOMMENDATION_FIELDS
        }
    })
}

pub fn skills_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "description": { "type": "STRING" },
                "importance": { "type": "STRING" },
                "learningResources": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "type": {
                                "type": "STRING",
                                "format": "enum",
                                "enum": RESOURCE_KIND_VALUES
                            }
                        },
                        "required": ["title", "type"]
                    }
                },
                "difficulty": {
                    "type": "STRING",
                    "format": "enum",
                    "enum": DIFFICULTY_VALUES
                },
                "trendingStatus": { "type": "BOOLEAN" }
            },
            "required": SKILL_FIELDS
        }
    })
}

//! Parse-then-validate for structured oracle output.
//!
//! Oracle JSON is untrusted text. It is decoded into loose wire shapes first,
//! then checked and converted into the typed models. Anything that cannot be
//! made to fit becomes a `GatewayError`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::GatewayError;
use crate::models::{CareerRecommendation, Difficulty, LearningResource, ResourceKind, SkillSuggestion};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommendation {
    title: String,
    description: String,
    alignment_score: f64,
    salary_range: String,
    min_salary: f64,
    location: String,
    required_skills: Vec<String>,
    roadmap: Vec<String>,
    market_outlook: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSkill {
    name: String,
    description: String,
    importance: String,
    learning_resources: Vec<RawResource>,
    difficulty: String,
    trending_status: bool,
}

#[derive(Debug, Deserialize)]
struct RawResource {
    title: String,
    #[serde(rename = "type", default)]
    kind: String,
}

/// Parses a JSON array. Blank text counts as an empty array.
fn parse_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, GatewayError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(GatewayError::Malformed)
}

pub fn recommendations(text: &str) -> Result<Vec<CareerRecommendation>, GatewayError> {
    parse_array::<RawRecommendation>(text)?
        .into_iter()
        .enumerate()
        .map(|(i, raw)| recommendation(raw).map_err(|e| schema_error("recommendation", i, e)))
        .collect()
}

pub fn skills(text: &str) -> Result<Vec<SkillSuggestion>, GatewayError> {
    parse_array::<RawSkill>(text)?
        .into_iter()
        .enumerate()
        .map(|(i, raw)| skill(raw).map_err(|e| schema_error("skill", i, e)))
        .collect()
}

fn schema_error(kind: &str, index: usize, reason: String) -> GatewayError {
    GatewayError::Schema(format!("{kind} #{index}: {reason}"))
}

fn recommendation(raw: RawRecommendation) -> Result<CareerRecommendation, String> {
    if raw.title.trim().is_empty() {
        return Err("title is blank".to_string());
    }
    if !raw.alignment_score.is_finite() {
        return Err("alignmentScore is not a finite number".to_string());
    }
    if !raw.min_salary.is_finite() || raw.min_salary < 0.0 {
        return Err(format!("minSalary {} is not a non-negative number", raw.min_salary));
    }

    Ok(CareerRecommendation {
        title: raw.title,
        description: raw.description,
        alignment_score: raw.alignment_score.round().clamp(0.0, 100.0) as u8,
        salary_range: raw.salary_range,
        min_salary: raw.min_salary,
        location: raw.location,
        required_skills: raw.required_skills,
        roadmap: raw.roadmap,
        market_outlook: raw.market_outlook,
    })
}

fn skill(raw: RawSkill) -> Result<SkillSuggestion, String> {
    if raw.name.trim().is_empty() {
        return Err("name is blank".to_string());
    }
    let difficulty: Difficulty = raw.difficulty.parse()?;

    Ok(SkillSuggestion {
        name: raw.name,
        description: raw.description,
        importance: raw.importance,
        learning_resources: raw
            .learning_resources
            .into_iter()
            .map(|r| LearningResource {
                title: r.title,
                kind: ResourceKind::classify(&r.kind),
            })
            .collect(),
        difficulty,
        trending_status: raw.trending_status,
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from oracle output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

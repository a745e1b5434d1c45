//! Schema Contracts — the fixed prompt template, steering instruction and
//! output schema for each gateway operation.
//!
//! Contracts are plain data. Building one twice from the same inputs yields
//! byte-identical prompts and schemas.

pub mod prompts;
pub mod schema;

use serde_json::Value;

use crate::models::Profile;
use crate::oracle::{OracleMessage, OracleRequest};
use prompts::{
    CHAT_SYSTEM, INDIA_CONVENTIONS, LANGUAGE_MANDATE, RECOMMENDATION_COUNT,
    RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM, SKILL_COUNT, SKILL_PROMPT_TEMPLATE,
    SKILL_SYSTEM, TRENDS_PROMPT_TEMPLATE, TRENDS_SYSTEM,
};

/// Shown in prompts for blank profile fields.
const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub system_instruction: String,
    pub prompt: String,
    pub response_schema: Option<Value>,
    pub search_grounding: bool,
    pub thinking_budget: Option<u32>,
}

impl Contract {
    pub fn into_request(self, history: Vec<OracleMessage>) -> OracleRequest {
        OracleRequest {
            system_instruction: self.system_instruction,
            history,
            prompt: self.prompt,
            response_schema: self.response_schema,
            search_grounding: self.search_grounding,
            thinking_budget: self.thinking_budget,
        }
    }
}

/// profile → recommendations
pub fn recommendations(profile: &Profile) -> Contract {
    let count = RECOMMENDATION_COUNT.to_string();
    let language = profile.language.as_str();
    Contract {
        system_instruction: steering(RECOMMENDATION_SYSTEM, language, &[("count", count.as_str())]),
        prompt: fill_template(
            RECOMMENDATION_PROMPT_TEMPLATE,
            &[
                ("language", language),
                ("name", profile.name.as_str()),
                ("education_level", or_unspecified(&profile.education_level)),
                ("major", profile.major.as_str()),
                ("interests", join_or_unspecified(&profile.interests).as_str()),
                ("skills", join_or_unspecified(&profile.skills).as_str()),
                ("goals", or_unspecified(&profile.goals)),
                ("history", or_unspecified(&profile.history)),
                ("count", count.as_str()),
            ],
        ),
        response_schema: Some(schema::recommendations_schema()),
        search_grounding: false,
        thinking_budget: Some(0),
    }
}

/// profile → skills
pub fn skills(profile: &Profile) -> Contract {
    let language = profile.language.as_str();
    Contract {
        system_instruction: steering(SKILL_SYSTEM, language, &[]),
        prompt: fill_template(
            SKILL_PROMPT_TEMPLATE,
            &[
                ("count", SKILL_COUNT.to_string().as_str()),
                ("name", profile.name.as_str()),
                ("major", profile.major.as_str()),
                ("interests", join_or_unspecified(&profile.interests).as_str()),
                ("skills", join_or_unspecified(&profile.skills).as_str()),
                ("language", language),
            ],
        ),
        response_schema: Some(schema::skills_schema()),
        search_grounding: false,
        thinking_budget: None,
    }
}

/// history + message → reply. The history travels separately in the request.
pub fn chat(message: &str, language: &str) -> Contract {
    Contract {
        system_instruction: fill_template(CHAT_SYSTEM, &[("language", language)]),
        prompt: message.to_string(),
        response_schema: None,
        search_grounding: false,
        thinking_budget: None,
    }
}

/// query → trend report, search-grounded free text.
pub fn market_trends(query: &str, language: &str) -> Contract {
    Contract {
        system_instruction: steering(TRENDS_SYSTEM, language, &[]),
        prompt: fill_template(
            TRENDS_PROMPT_TEMPLATE,
            &[("query", query), ("language", language)],
        ),
        response_schema: None,
        search_grounding: true,
        thinking_budget: None,
    }
}

fn steering(template: &str, language: &str, extra: &[(&str, &str)]) -> String {
    let mandate = fill_template(LANGUAGE_MANDATE, &[("language", language)]);
    let mut values: Vec<(&str, &str)> = vec![
        ("india_conventions", INDIA_CONVENTIONS),
        ("language_mandate", mandate.as_str()),
    ];
    values.extend_from_slice(extra);
    fill_template(template, &values)
}

/// Single-pass `{key}` substitution. Substituted values are never re-scanned,
/// so user text containing braces cannot inject other fields. Unknown
/// placeholders are left as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (close, *v))
        });
        match replaced {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

fn join_or_unspecified(values: &[String]) -> String {
    if values.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        values.join(", ")
    }
}

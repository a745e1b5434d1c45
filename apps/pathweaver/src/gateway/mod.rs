//! Model Gateway — one stateless function per contract.
//!
//! Each operation builds its contract, makes exactly one oracle round trip and
//! turns the reply into typed models. No retries, no caching, no streaming.
//! Output content is not deterministic; only its shape is.

pub mod validate;

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::contracts;
use crate::models::{
    CareerRecommendation, ChatMessage, GroundingSource, Profile, SkillSuggestion, TrendReport,
};
use crate::models::trends::UNTITLED_SOURCE;
use crate::oracle::{GroundingChunk, Oracle, OracleError, OracleMessage};

/// Stored for a chat reply that came back empty.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "...";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("oracle call failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("oracle returned malformed JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("oracle output violates the declared schema: {0}")]
    Schema(String),
}

#[derive(Clone)]
pub struct Gateway {
    oracle: Arc<dyn Oracle>,
}

impl Gateway {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    pub async fn fetch_recommendations(
        &self,
        profile: &Profile,
    ) -> Result<Vec<CareerRecommendation>, GatewayError> {
        let request = contracts::recommendations(profile).into_request(Vec::new());
        let reply = self.oracle.generate(&request).await.map_err(|e| {
            warn!("Recommendation call failed: {e}");
            GatewayError::from(e)
        })?;
        let recommendations = validate::recommendations(&reply.text).inspect_err(|e| {
            warn!("Recommendation output rejected: {e}");
        })?;
        info!("Received {} career recommendations", recommendations.len());
        Ok(recommendations)
    }

    pub async fn fetch_skill_suggestions(
        &self,
        profile: &Profile,
    ) -> Result<Vec<SkillSuggestion>, GatewayError> {
        let request = contracts::skills(profile).into_request(Vec::new());
        let reply = self.oracle.generate(&request).await.map_err(|e| {
            warn!("Skill suggestion call failed: {e}");
            GatewayError::from(e)
        })?;
        let skills = validate::skills(&reply.text).inspect_err(|e| {
            warn!("Skill suggestion output rejected: {e}");
        })?;
        info!("Received {} skill suggestions", skills.len());
        Ok(skills)
    }

    /// Sends `history` in order, then `message` as the final user turn.
    /// An empty reply is returned as [`EMPTY_REPLY_PLACEHOLDER`].
    pub async fn send_chat_turn(
        &self,
        history: &[ChatMessage],
        message: &str,
        language: &str,
    ) -> Result<String, GatewayError> {
        let history = history
            .iter()
            .map(|m| OracleMessage {
                role: m.role,
                text: m.text.clone(),
            })
            .collect();
        let request = contracts::chat(message, language).into_request(history);
        let reply = self.oracle.generate(&request).await.map_err(|e| {
            warn!("Chat call failed: {e}");
            GatewayError::from(e)
        })?;

        if reply.text.trim().is_empty() {
            return Ok(EMPTY_REPLY_PLACEHOLDER.to_string());
        }
        Ok(reply.text)
    }

    /// Search-grounded trend report. Missing grounding metadata yields no sources.
    pub async fn fetch_market_trends(
        &self,
        query: &str,
        language: &str,
    ) -> Result<TrendReport, GatewayError> {
        let request = contracts::market_trends(query, language).into_request(Vec::new());
        let reply = self.oracle.generate(&request).await.map_err(|e| {
            warn!("Market trend call failed: {e}");
            GatewayError::from(e)
        })?;
        let sources = citations(&reply.grounding_chunks);
        info!("Trend report for {query:?} cites {} sources", sources.len());
        Ok(TrendReport {
            text: reply.text,
            sources,
        })
    }
}

/// Keeps chunks that carry a web citation, in order. Missing titles get a
/// placeholder and missing URIs become empty strings; neither drops the entry.
pub fn citations(chunks: &[GroundingChunk]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| GroundingSource {
            title: web
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED_SOURCE.to_string()),
            uri: web.uri.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;
    use crate::oracle::stub::{reply, StubOracle};
    use crate::oracle::WebSource;
    use serde_json::json;

    const RECS: &str = "career strategist";
    const SKILLS: &str = "skill acquisition expert";
    const CHAT: &str = "Pathweaver Assistant";
    const TRENDS: &str = "market intelligence analyst";

    fn gateway(stub: StubOracle) -> (Gateway, Arc<StubOracle>) {
        let stub = Arc::new(stub);
        (Gateway::new(stub.clone()), stub)
    }

    fn arjun() -> Profile {
        Profile {
            name: "Arjun".to_string(),
            major: "B.Tech".to_string(),
            language: "English".to_string(),
            skills: vec!["Python".to_string()],
            interests: vec!["AI".to_string()],
            ..Profile::default()
        }
    }

    fn rec(title: &str, min_salary: u32) -> serde_json::Value {
        json!({
            "title": title,
            "description": "d",
            "alignmentScore": 80,
            "salaryRange": "₹",
            "minSalary": min_salary,
            "location": "Pune",
            "requiredSkills": [],
            "roadmap": [],
            "marketOutlook": "steady"
        })
    }

    fn msg(role: ChatRole, text: &str, timestamp: i64) -> ChatMessage {
        ChatMessage {
            role,
            text: text.to_string(),
            timestamp,
        }
    }

    #[tokio::test]
    async fn test_fetch_recommendations_sends_contract_and_parses() {
        let body = json!([rec("A", 600000), rec("B", 900000), rec("C", 750000)]).to_string();
        let (gateway, stub) = gateway(StubOracle::new().on_text(RECS, &body));

        let recs = gateway.fetch_recommendations(&arjun()).await.unwrap();
        assert_eq!(recs.len(), 3);

        let sent = stub.requests();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].prompt.contains("Arjun"));
        assert!(sent[0].prompt.contains("B.Tech"));
        assert!(sent[0].prompt.contains("English"));
        assert!(sent[0].response_schema.is_some());
        assert!(sent[0].history.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_recommendations_malformed_is_gateway_error() {
        let (gateway, _) = gateway(StubOracle::new().on_text(RECS, "not json at all"));
        let err = gateway.fetch_recommendations(&arjun()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_fetch_recommendations_oracle_failure_is_gateway_error() {
        let (gateway, _) = gateway(StubOracle::new().on_fail(RECS));
        let err = gateway.fetch_recommendations(&arjun()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Oracle(OracleError::Api { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_fetch_skill_suggestions_empty_array_is_success() {
        let (gateway, _) = gateway(StubOracle::new().on_text(SKILLS, "[]"));
        let skills = gateway.fetch_skill_suggestions(&arjun()).await.unwrap();
        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn test_send_chat_turn_preserves_history_order_and_roles() {
        let (gateway, stub) = gateway(StubOracle::new().on_text(CHAT, "Try a data internship."));
        let history = vec![
            msg(ChatRole::User, "Hi", 1),
            msg(ChatRole::Model, "Hello! How can I help?", 2),
            msg(ChatRole::User, "I like maths", 3),
            msg(ChatRole::Model, "Consider analytics.", 4),
        ];

        let answer = gateway
            .send_chat_turn(&history, "What first?", "English")
            .await
            .unwrap();
        assert_eq!(answer, "Try a data internship.");

        let sent = &stub.requests()[0];
        let roles: Vec<ChatRole> = sent.history.iter().map(|m| m.role).collect();
        let texts: Vec<&str> = sent.history.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            roles,
            vec![ChatRole::User, ChatRole::Model, ChatRole::User, ChatRole::Model]
        );
        assert_eq!(
            texts,
            vec!["Hi", "Hello! How can I help?", "I like maths", "Consider analytics."]
        );
        assert_eq!(sent.prompt, "What first?");
    }

    #[tokio::test]
    async fn test_send_chat_turn_empty_reply_uses_placeholder() {
        let (gateway, _) = gateway(StubOracle::new().on_text(CHAT, "  "));
        let answer = gateway.send_chat_turn(&[], "hello", "English").await.unwrap();
        assert_eq!(answer, EMPTY_REPLY_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_market_trends_without_grounding_has_no_sources() {
        let (gateway, stub) = gateway(StubOracle::new().on_text(TRENDS, "AI hiring is up."));
        let report = gateway.fetch_market_trends("AI jobs", "English").await.unwrap();
        assert_eq!(
            report,
            TrendReport {
                text: "AI hiring is up.".to_string(),
                sources: vec![],
            }
        );
        assert!(stub.requests()[0].search_grounding);
    }

    #[tokio::test]
    async fn test_market_trends_maps_web_citations() {
        let chunks = vec![
            GroundingChunk {
                web: Some(WebSource {
                    uri: Some("https://nasscom.in/report".to_string()),
                    title: Some("NASSCOM".to_string()),
                }),
            },
            GroundingChunk { web: None },
            GroundingChunk {
                web: Some(WebSource {
                    uri: None,
                    title: None,
                }),
            },
        ];
        let stub = StubOracle::new().on(
            TRENDS,
            crate::oracle::stub::Scripted::Reply(reply("Report", chunks)),
        );
        let (gateway, _) = gateway(stub);

        let report = gateway.fetch_market_trends("AI jobs", "English").await.unwrap();
        assert_eq!(
            report.sources,
            vec![
                GroundingSource {
                    title: "NASSCOM".to_string(),
                    uri: "https://nasscom.in/report".to_string(),
                },
                GroundingSource {
                    title: UNTITLED_SOURCE.to_string(),
                    uri: String::new(),
                },
            ]
        );
    }
}

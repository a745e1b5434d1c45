//! Oracle boundary — the generative model provider behind a narrow trait.
//!
//! ARCHITECTURAL RULE: only `gateway` talks to an `Oracle`. Nothing else in
//! Pathweaver builds provider requests.
//!
//! The oracle is stateless across calls: chat context travels in
//! `OracleRequest::history` on every request.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod gemini;
#[cfg(test)]
pub mod stub;

pub use gemini::GeminiClient;

use crate::models::ChatRole;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Oracle did not answer within {secs}s")]
    Timeout { secs: u64 },
}

/// One prior turn of a conversation, in oracle-native role terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleMessage {
    pub role: ChatRole,
    pub text: String,
}

/// A single generation request.
///
/// `prompt` is always sent last, as a user turn, after `history`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleRequest {
    pub system_instruction: String,
    pub history: Vec<OracleMessage>,
    pub prompt: String,
    /// When set, the oracle must answer with JSON text matching this schema.
    pub response_schema: Option<serde_json::Value>,
    /// Enables the provider's web-search grounding tool.
    pub search_grounding: bool,
    pub thinking_budget: Option<u32>,
}

/// Citation target attached to a grounded answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// A grounding chunk. Only chunks carrying `web` are citations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleReply {
    pub text: String,
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[async_trait]
pub trait Oracle: Send + Sync {
    /// One request/response round trip. Implementations must not retry.
    async fn generate(&self, request: &OracleRequest) -> Result<OracleReply, OracleError>;
}

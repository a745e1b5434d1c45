//! Gemini `generateContent` client — the production `Oracle`.
//!
//! Model: gemini-3-flash-preview (hardcoded, do not make configurable).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{GroundingChunk, Oracle, OracleError, OracleReply, OracleRequest};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for every oracle call in Pathweaver.
pub const MODEL: &str = "gemini-3-flash-preview";

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: SystemInstruction<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate plus its grounding chunks.
    fn into_reply(self) -> OracleReply {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return OracleReply::default();
        };
        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();
        let grounding_chunks = candidate
            .grounding_metadata
            .map(|g| g.grounding_chunks)
            .unwrap_or_default();
        OracleReply {
            text,
            grounding_chunks,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the Gemini REST API. No retries: a failed call is reported as-is.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// `timeout` of `None` waits for the provider indefinitely.
    pub fn new(api_key: String, timeout: Option<Duration>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            timeout,
        }
    }

    fn endpoint() -> String {
        format!("{GEMINI_API_BASE}/{MODEL}:generateContent")
    }

    async fn send(&self, body: &GenerateContentRequest<'_>) -> Result<OracleReply, OracleError> {
        let response = self
            .client
            .post(Self::endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(OracleError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Oracle call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed.into_reply())
    }
}

/// Builds the provider request body. History turns come first, in order,
/// followed by the prompt as the final user turn.
fn build_request(request: &OracleRequest) -> GenerateContentRequest<'_> {
    let mut contents: Vec<Content<'_>> = request
        .history
        .iter()
        .map(|m| Content {
            role: m.role.as_str(),
            parts: vec![TextPart { text: &m.text }],
        })
        .collect();
    contents.push(Content {
        role: "user",
        parts: vec![TextPart {
            text: &request.prompt,
        }],
    });

    let generation_config = if request.response_schema.is_some() || request.thinking_budget.is_some()
    {
        Some(GenerationConfig {
            response_mime_type: request
                .response_schema
                .as_ref()
                .map(|_| "application/json"),
            response_schema: request.response_schema.as_ref(),
            thinking_config: request.thinking_budget.map(|thinking_budget| ThinkingConfig {
                thinking_budget,
            }),
        })
    } else {
        None
    };

    let tools = if request.search_grounding {
        vec![serde_json::json!({ "googleSearch": {} })]
    } else {
        Vec::new()
    };

    GenerateContentRequest {
        contents,
        system_instruction: SystemInstruction {
            parts: vec![TextPart {
                text: &request.system_instruction,
            }],
        },
        generation_config,
        tools,
    }
}

#[async_trait]
impl Oracle for GeminiClient {
    async fn generate(&self, request: &OracleRequest) -> Result<OracleReply, OracleError> {
        let body = build_request(request);
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(&body))
                .await
                .map_err(|_| OracleError::Timeout {
                    secs: limit.as_secs(),
                })?,
            None => self.send(&body).await,
        }
    }
}

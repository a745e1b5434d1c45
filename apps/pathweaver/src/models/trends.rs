use serde::{Deserialize, Serialize};

/// Title used for a cited web source that carries no title of its own.
pub const UNTITLED_SOURCE: &str = "External Source";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// Result of a search-grounded market trend query. Replaced wholesale per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

use serde::{Deserialize, Serialize};

/// One career path suggested by the oracle. Immutable once received.
///
/// `roadmap` is ordered: each step builds on the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub description: String,
    /// 0 – 100 fit between the profile and this path.
    pub alignment_score: u8,
    /// Display string, e.g. "₹8,00,000 - ₹15,00,000".
    pub salary_range: String,
    /// Comparable magnitude used for sorting only.
    pub min_salary: f64,
    pub location: String,
    pub required_skills: Vec<String>,
    pub roadmap: Vec<String>,
    pub market_outlook: String,
}

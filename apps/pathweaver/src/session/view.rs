//! Derived view data. Pure functions over the store's current values.

use serde::{Deserialize, Serialize};

use crate::models::CareerRecommendation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Profile,
    Recommendations,
    Skills,
    Trends,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Alignment score, highest first.
    #[default]
    Alignment,
    /// `minSalary`, highest first.
    Salary,
    /// Location, A to Z.
    Location,
}

/// Case-insensitive substring match on title or location.
/// A blank filter passes everything through.
pub fn matches_filter(rec: &CareerRecommendation, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    rec.title.to_lowercase().contains(&needle) || rec.location.to_lowercase().contains(&needle)
}

/// Filters then stably sorts a copy of `list`. The input order is untouched.
pub fn arrange(
    list: &[CareerRecommendation],
    filter: &str,
    key: SortKey,
) -> Vec<CareerRecommendation> {
    let mut out: Vec<CareerRecommendation> = list
        .iter()
        .filter(|r| matches_filter(r, filter))
        .cloned()
        .collect();

    match key {
        SortKey::Alignment => out.sort_by(|a, b| b.alignment_score.cmp(&a.alignment_score)),
        SortKey::Salary => out.sort_by(|a, b| b.min_salary.total_cmp(&a.min_salary)),
        SortKey::Location => out.sort_by(|a, b| a.location.cmp(&b.location)),
    }
    out
}

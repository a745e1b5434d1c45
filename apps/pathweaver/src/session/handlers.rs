//! Axum route handlers for the session API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::locale::{self, Quotes, EDUCATION_LEVELS, SUPPORTED_LANGUAGES};
use crate::models::{
    CareerRecommendation, ChatMessage, Profile, ProfileUpdate, SkillSuggestion, TrendReport,
};
use crate::session::view::{ActiveView, SortKey, Theme};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Number of recommendations received, or null if that fetch failed.
    pub recommendations: Option<usize>,
    pub skills: Option<usize>,
    /// Localised retry notice when either fetch failed.
    pub notice: Option<String>,
    /// True when a newer submission overtook this one; nothing was stored.
    pub superseded: bool,
    pub view: ActiveView,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub sort: SortKey,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub loading: bool,
    pub sort: SortKey,
    pub items: Vec<CareerRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub loading: bool,
    pub items: Vec<SkillSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct TrendsRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub loading: bool,
    pub report: Option<TrendReport>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ViewBody {
    pub view: ActiveView,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: ActiveView,
    pub quote: &'static str,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocaleResponse {
    /// Language that was asked for.
    pub requested: String,
    /// Whether `requested` is one of the offered languages.
    pub supported: bool,
    /// Language whose table was served.
    pub language: &'static str,
    pub labels: BTreeMap<&'static str, &'static str>,
    pub quotes: Quotes,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub languages: &'static [&'static str],
    pub education_levels: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.controller.profile().await)
}

/// PUT /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Json<Profile> {
    Json(state.controller.update_profile(update).await)
}

/// POST /api/v1/profile/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(req): Json<ValueRequest>,
) -> Json<Profile> {
    Json(state.controller.add_skill(&req.value).await)
}

/// DELETE /api/v1/profile/skills/:value
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.controller.remove_skill(&value).await?))
}

/// POST /api/v1/profile/interests
pub async fn handle_add_interest(
    State(state): State<AppState>,
    Json(req): Json<ValueRequest>,
) -> Json<Profile> {
    Json(state.controller.add_interest(&req.value).await)
}

/// DELETE /api/v1/profile/interests/:value
pub async fn handle_remove_interest(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.controller.remove_interest(&value).await?))
}

/// POST /api/v1/profile/submit
///
/// Validates the profile, then fetches recommendations and skills together.
/// A failure on either side is reported as a retry notice; the other side's
/// results are kept.
pub async fn handle_submit(
    State(state): State<AppState>,
) -> Result<Json<SubmitResponse>, AppError> {
    let outcome = state.controller.submit_profile().await?;
    let notice = if outcome.any_failed() {
        let language = state.controller.read(|s| s.profile.language.clone()).await;
        locale::table_for(&language)
            .label("retryNotice")
            .map(str::to_string)
    } else {
        None
    };

    Ok(Json(SubmitResponse {
        recommendations: outcome.recommendations.as_ref().ok().copied(),
        skills: outcome.skills.as_ref().ok().copied(),
        notice,
        superseded: !outcome.applied,
        view: state.controller.active_view().await,
    }))
}

/// GET /api/v1/recommendations?filter=&sort=
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationsQuery>,
) -> Json<RecommendationsResponse> {
    let (loading, items) = state
        .controller
        .recommendations_view(&params.filter, params.sort)
        .await;
    Json(RecommendationsResponse {
        loading,
        sort: params.sort,
        items,
    })
}

/// GET /api/v1/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    let (loading, items) = state.controller.skills_view().await;
    Json(SkillsResponse { loading, items })
}

/// GET /api/v1/chat
pub async fn handle_chat_history(State(state): State<AppState>) -> Json<ChatHistoryResponse> {
    Json(ChatHistoryResponse {
        messages: state.controller.chat_history().await,
    })
}

/// POST /api/v1/chat
///
/// Returns the model's reply. The user's message is logged even if this fails.
pub async fn handle_send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    Ok(Json(state.controller.send_chat(&req.message).await?))
}

/// GET /api/v1/trends
pub async fn handle_get_trends(State(state): State<AppState>) -> Json<TrendsResponse> {
    let (loading, report) = state.controller.trend_report().await;
    Json(TrendsResponse { loading, report })
}

/// POST /api/v1/trends
pub async fn handle_query_trends(
    State(state): State<AppState>,
    Json(req): Json<TrendsRequest>,
) -> Result<Json<TrendReport>, AppError> {
    Ok(Json(state.controller.query_trends(&req.query).await?))
}

async fn view_response(state: &AppState, view: ActiveView) -> ViewResponse {
    let language = state.controller.read(|s| s.profile.language.clone()).await;
    ViewResponse {
        view,
        quote: locale::table_for(&language).quote_for(view),
    }
}

/// GET /api/v1/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let view = state.controller.active_view().await;
    Json(view_response(&state, view).await)
}

/// PUT /api/v1/view
pub async fn handle_set_view(
    State(state): State<AppState>,
    Json(body): Json<ViewBody>,
) -> Json<ViewResponse> {
    let view = state.controller.set_active_view(body.view).await;
    Json(view_response(&state, view).await)
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.controller.theme().await,
    })
}

/// PUT /api/v1/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.controller.set_theme(body.theme).await,
    })
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.controller.toggle_theme().await,
    })
}

/// GET /api/v1/locale?language=
///
/// Without `language`, serves the profile's language.
pub async fn handle_locale(
    State(state): State<AppState>,
    Query(params): Query<LocaleQuery>,
) -> Json<LocaleResponse> {
    let requested = match params.language {
        Some(language) => language,
        None => state.controller.read(|s| s.profile.language.clone()).await,
    };
    let table = locale::table_for(&requested);
    Json(LocaleResponse {
        supported: locale::is_supported_language(&requested),
        requested,
        language: table.language,
        labels: table.labels().collect(),
        quotes: table.quotes,
    })
}

/// GET /api/v1/options
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        languages: SUPPORTED_LANGUAGES,
        education_levels: EDUCATION_LEVELS,
    })
}

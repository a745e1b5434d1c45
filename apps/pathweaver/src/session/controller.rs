//! View Orchestrator transitions over the owned `Store`.
//!
//! The store lock is never held across an oracle call: every transition takes
//! a snapshot, releases the lock, awaits the gateway, then re-locks to apply.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::gateway::{Gateway, GatewayError};
use crate::models::{
    CareerRecommendation, ChatMessage, ChatRole, Profile, ProfileUpdate, SkillSuggestion,
    TrendReport,
};
use crate::session::store::Store;
use crate::session::view::{arrange, ActiveView, SortKey, Theme};

/// Result of one profile submission. Each sibling fetch settles on its own.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub recommendations: Result<usize, GatewayError>,
    pub skills: Result<usize, GatewayError>,
    /// False when a newer submission superseded this one.
    pub applied: bool,
}

impl SubmissionOutcome {
    pub fn any_failed(&self) -> bool {
        self.recommendations.is_err() || self.skills.is_err()
    }
}

pub struct Controller {
    gateway: Gateway,
    store: Mutex<Store>,
}

impl Controller {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            store: Mutex::new(Store::default()),
        }
    }

    /// Runs `f` against the current store under the lock.
    pub async fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let store = self.store.lock().await;
        f(&store)
    }

    // ── Profile ─────────────────────────────────────────────────────────────

    pub async fn profile(&self) -> Profile {
        self.read(|s| s.profile.clone()).await
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Profile {
        let mut store = self.store.lock().await;
        update.apply_to(&mut store.profile);
        store.profile.clone()
    }

    pub async fn add_skill(&self, value: &str) -> Profile {
        let mut store = self.store.lock().await;
        store.profile.add_skill(value);
        store.profile.clone()
    }

    pub async fn remove_skill(&self, value: &str) -> Result<Profile, AppError> {
        let mut store = self.store.lock().await;
        if !store.profile.remove_skill(value) {
            return Err(AppError::NotFound(format!("Skill '{value}' is not in the profile")));
        }
        Ok(store.profile.clone())
    }

    pub async fn add_interest(&self, value: &str) -> Profile {
        let mut store = self.store.lock().await;
        store.profile.add_interest(value);
        store.profile.clone()
    }

    pub async fn remove_interest(&self, value: &str) -> Result<Profile, AppError> {
        let mut store = self.store.lock().await;
        if !store.profile.remove_interest(value) {
            return Err(AppError::NotFound(format!(
                "Interest '{value}' is not in the profile"
            )));
        }
        Ok(store.profile.clone())
    }

    /// Validates the profile, then fetches recommendations and skills
    /// concurrently. Both loading flags clear once both fetches settle,
    /// whatever their outcomes; a failure on one side keeps the other's result.
    pub async fn submit_profile(&self) -> Result<SubmissionOutcome, AppError> {
        let (seq, profile) = {
            let mut store = self.store.lock().await;
            let missing = store.profile.missing_required_fields();
            if !missing.is_empty() {
                return Err(AppError::Validation(format!(
                    "Required profile fields are empty: {}",
                    missing.join(", ")
                )));
            }
            (store.begin_submission(), store.profile.clone())
        };

        info!("Submitting profile for {} (submission #{seq})", profile.name);

        let (recommendations, skills) = tokio::join!(
            self.gateway.fetch_recommendations(&profile),
            self.gateway.fetch_skill_suggestions(&profile),
        );

        let (recommendations, fetched_recs) = split(recommendations);
        let (skills, fetched_skills) = split(skills);

        let applied = self
            .store
            .lock()
            .await
            .finish_submission(seq, fetched_recs, fetched_skills);
        if !applied {
            debug!("Discarded results of superseded submission #{seq}");
        }

        Ok(SubmissionOutcome {
            recommendations,
            skills,
            applied,
        })
    }

    // ── Derived views ───────────────────────────────────────────────────────

    pub async fn recommendations_view(
        &self,
        filter: &str,
        sort: SortKey,
    ) -> (bool, Vec<CareerRecommendation>) {
        self.read(|s| {
            (
                s.loading_recommendations,
                arrange(&s.recommendations, filter, sort),
            )
        })
        .await
    }

    pub async fn skills_view(&self) -> (bool, Vec<SkillSuggestion>) {
        self.read(|s| (s.loading_skills, s.skills.clone())).await
    }

    // ── Chat ────────────────────────────────────────────────────────────────

    pub async fn chat_history(&self) -> Vec<ChatMessage> {
        self.read(|s| s.chat.messages().to_vec()).await
    }

    /// Appends the user message right away, then asks for a reply. On
    /// failure the user message stays in the log and nothing else is added.
    pub async fn send_chat(&self, text: &str) -> Result<ChatMessage, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Chat message cannot be empty".to_string()));
        }

        let (history, language) = {
            let mut store = self.store.lock().await;
            let history = store.chat.messages().to_vec();
            store.chat.append(ChatRole::User, text.to_string());
            (history, store.profile.language.clone())
        };

        let reply = self
            .gateway
            .send_chat_turn(&history, text, &language)
            .await?;

        let message = self.store.lock().await.chat.append(ChatRole::Model, reply);
        Ok(message)
    }

    // ── Market trends ───────────────────────────────────────────────────────

    pub async fn trend_report(&self) -> (bool, Option<TrendReport>) {
        self.read(|s| (s.loading_trends, s.trend_report.clone())).await
    }

    /// Runs a grounded trend query. A response that arrives after a newer
    /// query was issued is returned to its caller but not stored.
    pub async fn query_trends(&self, query: &str) -> Result<TrendReport, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::Validation("Trend query cannot be empty".to_string()));
        }

        let (seq, language) = {
            let mut store = self.store.lock().await;
            (store.begin_trend_query(), store.profile.language.clone())
        };

        let result = self.gateway.fetch_market_trends(query, &language).await;

        let applied = self
            .store
            .lock()
            .await
            .finish_trend_query(seq, result.as_ref().ok().cloned());
        if !applied {
            warn!("Discarded stale trend report for {query:?} (query #{seq})");
        }

        result.map_err(AppError::from)
    }

    // ── Navigation and display ──────────────────────────────────────────────

    pub async fn active_view(&self) -> ActiveView {
        self.read(|s| s.active_view).await
    }

    pub async fn set_active_view(&self, view: ActiveView) -> ActiveView {
        let mut store = self.store.lock().await;
        store.active_view = view;
        view
    }

    pub async fn theme(&self) -> Theme {
        self.read(|s| s.theme).await
    }

    pub async fn set_theme(&self, theme: Theme) -> Theme {
        let mut store = self.store.lock().await;
        store.theme = theme;
        theme
    }

    pub async fn toggle_theme(&self) -> Theme {
        let mut store = self.store.lock().await;
        store.theme = store.theme.toggled();
        store.theme
    }
}

/// Splits a fetch result into a count for the caller and the list to store.
fn split<T>(result: Result<Vec<T>, GatewayError>) -> (Result<usize, GatewayError>, Option<Vec<T>>) {
    match result {
        Ok(items) => (Ok(items.len()), Some(items)),
        Err(e) => (Err(e), None),
    }
}

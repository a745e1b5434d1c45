use std::sync::Arc;

use crate::session::controller::Controller;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single session: profile, results, chat log and view state.
    pub controller: Arc<Controller>,
}

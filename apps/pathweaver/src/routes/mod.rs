pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile
        .route(
            "/api/v1/profile",
            get(handlers::handle_get_profile).put(handlers::handle_update_profile),
        )
        .route("/api/v1/profile/skills", post(handlers::handle_add_skill))
        .route(
            "/api/v1/profile/skills/:value",
            delete(handlers::handle_remove_skill),
        )
        .route(
            "/api/v1/profile/interests",
            post(handlers::handle_add_interest),
        )
        .route(
            "/api/v1/profile/interests/:value",
            delete(handlers::handle_remove_interest),
        )
        .route("/api/v1/profile/submit", post(handlers::handle_submit))
        // Results
        .route(
            "/api/v1/recommendations",
            get(handlers::handle_recommendations),
        )
        .route("/api/v1/skills", get(handlers::handle_skills))
        .route(
            "/api/v1/chat",
            get(handlers::handle_chat_history).post(handlers::handle_send_chat),
        )
        .route(
            "/api/v1/trends",
            get(handlers::handle_get_trends).post(handlers::handle_query_trends),
        )
        // Navigation, display, locale
        .route(
            "/api/v1/view",
            get(handlers::handle_get_view).put(handlers::handle_set_view),
        )
        .route(
            "/api/v1/theme",
            get(handlers::handle_get_theme).put(handlers::handle_set_theme),
        )
        .route("/api/v1/theme/toggle", post(handlers::handle_toggle_theme))
        .route("/api/v1/locale", get(handlers::handle_locale))
        .route("/api/v1/options", get(handlers::handle_options))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::gateway::Gateway;
    use crate::oracle::stub::StubOracle;
    use crate::session::controller::Controller;

    fn app(stub: StubOracle) -> Router {
        let controller = Controller::new(Gateway::new(Arc::new(stub)));
        build_router(AppState {
            controller: Arc::new(controller),
        })
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn rec(title: &str, min_salary: u32, location: &str) -> Value {
        json!({
            "title": title,
            "description": "d",
            "alignmentScore": 70,
            "salaryRange": "₹",
            "minSalary": min_salary,
            "location": location,
            "requiredSkills": [],
            "roadmap": [],
            "marketOutlook": "ok"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(&app(StubOracle::new()), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_submit_without_name_is_400() {
        let (status, body) = call(
            &app(StubOracle::new()),
            Method::POST,
            "/api/v1/profile/submit",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_submit_then_sorted_and_filtered_recommendations() {
        let recs = json!([
            rec("Data Analyst", 600000, "Pune"),
            rec("ML Engineer", 900000, "Bengaluru"),
            rec("Cloud Engineer", 750000, "Hyderabad")
        ])
        .to_string();
        let app = app(
            StubOracle::new()
                .on_text("career strategist", &recs)
                .on_fail("skill acquisition expert"),
        );

        let (status, _) = call(
            &app,
            Method::PUT,
            "/api/v1/profile",
            Some(json!({"name": "Arjun", "major": "B.Tech"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(&app, Method::POST, "/api/v1/profile/submit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"], 3);
        assert!(body["skills"].is_null());
        assert_eq!(body["notice"], "Something went wrong. Please try again.");
        assert_eq!(body["view"], "recommendations");

        let (_, body) = call(&app, Method::GET, "/api/v1/recommendations?sort=salary", None).await;
        let salaries: Vec<f64> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["minSalary"].as_f64().unwrap())
            .collect();
        assert_eq!(salaries, vec![900000.0, 750000.0, 600000.0]);
        assert_eq!(body["loading"], false);

        let (_, body) = call(&app, Method::GET, "/api/v1/recommendations?filter=engineer", None).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 2);

        let (_, body) = call(&app, Method::GET, "/api/v1/recommendations?filter=zzz", None).await;
        assert!(body["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_failure_is_502_and_keeps_message() {
        let app = app(StubOracle::new().on_fail("Pathweaver Assistant"));

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/chat",
            Some(json!({"message": "Is MBA worth it?"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "GATEWAY_ERROR");

        let (_, body) = call(&app, Method::GET, "/api/v1/chat", None).await;
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
    }

    #[tokio::test]
    async fn test_trends_roundtrip() {
        let app = app(StubOracle::new().on_text("market intelligence analyst", "Hiring is up"));

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/trends",
            Some(json!({"query": "AI jobs"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"text": "Hiring is up", "sources": []}));

        let (_, body) = call(&app, Method::GET, "/api/v1/trends", None).await;
        assert_eq!(body["report"]["text"], "Hiring is up");
        assert_eq!(body["loading"], false);
    }

    #[tokio::test]
    async fn test_skill_add_and_remove() {
        let app = app(StubOracle::new());
        let (_, body) = call(
            &app,
            Method::POST,
            "/api/v1/profile/skills",
            Some(json!({"value": " Python "})),
        )
        .await;
        assert_eq!(body["skills"], json!(["Python"]));

        let (status, body) = call(&app, Method::DELETE, "/api/v1/profile/skills/Python", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!([]));

        let (status, _) = call(&app, Method::DELETE, "/api/v1/profile/skills/Python", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_view_quote_follows_profile_language() {
        let app = app(StubOracle::new());
        call(
            &app,
            Method::PUT,
            "/api/v1/profile",
            Some(json!({"language": "Hindi (हिंदी)"})),
        )
        .await;

        let (_, body) = call(&app, Method::PUT, "/api/v1/view", Some(json!({"view": "skills"}))).await;
        assert_eq!(body["view"], "skills");
        assert_eq!(body["quote"], "कौशल वह पुल है जहाँ आप हैं और जहाँ आप होना चाहते हैं।");
    }

    #[tokio::test]
    async fn test_locale_falls_back_to_english() {
        let app = app(StubOracle::new());
        let (_, body) = call(&app, Method::GET, "/api/v1/locale?language=Klingon", None).await;
        assert_eq!(body["requested"], "Klingon");
        assert_eq!(body["supported"], false);
        assert_eq!(body["language"], "English");
        assert_eq!(body["labels"]["navigator"], "Navigator");
    }

    #[tokio::test]
    async fn test_theme_toggle() {
        let app = app(StubOracle::new());
        let (_, body) = call(&app, Method::GET, "/api/v1/theme", None).await;
        assert_eq!(body["theme"], "dark");
        let (_, body) = call(&app, Method::POST, "/api/v1/theme/toggle", None).await;
        assert_eq!(body["theme"], "light");
    }

    #[tokio::test]
    async fn test_options_lists_languages_and_levels() {
        let (_, body) = call(&app(StubOracle::new()), Method::GET, "/api/v1/options", None).await;
        assert_eq!(body["languages"].as_array().unwrap().len(), 14);
        assert_eq!(body["educationLevels"][0], "School");
    }
}

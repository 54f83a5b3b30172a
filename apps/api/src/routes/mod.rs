pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::outreach::handlers::handle_outreach;
use crate::requirements::handlers::handle_extract_requirements;
use crate::scoring::handlers::{handle_rank_candidates, handle_score_candidate};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/requirements", post(handle_extract_requirements))
        .route("/api/v1/candidates/score", post(handle_score_candidate))
        .route("/api/v1/candidates/rank", post(handle_rank_candidates))
        .route("/api/v1/outreach", post(handle_outreach))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::outreach::template::TemplateOutreachWriter;
    use crate::scoring::{ReferenceTables, ScoringEngine};

    const JOB: &str = "ML Engineer\n\
        Location: Mountain View, CA.\n\
        Salary: $150-200k\n\
        Requirements:\n\
        - Python\n\
        - PyTorch\n";

    fn app() -> Router {
        let engine = ScoringEngine::new(ReferenceTables::default()).unwrap();
        build_router(AppState {
            engine: Arc::new(engine),
            outreach: Arc::new(TemplateOutreachWriter),
            config: Config::default(),
        })
    }

    async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn candidates() -> Value {
        json!([
            {"name": "Sam Sparse", "linkedin_url": "https://l/sam"},
            {
                "name": "Ada Lovelace",
                "linkedin_url": "https://l/ada",
                "headline": "ML Engineer",
                "location": "Mountain View, CA",
                "education": [{"school": "Stanford", "degree": "MS"}],
                "experience": [{"title": "ML Engineer", "company": "OpenAI"}],
                "skills": ["Python", "PyTorch"]
            },
            {}
        ])
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send("GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "scout-api");
    }

    #[tokio::test]
    async fn test_extract_requirements() {
        let (status, body) =
            send("POST", "/api/v1/requirements", Some(json!({"job_description": JOB}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "ML Engineer");
        assert_eq!(body["required_skills"], json!(["Python", "PyTorch"]));
        assert_eq!(body["location"], "Mountain View, CA");
    }

    #[tokio::test]
    async fn test_blank_job_description_is_rejected() {
        for uri in [
            "/api/v1/requirements",
            "/api/v1/candidates/score",
            "/api/v1/candidates/rank",
            "/api/v1/outreach",
        ] {
            let (status, body) = send("POST", uri, Some(json!({"job_description": "  "}))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_score_candidate() {
        let (status, body) = send(
            "POST",
            "/api/v1/candidates/score",
            Some(json!({"job_description": JOB, "candidate": candidates()[1]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["breakdown"]["company_relevance"], 10);
        assert_eq!(body["breakdown"]["experience_match"], 10);
        assert_eq!(body["breakdown"]["location_match"], 10);
        let total = body["total"].as_f64().unwrap();
        assert!((0.0..=10.0).contains(&total));
    }

    #[tokio::test]
    async fn test_score_empty_candidate() {
        let (status, body) = send(
            "POST",
            "/api/v1/candidates/score",
            Some(json!({"job_description": JOB, "candidate": {}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"total": 0.0, "breakdown": {}}));
    }

    #[tokio::test]
    async fn test_rank_candidates() {
        let (status, body) = send(
            "POST",
            "/api/v1/candidates/rank",
            Some(json!({"job_description": JOB, "candidates": candidates()})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["run"]["received"], 3);
        assert_eq!(body["run"]["scored"], 2);

        let ranked = body["candidates"].as_array().unwrap();
        assert_eq!(ranked[0]["name"], "Ada Lovelace");
        assert_eq!(ranked[1]["name"], "Sam Sparse");
        assert_eq!(ranked[2]["score"], json!(0.0));
        assert!(ranked[0]["score_breakdown"]["education"].is_number());
    }

    #[tokio::test]
    async fn test_outreach_defaults_to_top_two() {
        let (status, body) = send(
            "POST",
            "/api/v1/outreach",
            Some(json!({"job_description": JOB, "candidates": candidates(), "company_name": "Acme"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "template");

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["candidate"], "Ada Lovelace");
        assert_eq!(messages[0]["linkedin_url"], "https://l/ada");
        let text = messages[0]["message"].as_str().unwrap();
        assert!(text.starts_with("Hi Ada,"));
        assert!(text.contains("our team at Acme"));
        assert!(text.contains("$150-200k"));
    }

    #[tokio::test]
    async fn test_outreach_top_and_default_company() {
        let (status, body) = send(
            "POST",
            "/api/v1/outreach",
            Some(json!({"job_description": JOB, "candidates": candidates(), "top": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0]["message"]
            .as_str()
            .unwrap()
            .contains("our team at our company"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = send("GET", "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

//! Shared helpers for rumo-cli integration tests
//!
//! Provides a programmatically controllable mock scoring service bound
//! to an ephemeral local port.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use rumo_core::ScoringResult;
use std::sync::{Arc, Mutex};

/// Answer vectors captured by the mock scoring service
pub type CapturedAnswers = Arc<Mutex<Vec<Vec<u8>>>>;

/// Serve a router on an ephemeral local port, returning its base URL
pub async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// The reference scenario result
pub fn realista_result() -> ScoringResult {
    ScoringResult {
        profile: "Realista".to_string(),
        description: "Você gosta de atividades práticas.".to_string(),
        suggested_careers: vec!["Engenheiro".to_string(), "Mecânico".to_string()],
    }
}

/// Mock service answering every POST /predict with the given result,
/// recording each received answer vector
pub fn scoring_service(result: ScoringResult, captured: CapturedAnswers) -> Router {
    Router::new().route(
        "/predict",
        post(move |Json(body): Json<Vec<u8>>| {
            let result = result.clone();
            let captured = captured.clone();
            async move {
                captured.lock().unwrap().push(body);
                Json(result)
            }
        }),
    )
}

/// Mock service answering every POST /predict with HTTP 500
pub fn failing_service() -> Router {
    Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "erro interno") }),
    )
}

/// Mock service answering 2xx with a body that is not a scoring result
pub fn malformed_service() -> Router {
    Router::new().route(
        "/predict",
        post(|| async { Json(serde_json::json!({ "status": "ok" })) }),
    )
}

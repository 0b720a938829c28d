//! HTTP gateway (Axum) for question generation.
//!
//! This module is primarily used by the `quizgen-server` binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::questions_handler;
pub use payload::{QuestionsRequest, QuestionsResponse};
pub use state::HandlerState;

use crate::models::{EntityRecognizer, PairScorer, QuestionModel};

/// Response header carrying the outcome of every request.
pub const QUIZGEN_STATUS_HEADER: &str = "X-Quizgen-Status";
pub const QUIZGEN_STATUS_HEALTHY: &str = "healthy";
pub const QUIZGEN_STATUS_READY: &str = "ready";
pub const QUIZGEN_STATUS_GENERATED: &str = "generated";

pub fn create_router_with_state<G, S, N>(state: HandlerState<G, S, N>) -> Router
where
    G: QuestionModel + 'static,
    S: PairScorer + 'static,
    N: EntityRecognizer + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<G, S, N>))
        .route("/v1/questions", post(questions_handler::<G, S, N>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

/// `model` when weights are loaded, `stub` otherwise.
#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub generator: &'static str,
    pub evaluator: &'static str,
    pub ner: &'static str,
}

fn mode(loaded: bool) -> &'static str {
    if loaded { "model" } else { "stub" }
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        QUIZGEN_STATUS_HEADER,
        HeaderValue::from_static(QUIZGEN_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<G, S, N>(State(state): State<HandlerState<G, S, N>>) -> Response
where
    G: QuestionModel + 'static,
    S: PairScorer + 'static,
    N: EntityRecognizer + 'static,
{
    let generator = &state.generator;
    let components = ComponentStatus {
        generator: mode(generator.question_model().is_model_loaded()),
        evaluator: mode(generator.scorer().is_model_loaded()),
        ner: mode(generator.recognizer().is_model_loaded()),
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        QUIZGEN_STATUS_HEADER,
        HeaderValue::from_static(QUIZGEN_STATUS_READY),
    );

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}

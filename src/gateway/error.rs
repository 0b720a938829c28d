use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::QUIZGEN_STATUS_HEADER;
use crate::pipeline::PipelineError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("question generation failed: {0}")]
    GenerationFailed(String),

    #[error("evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("entity recognition failed: {0}")]
    EntityRecognitionFailed(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<PipelineError> for GatewayError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Prompt(e) => GatewayError::InvalidRequest(e.to_string()),
            PipelineError::Generation(e) => GatewayError::GenerationFailed(e.to_string()),
            PipelineError::Evaluation(e) => GatewayError::EvaluationFailed(e.to_string()),
            PipelineError::Entities(e) => GatewayError::EntityRecognitionFailed(e.to_string()),
            other => GatewayError::InternalError(other.to_string()),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, quizgen_status) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::GenerationFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "generation_error")
            }
            GatewayError::EvaluationFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "evaluation_error")
            }
            GatewayError::EntityRecognitionFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "ner_error")
            }
            GatewayError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            QUIZGEN_STATUS_HEADER,
            HeaderValue::from_static(quizgen_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}

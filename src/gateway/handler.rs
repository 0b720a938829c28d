use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, info, instrument};

use super::QUIZGEN_STATUS_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{QuestionsRequest, QuestionsResponse};
use crate::gateway::state::HandlerState;
use crate::models::{EntityRecognizer, PairScorer, QuestionModel};
use crate::pipeline::GenerateOptions;
use crate::prompt::AnswerStyle;

/// Web defaults: ten ranked questions over every answer style.
const WEB_NUM_QUESTIONS: usize = 10;

#[instrument(skip(state, request), fields(text_len = tracing::field::Empty))]
pub async fn questions_handler<G, S, N>(
    State(state): State<HandlerState<G, S, N>>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    G: QuestionModel + 'static,
    S: PairScorer + 'static,
    N: EntityRecognizer + 'static,
{
    let request: QuestionsRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;
    tracing::Span::current().record("text_len", request.text.len());

    let options = options_from_request(&request)?;
    debug!(?options, question_type = ?request.question_type, "Processing question request");

    let generator = Arc::clone(&state.generator);
    let QuestionsRequest {
        text,
        question_type,
        ..
    } = request;

    let pairs = tokio::task::spawn_blocking(move || generator.generate(&text, &options))
        .await
        .map_err(|e| {
            error!(error = %e, "Question generation task failed");
            GatewayError::InternalError(e.to_string())
        })??;

    info!(pairs = pairs.len(), "Generated questions");

    let body = QuestionsResponse::from_pairs(pairs, question_type);

    let mut headers = HeaderMap::new();
    headers.insert(
        QUIZGEN_STATUS_HEADER,
        HeaderValue::from_static(super::QUIZGEN_STATUS_GENERATED),
    );

    Ok((StatusCode::OK, headers, Json(body)).into_response())
}

/// Validates the request and applies the web defaults.
pub(crate) fn options_from_request(
    request: &QuestionsRequest,
) -> Result<GenerateOptions, GatewayError> {
    if request.text.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "text must not be empty".to_string(),
        ));
    }

    let answer_style = match request.answer_style.as_deref() {
        Some(style) => style
            .parse::<AnswerStyle>()
            .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?,
        None => AnswerStyle::All,
    };

    Ok(GenerateOptions::new()
        .with_answer_style(answer_style)
        .with_num_questions(request.num_questions.unwrap_or(WEB_NUM_QUESTIONS))
        .with_evaluator(request.use_evaluator.unwrap_or(true))
        .with_score_multiple_choice(request.score_multiple_choice.unwrap_or(false)))
}

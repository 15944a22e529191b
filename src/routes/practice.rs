use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::response::{json_error, AppError};
use crate::services::practice::PracticeError;
use crate::state::AppState;
use crate::store::Question;

#[derive(Debug, Deserialize)]
struct StartRequest {
    user_id: String,
}

#[derive(Serialize)]
struct StartResponse {
    session_id: Uuid,
    question: Question,
}

#[derive(Debug, Deserialize)]
struct AnswerRequest {
    user_id: String,
    question_id: i64,
    answer: String,
    #[serde(default)]
    time_taken: Option<i64>,
}

#[derive(Serialize)]
struct AnswerResponse {
    correct: bool,
    correct_answer: String,
    next_question: Option<Question>,
}

pub async fn start(State(state): State<AppState>, Json(body): Json<StartRequest>) -> Response {
    if body.user_id.trim().is_empty() {
        return AppError::validation("user_id must not be empty").into_response();
    }

    match state.engine().start_practice(&body.user_id).await {
        Ok(started) => Json(StartResponse {
            session_id: started.session_id,
            question: started.question,
        })
        .into_response(),
        Err(err) => practice_error_response(err),
    }
}

pub async fn answer(State(state): State<AppState>, Json(body): Json<AnswerRequest>) -> Response {
    if body.user_id.trim().is_empty() {
        return AppError::validation("user_id must not be empty").into_response();
    }

    let time_taken = body.time_taken.unwrap_or(0).max(0);

    match state
        .engine()
        .submit_answer(&body.user_id, body.question_id, &body.answer, time_taken)
        .await
    {
        Ok(outcome) => Json(AnswerResponse {
            correct: outcome.is_correct,
            correct_answer: outcome.correct_answer,
            next_question: outcome.next_question,
        })
        .into_response(),
        Err(err) => practice_error_response(err),
    }
}

fn practice_error_response(err: PracticeError) -> Response {
    match err {
        PracticeError::QuestionUnavailable => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "QUESTION_UNAVAILABLE",
            "No question available",
        )
        .into_response(),
        PracticeError::QuestionNotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "QUESTION_NOT_FOUND",
            format!("Question {id} not found"),
        )
        .into_response(),
        PracticeError::Recording(err) => {
            tracing::error!(error = %err, "progress write rejected");
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            json_error(status, "RECORDING_FAILED", "Failed to record answer").into_response()
        }
        PracticeError::Store(err) => {
            tracing::error!(error = %err, "question store error");
            AppError::internal(err.to_string()).into_response()
        }
    }
}

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::store::{AnswerEvent, ProgressSink, Question, QuestionSource, StoreError};

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("no question available")]
    QuestionUnavailable,
    #[error("question {0} not found")]
    QuestionNotFound(i64),
    #[error("failed to record answer: {0}")]
    Recording(#[source] StoreError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct StartedPractice {
    pub session_id: Uuid,
    pub question: Question,
}

#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
    pub next_question: Option<Question>,
}

/// One step up on a correct answer, one down on an incorrect one, clamped to
/// the [1,5] difficulty scale.
pub fn next_difficulty(current: i32, correct: bool) -> i32 {
    let step = if correct { 1 } else { -1 };
    (current + step).clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Orchestrates the adaptive quiz loop over the injected read and write tiers.
/// Holds no per-session state: every answer call is keyed by the question id
/// the caller supplies.
pub struct PracticeEngine {
    questions: Arc<dyn QuestionSource>,
    progress: Arc<dyn ProgressSink>,
}

impl PracticeEngine {
    pub fn new(questions: Arc<dyn QuestionSource>, progress: Arc<dyn ProgressSink>) -> Self {
        Self {
            questions,
            progress,
        }
    }

    /// Picks one random question from the whole pool, with no difficulty
    /// filter, and mints a fresh session id. The id is opaque to the rest of
    /// the flow and is never checked on answer submission.
    pub async fn start_practice(&self, user_id: &str) -> Result<StartedPractice, PracticeError> {
        let question = match self.questions.fetch_random().await {
            Ok(Some(question)) => question,
            Ok(None) => return Err(PracticeError::QuestionUnavailable),
            Err(err) => {
                tracing::error!(error = %err, "question store unavailable on start");
                return Err(PracticeError::QuestionUnavailable);
            }
        };

        let session_id = Uuid::new_v4();
        tracing::debug!(%session_id, user_id, question_id = question.id, "practice started");

        Ok(StartedPractice {
            session_id,
            question,
        })
    }

    /// Lookup → grade → record → select next. The progress write must succeed
    /// before anything is returned; next-question selection after that point
    /// is best-effort.
    pub async fn submit_answer(
        &self,
        user_id: &str,
        question_id: i64,
        answer: &str,
        time_taken: i64,
    ) -> Result<AnswerOutcome, PracticeError> {
        let question = self
            .questions
            .fetch_by_id(question_id)
            .await?
            .ok_or(PracticeError::QuestionNotFound(question_id))?;

        // Exact match only: "b" does not match a stored "B".
        let is_correct = answer == question.correct_option;

        let event = AnswerEvent {
            user_id: user_id.to_string(),
            question_id,
            correct: is_correct,
            time_taken,
            answered_at: now_iso(),
        };
        self.progress
            .append(&event)
            .await
            .map_err(PracticeError::Recording)?;

        let target = next_difficulty(question.difficulty, is_correct);
        let next_question = self.select_next(target).await;

        Ok(AnswerOutcome {
            is_correct,
            correct_answer: question.correct_option,
            next_question,
        })
    }

    /// One random question at the target level, falling back to the whole pool
    /// when that level is empty. Progress is already committed when this runs,
    /// so failures degrade to "no next question" instead of failing the call.
    async fn select_next(&self, target: i32) -> Option<Question> {
        match self.questions.fetch_random_at(target).await {
            Ok(Some(question)) => return Some(question),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, target, "next-question selection failed");
                return None;
            }
        }

        match self.questions.fetch_random().await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(error = %err, "fallback question selection failed");
                None
            }
        }
    }
}

fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

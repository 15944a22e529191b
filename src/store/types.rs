use serde::{Deserialize, Serialize};

/// One multiple-choice question as stored in the external question table.
/// Immutable from this backend's point of view; only ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
    pub difficulty: i32,
}

/// One graded answer, appended to the progress table per submission.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerEvent {
    pub user_id: String,
    pub question_id: i64,
    pub correct: bool,
    pub time_taken: i64,
    pub answered_at: String,
}

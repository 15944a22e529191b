pub mod progress;
pub mod questions;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use progress::ProgressRecorder;
pub use questions::QuestionStore;
pub use types::{AnswerEvent, Question};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store not configured: {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// Upstream status code, when the store answered with a non-success status.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            StoreError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Read-tier query capabilities over the question pool. Random selection is
/// performed by the store itself; callers only name the filter.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// One uniformly random question from the whole pool.
    async fn fetch_random(&self) -> Result<Option<Question>, StoreError>;

    /// One random question at exactly the given difficulty level.
    async fn fetch_random_at(&self, difficulty: i32) -> Result<Option<Question>, StoreError>;

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Question>, StoreError>;
}

/// Write-tier capability: append-only progress events.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn append(&self, event: &AnswerEvent) -> Result<(), StoreError>;
}

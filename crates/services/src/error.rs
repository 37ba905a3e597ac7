//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::quiz::QuizError;
use storage::repository::StoreError;

/// Errors emitted by the quiz services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("no questions found for this set")]
    Empty,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl QuizServiceError {
    /// True for every load failure that should surface as "no questions found".
    #[must_use]
    pub fn is_no_questions(&self) -> bool {
        matches!(self, QuizServiceError::Empty | QuizServiceError::Store(_))
    }
}

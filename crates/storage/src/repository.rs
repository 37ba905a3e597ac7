use async_trait::async_trait;
use prep_core::model::{
    AnswerKey, AnswerOption, OptionId, Question, QuestionError, QuestionId, SetRef,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by question store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("question set not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("unexpected response status {0}")]
    Status(u16),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Invalid(#[from] QuestionError),
}

//
// ─── WIRE RECORDS ──────────────────────────────────────────────────────────────
//

/// One option as it appears in a question file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub option_id: u64,
    pub option_text: String,
}

/// `correct_answer_id` is either a bare id or a list of ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswerRecord {
    One(u64),
    Many(Vec<u64>),
}

/// Question shape in the static JSON files.
///
/// This mirrors the domain `Question` so adapters can decode without leaking the file
/// format into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_id: u64,
    pub question_text: String,
    pub options: Vec<OptionRecord>,
    pub correct_answer_id: CorrectAnswerRecord,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        let correct_answer_id = match question.key() {
            AnswerKey::Single(id) => CorrectAnswerRecord::One(id.value()),
            AnswerKey::Multi(ids) => {
                CorrectAnswerRecord::Many(ids.iter().map(OptionId::value).collect())
            }
        };
        Self {
            question_id: question.id().value(),
            question_text: question.text().to_owned(),
            options: question
                .options()
                .iter()
                .map(|opt| OptionRecord {
                    option_id: opt.id().value(),
                    option_text: opt.text().to_owned(),
                })
                .collect(),
            correct_answer_id,
        }
    }

    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the options and correct answer do not line up.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        let id = QuestionId::new(self.question_id);
        let correct = match self.correct_answer_id {
            CorrectAnswerRecord::One(only) => vec![only],
            CorrectAnswerRecord::Many(many) => many,
        };
        let key = AnswerKey::from_ids(id, correct.into_iter().map(OptionId::new))?;
        let options = self
            .options
            .into_iter()
            .map(|opt| AnswerOption::new(OptionId::new(opt.option_id), opt.option_text))
            .collect();
        Question::new(id, self.question_text, options, key)
    }
}

/// Decode a whole question file.
///
/// # Errors
///
/// Returns `StoreError::Serialization` for malformed JSON and `StoreError::Invalid` for
/// the first record that fails validation.
pub fn decode_question_set(bytes: &[u8]) -> Result<Vec<Question>, StoreError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Serialization(e.to_string()))?;
    records
        .into_iter()
        .map(|record| record.into_question().map_err(StoreError::from))
        .collect()
}

//
// ─── STORE CONTRACT ────────────────────────────────────────────────────────────
//

/// Read-only source of question sets.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Fetch the ordered questions of one set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the set does not exist, or other errors when the
    /// data cannot be fetched or decoded.
    async fn load_set(&self, set: SetRef) -> Result<Vec<Question>, StoreError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryQuestionStore {
    sets: Arc<Mutex<HashMap<SetRef, Vec<Question>>>>,
}

impl InMemoryQuestionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the questions of a set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the lock is poisoned.
    pub fn insert_set(&self, set: SetRef, questions: Vec<Question>) -> Result<(), StoreError> {
        let mut guard = self
            .sets
            .lock()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        guard.insert(set, questions);
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn load_set(&self, set: SetRef) -> Result<Vec<Question>, StoreError> {
        let guard = self
            .sets
            .lock()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        guard.get(&set).cloned().ok_or(StoreError::NotFound)
    }
}

/// Holds the active question store behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(InMemoryQuestionStore::new())
    }

    #[must_use]
    pub fn from_store(store: impl QuestionStore + 'static) -> Self {
        Self {
            questions: Arc::new(store),
        }
    }
}

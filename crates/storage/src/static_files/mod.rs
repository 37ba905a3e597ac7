//! Adapters that read the static `set_{id}.json` / `module_{id}.json` files.

use prep_core::model::Question;

use crate::repository::{StoreError, decode_question_set};

mod dir_store;
mod http_store;

pub use dir_store::DirQuestionStore;
pub use http_store::HttpQuestionStore;

fn decode_logged(source: &str, bytes: &[u8]) -> Result<Vec<Question>, StoreError> {
    let questions = decode_question_set(bytes).inspect_err(|err| {
        tracing::warn!(%source, error = %err, "question file rejected");
    })?;
    tracing::debug!(%source, count = questions.len(), "question file decoded");
    Ok(questions)
}

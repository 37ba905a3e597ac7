use async_trait::async_trait;
use prep_core::model::{Question, SetRef};
use reqwest::StatusCode;
use url::Url;

use crate::repository::{QuestionStore, Storage, StoreError};

use super::decode_logged;

/// Fetches question files with a plain HTTP GET below a base URL.
#[derive(Debug, Clone)]
pub struct HttpQuestionStore {
    client: reqwest::Client,
    base: Url,
}

impl HttpQuestionStore {
    /// Create a store rooted at `base` (e.g. `https://example.com/data/`).
    ///
    /// A missing trailing slash is added so file names resolve below the base path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if `base` is not a valid URL.
    pub fn new(base: &str) -> Result<Self, StoreError> {
        Self::with_client(base, reqwest::Client::new())
    }

    /// Like [`HttpQuestionStore::new`] with a caller-configured client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if `base` is not a valid URL.
    pub fn with_client(base: &str, client: reqwest::Client) -> Result<Self, StoreError> {
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let base = Url::parse(&normalized)
            .map_err(|e| StoreError::Connection(format!("invalid base url {base}: {e}")))?;
        Ok(Self { client, base })
    }

    /// Full URL of the file backing `set`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the file name cannot be joined onto the base.
    pub fn url_for(&self, set: SetRef) -> Result<Url, StoreError> {
        self.base
            .join(&set.file_name())
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

#[async_trait]
impl QuestionStore for HttpQuestionStore {
    async fn load_set(&self, set: SetRef) -> Result<Vec<Question>, StoreError> {
        let url = self.url_for(set)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        decode_logged(url.as_str(), &bytes)
    }
}

impl Storage {
    /// Build a `Storage` fetching question files over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if `base` is not a valid URL.
    pub fn http(base: &str) -> Result<Self, StoreError> {
        Ok(Self::from_store(HttpQuestionStore::new(base)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_file_name_below_base_path() {
        let store = HttpQuestionStore::new("https://example.com/data").unwrap();
        let url = store.url_for(SetRef::question_set(5)).unwrap();
        assert_eq!(url.as_str(), "https://example.com/data/set_5.json");
    }

    #[test]
    fn rejects_invalid_base() {
        let err = HttpQuestionStore::new("not a url").unwrap_err();
        assert!(matches!(err, StoreError::Connection(_)));
    }
}

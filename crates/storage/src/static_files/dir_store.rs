use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use prep_core::model::{Question, SetRef};

use crate::repository::{QuestionStore, Storage, StoreError};

use super::decode_logged;

/// Reads question files from a local directory.
#[derive(Debug, Clone)]
pub struct DirQuestionStore {
    root: PathBuf,
}

impl DirQuestionStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn path_for(&self, set: SetRef) -> PathBuf {
        self.root.join(set.file_name())
    }
}

#[async_trait]
impl QuestionStore for DirQuestionStore {
    async fn load_set(&self, set: SetRef) -> Result<Vec<Question>, StoreError> {
        let path = self.path_for(set);
        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound,
            _ => StoreError::Connection(format!("{}: {e}", path.display())),
        })?;
        decode_logged(&path.display().to_string(), &bytes)
    }
}

impl Storage {
    /// Build a `Storage` reading question files from `root`.
    #[must_use]
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self::from_store(DirQuestionStore::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DirQuestionStore>();
    }

    #[test]
    fn path_uses_kind_prefix() {
        let store = DirQuestionStore::new("/srv/data");
        assert_eq!(
            store.path_for(SetRef::module(3)),
            PathBuf::from("/srv/data/module_3.json")
        );
    }
}

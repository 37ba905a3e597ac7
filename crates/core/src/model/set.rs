use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ids::SetId;

/// Which catalog a quiz comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    QuestionSet,
    Module,
}

impl SetKind {
    /// File name prefix used by the question store.
    #[must_use]
    pub fn file_prefix(self) -> &'static str {
        match self {
            SetKind::QuestionSet => "set",
            SetKind::Module => "module",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SetKind::QuestionSet => "Question Set",
            SetKind::Module => "Module",
        }
    }
}

/// Points at one question file, e.g. question set 3 or module 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetRef {
    pub kind: SetKind,
    pub id: SetId,
}

impl SetRef {
    #[must_use]
    pub const fn question_set(id: u64) -> Self {
        Self {
            kind: SetKind::QuestionSet,
            id: SetId::new(id),
        }
    }

    #[must_use]
    pub const fn module(id: u64) -> Self {
        Self {
            kind: SetKind::Module,
            id: SetId::new(id),
        }
    }

    /// `set_{id}.json` or `module_{id}.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}_{}.json", self.kind.file_prefix(), self.id)
    }
}

impl fmt::Display for SetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_kind_prefix() {
        assert_eq!(SetRef::question_set(4).file_name(), "set_4.json");
        assert_eq!(SetRef::module(11).file_name(), "module_11.json");
    }

    #[test]
    fn display_reads_naturally() {
        assert_eq!(SetRef::question_set(2).to_string(), "Question Set 2");
        assert_eq!(SetRef::module(1).to_string(), "Module 1");
    }
}

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {0} has empty text")]
    EmptyText(QuestionId),

    #[error("question {0} has no options")]
    NoOptions(QuestionId),

    #[error("question {question} lists option {option} more than once")]
    DuplicateOption {
        question: QuestionId,
        option: OptionId,
    },

    #[error("question {0} has no correct answer")]
    EmptyAnswer(QuestionId),

    #[error("question {question} marks unknown option {option} as correct")]
    UnknownAnswerOption {
        question: QuestionId,
        option: OptionId,
    },
}

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// A selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    id: OptionId,
    text: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(id: OptionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> OptionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ─── ANSWER KEY ────────────────────────────────────────────────────────────────
//

/// Whether a question takes one option or a fixed-size set of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Single,
    Multi { required: usize },
}

impl AnswerKind {
    /// Number of options a complete answer contains.
    #[must_use]
    pub fn required(self) -> usize {
        match self {
            AnswerKind::Single => 1,
            AnswerKind::Multi { required } => required,
        }
    }

    #[must_use]
    pub fn is_multi(self) -> bool {
        matches!(self, AnswerKind::Multi { .. })
    }
}

/// The correct answer designator of a question.
///
/// `Multi` always holds at least two ids; a one-element list collapses to `Single`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    Single(OptionId),
    Multi(BTreeSet<OptionId>),
}

impl AnswerKey {
    /// Build a key from the raw list of correct ids.
    ///
    /// Duplicates collapse. One distinct id yields `AnswerKey::Single`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyAnswer` if no ids are given.
    pub fn from_ids(
        question: QuestionId,
        ids: impl IntoIterator<Item = OptionId>,
    ) -> Result<Self, QuestionError> {
        let set: BTreeSet<OptionId> = ids.into_iter().collect();
        let mut iter = set.iter();
        match (iter.next(), iter.next()) {
            (None, _) => Err(QuestionError::EmptyAnswer(question)),
            (Some(only), None) => Ok(AnswerKey::Single(*only)),
            _ => Ok(AnswerKey::Multi(set)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AnswerKind {
        match self {
            AnswerKey::Single(_) => AnswerKind::Single,
            AnswerKey::Multi(set) => AnswerKind::Multi {
                required: set.len(),
            },
        }
    }

    /// Number of correct options.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.kind().required()
    }

    #[must_use]
    pub fn contains(&self, id: OptionId) -> bool {
        match self {
            AnswerKey::Single(correct) => *correct == id,
            AnswerKey::Multi(set) => set.contains(&id),
        }
    }

    fn ids(&self) -> Vec<OptionId> {
        match self {
            AnswerKey::Single(id) => vec![*id],
            AnswerKey::Multi(set) => set.iter().copied().collect(),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<AnswerOption>,
    key: AnswerKey,
}

impl Question {
    /// Create a question, checking that options and key agree.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, there are no options, an option id
    /// repeats, or the key references an option the question does not have.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<AnswerOption>,
        key: AnswerKey,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText(id));
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions(id));
        }

        let mut seen = BTreeSet::new();
        for option in &options {
            if !seen.insert(option.id()) {
                return Err(QuestionError::DuplicateOption {
                    question: id,
                    option: option.id(),
                });
            }
        }
        if let Some(missing) = key.ids().into_iter().find(|opt| !seen.contains(opt)) {
            return Err(QuestionError::UnknownAnswerOption {
                question: id,
                option: missing,
            });
        }

        Ok(Self {
            id,
            text,
            options,
            key,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    #[must_use]
    pub fn kind(&self) -> AnswerKind {
        self.key.kind()
    }

    #[must_use]
    pub fn has_option(&self, id: OptionId) -> bool {
        self.options.iter().any(|opt| opt.id() == id)
    }

    /// Options whose id satisfies `pred`, in display order.
    pub fn options_where(&self, pred: impl Fn(OptionId) -> bool) -> Vec<&AnswerOption> {
        self.options.iter().filter(|opt| pred(opt.id())).collect()
    }

    /// The correct options, in display order.
    #[must_use]
    pub fn correct_options(&self) -> Vec<&AnswerOption> {
        self.options_where(|id| self.key.contains(id))
    }
}

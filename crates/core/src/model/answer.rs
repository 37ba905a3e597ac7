use std::collections::BTreeSet;

use crate::model::ids::OptionId;
use crate::model::question::{AnswerKey, AnswerKind};

/// What the user has recorded for one question.
///
/// The variant always matches the question's `AnswerKind`: `Single` for single-choice,
/// `Multi` for multi-select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Answer {
    #[default]
    Unanswered,
    Single(OptionId),
    Multi(BTreeSet<OptionId>),
}

/// Effect of a selection attempt on a recorded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Recorded,
    Removed,
    Ignored,
}

impl Answer {
    /// Apply a click on `id` for a question of the given kind.
    ///
    /// Multi-select answers are capped at the required count; selecting past the cap is
    /// ignored, and selecting an already recorded option removes it.
    pub fn select(&mut self, kind: AnswerKind, id: OptionId) -> Selection {
        match kind {
            AnswerKind::Single => {
                if *self == Answer::Single(id) {
                    return Selection::Ignored;
                }
                *self = Answer::Single(id);
                Selection::Recorded
            }
            AnswerKind::Multi { required } => {
                if !matches!(self, Answer::Multi(_)) {
                    *self = Answer::Multi(BTreeSet::new());
                }
                let Answer::Multi(set) = self else {
                    return Selection::Ignored;
                };
                if set.remove(&id) {
                    Selection::Removed
                } else if set.len() < required {
                    set.insert(id);
                    Selection::Recorded
                } else {
                    Selection::Ignored
                }
            }
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: OptionId) -> bool {
        match self {
            Answer::Unanswered => false,
            Answer::Single(selected) => *selected == id,
            Answer::Multi(set) => set.contains(&id),
        }
    }

    /// Number of recorded option ids.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Answer::Unanswered => 0,
            Answer::Single(_) => 1,
            Answer::Multi(set) => set.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the answer has the shape and size the question requires.
    #[must_use]
    pub fn is_complete_for(&self, kind: AnswerKind) -> bool {
        match (self, kind) {
            (Answer::Single(_), AnswerKind::Single) => true,
            (Answer::Multi(set), AnswerKind::Multi { required }) => set.len() == required,
            _ => false,
        }
    }

    /// Exact-match scoring. No partial credit.
    #[must_use]
    pub fn matches(&self, key: &AnswerKey) -> bool {
        match (self, key) {
            (Answer::Single(chosen), AnswerKey::Single(correct)) => chosen == correct,
            (Answer::Multi(chosen), AnswerKey::Multi(correct)) => {
                chosen.len() == correct.len() && chosen.iter().all(|id| correct.contains(id))
            }
            _ => false,
        }
    }
}

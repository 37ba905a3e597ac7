use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Answer, OptionId, Question, Selection, SetRef};
use crate::time::elapsed_secs;

use super::scoring::{QuizScore, ReviewItem, round_ratio_percent, review_items};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for quiz")]
    Empty,

    #[error("current question is not fully answered")]
    NotReady,

    #[error("quiz already completed")]
    Completed,

    #[error("quiz is not completed yet")]
    NotCompleted,
}

//
// ─── STATES ────────────────────────────────────────────────────────────────────
//

/// Whether correctness is shown after each question or only at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackMode {
    #[default]
    Deferred,
    Reveal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Active,
    /// Correctness of the current question is shown; selection is locked.
    AnswerRevealed,
    Completed,
}

/// What a successful `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Revealed,
    Moved { position: usize },
    Completed(QuizScore),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz attempt over one question set.
///
/// The question list is fixed at construction. Answers, position and timing change only
/// through the transition methods below.
pub struct QuizSession {
    set: SetRef,
    feedback: FeedbackMode,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    position: usize,
    phase: QuizPhase,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    score: Option<QuizScore>,
    review_visible: bool,
}

impl QuizSession {
    /// Start a quiz at the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if `questions` is empty.
    pub fn new(
        set: SetRef,
        questions: Vec<Question>,
        feedback: FeedbackMode,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let answers = vec![Answer::Unanswered; questions.len()];
        Ok(Self {
            set,
            feedback,
            questions,
            answers,
            position: 0,
            phase: QuizPhase::Active,
            started_at,
            completed_at: None,
            score: None,
            review_visible: false,
        })
    }

    #[must_use]
    pub fn set(&self) -> SetRef {
        self.set
    }

    #[must_use]
    pub fn feedback(&self) -> FeedbackMode {
        self.feedback
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// 0-based index of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.phase == QuizPhase::AnswerRevealed
    }

    #[must_use]
    pub fn review_visible(&self) -> bool {
        self.review_visible
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn score(&self) -> Option<QuizScore> {
        self.score
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers.get(self.position)
    }

    /// Seconds since the quiz started; stops counting once completed.
    #[must_use]
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        elapsed_secs(self.started_at, self.completed_at.unwrap_or(now))
    }

    /// Progress through the quiz in whole percent, counting the current question.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        round_ratio_percent(self.position + 1, self.total())
    }

    /// Correctness of the current answer, only while it is revealed.
    #[must_use]
    pub fn revealed_correctness(&self) -> Option<bool> {
        if !self.is_revealed() {
            return None;
        }
        let question = self.current_question()?;
        let answer = self.current_answer()?;
        Some(answer.matches(question.key()))
    }

    /// Record a click on `option` for the current question.
    ///
    /// Ignored while the answer is revealed, after completion, or for options the
    /// current question does not have.
    pub fn select_option(&mut self, option: OptionId) -> Selection {
        if self.phase != QuizPhase::Active {
            return Selection::Ignored;
        }
        let Some(question) = self.questions.get(self.position) else {
            return Selection::Ignored;
        };
        if !question.has_option(option) {
            return Selection::Ignored;
        }
        let kind = question.kind();
        match self.answers.get_mut(self.position) {
            Some(answer) => answer.select(kind, option),
            None => Selection::Ignored,
        }
    }

    /// True when the current question holds a complete answer.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        if self.is_complete() {
            return false;
        }
        match (self.current_question(), self.current_answer()) {
            (Some(question), Some(answer)) => answer.is_complete_for(question.kind()),
            _ => false,
        }
    }

    /// Move past the current question.
    ///
    /// In `FeedbackMode::Reveal` the first call only reveals correctness. On the last
    /// question this completes the quiz at `now`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after completion and `QuizError::NotReady` when the
    /// current answer is missing or incomplete.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if !self.can_advance() {
            return Err(QuizError::NotReady);
        }

        if self.feedback == FeedbackMode::Reveal && self.phase == QuizPhase::Active {
            self.phase = QuizPhase::AnswerRevealed;
            return Ok(Advance::Revealed);
        }

        self.phase = QuizPhase::Active;
        if self.is_last() {
            return self.complete(now).map(Advance::Completed);
        }
        self.position += 1;
        Ok(Advance::Moved {
            position: self.position,
        })
    }

    /// Score every question and freeze the timer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if the quiz was already completed.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<QuizScore, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        let score = QuizScore::tally(&self.questions, &self.answers);
        self.score = Some(score);
        self.completed_at = Some(now);
        self.phase = QuizPhase::Completed;
        self.review_visible = false;
        Ok(score)
    }

    /// Clear all progress and start over with the same questions.
    pub fn restart(&mut self, now: DateTime<Utc>) {
        self.answers.fill(Answer::Unanswered);
        self.position = 0;
        self.phase = QuizPhase::Active;
        self.started_at = now;
        self.completed_at = None;
        self.score = None;
        self.review_visible = false;
    }

    /// Show or hide the detailed review. Returns the new visibility.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` before completion.
    pub fn toggle_review(&mut self) -> Result<bool, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::NotCompleted);
        }
        self.review_visible = !self.review_visible;
        Ok(self.review_visible)
    }

    /// Per-question comparison of recorded and correct answers.
    #[must_use]
    pub fn review(&self) -> Vec<ReviewItem> {
        review_items(&self.questions, &self.answers)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("set", &self.set)
            .field("feedback", &self.feedback)
            .field("questions_len", &self.questions.len())
            .field("position", &self.position)
            .field("phase", &self.phase)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

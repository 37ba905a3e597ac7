use std::sync::Arc;

use prep_core::model::{OptionId, Selection, SetKind, SetRef};
use prep_core::quiz::{Advance, FeedbackMode, QuizSession};
use storage::repository::QuestionStore;

use crate::Clock;
use crate::error::QuizServiceError;

use super::progress::QuizProgress;
use super::report::QuizReport;

/// Modules run with per-question feedback; question sets are scored at the end.
#[must_use]
pub fn feedback_for(kind: SetKind) -> FeedbackMode {
    match kind {
        SetKind::Module => FeedbackMode::Reveal,
        SetKind::QuestionSet => FeedbackMode::Deferred,
    }
}

/// Orchestrates quiz loading and clock-stamped transitions.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<dyn QuestionStore>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionStore>) -> Self {
        Self { clock, questions }
    }

    /// Load `set` and start a quiz in the feedback mode its kind uses.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Store` if the fetch fails and `QuizServiceError::Empty`
    /// if the set has no questions. There is a single attempt; nothing is retried.
    pub async fn start_quiz(&self, set: SetRef) -> Result<QuizSession, QuizServiceError> {
        self.start_quiz_with_feedback(set, feedback_for(set.kind))
            .await
    }

    /// Load `set` and start a quiz with an explicit feedback mode.
    ///
    /// # Errors
    ///
    /// See [`QuizLoopService::start_quiz`].
    pub async fn start_quiz_with_feedback(
        &self,
        set: SetRef,
        feedback: FeedbackMode,
    ) -> Result<QuizSession, QuizServiceError> {
        let questions = self.questions.load_set(set).await.inspect_err(|err| {
            tracing::warn!(%set, error = %err, "failed to load questions");
        })?;
        if questions.is_empty() {
            tracing::warn!(%set, "question set is empty");
            return Err(QuizServiceError::Empty);
        }

        let count = questions.len();
        let session = QuizSession::new(set, questions, feedback, self.clock.now())
            .map_err(|_| QuizServiceError::Empty)?;
        tracing::info!(%set, count, ?feedback, "quiz started");
        Ok(session)
    }

    /// Record a selection on the current question.
    pub fn select_option(&self, session: &mut QuizSession, option: OptionId) -> Selection {
        let selection = session.select_option(option);
        tracing::trace!(set = %session.set(), %option, ?selection, "option selected");
        selection
    }

    /// Advance past the current question, completing the quiz on the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the answer is incomplete or the quiz is over.
    pub fn advance(&self, session: &mut QuizSession) -> Result<Advance, QuizServiceError> {
        let advance = session.advance(self.clock.now())?;
        match advance {
            Advance::Revealed => {
                tracing::debug!(
                    set = %session.set(),
                    position = session.position(),
                    "answer revealed"
                );
            }
            Advance::Moved { position } => {
                tracing::debug!(set = %session.set(), position, "moved to next question");
            }
            Advance::Completed(score) => {
                tracing::info!(
                    set = %session.set(),
                    correct = score.correct(),
                    total = score.total(),
                    percentage = score.percentage(),
                    "quiz completed"
                );
            }
        }
        Ok(advance)
    }

    /// Reset the quiz to its first question without re-fetching.
    pub fn restart(&self, session: &mut QuizSession) {
        session.restart(self.clock.now());
        tracing::debug!(set = %session.set(), "quiz restarted");
    }

    /// Show or hide the detailed review of a completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` before completion.
    pub fn toggle_review(&self, session: &mut QuizSession) -> Result<bool, QuizServiceError> {
        Ok(session.toggle_review()?)
    }

    #[must_use]
    pub fn elapsed_secs(&self, session: &QuizSession) -> u64 {
        session.elapsed_secs(self.clock.now())
    }

    #[must_use]
    pub fn progress(&self, session: &QuizSession) -> QuizProgress {
        QuizProgress::of(session)
    }

    /// Results for a completed quiz, `None` while it is still running.
    #[must_use]
    pub fn report(&self, session: &QuizSession) -> Option<QuizReport> {
        QuizReport::from_session(session, self.clock.now())
    }
}

use prep_core::model::{OptionId, SetRef};
use prep_core::quiz::{Advance, FeedbackMode, QuizPhase, QuizSession, ReviewItem};
use services::{QuizLoopService, QuizReport};

use crate::views::ViewError;
use crate::vm::time_fmt::{format_elapsed, format_short};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionId),
    Advance,
    Restart,
    ToggleReview,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed,
}

/// How an option is highlighted while its question is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    Correct,
    Incorrect,
}

impl OptionMark {
    #[must_use]
    pub fn class(self, selected: bool) -> &'static str {
        match (self, selected) {
            (OptionMark::Correct, _) => "quiz-option quiz-option--correct",
            (OptionMark::Incorrect, _) => "quiz-option quiz-option--incorrect",
            (OptionMark::Plain, true) => "quiz-option quiz-option--selected",
            (OptionMark::Plain, false) => "quiz-option",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: OptionId,
    /// 1-based shortcut key.
    pub shortcut: usize,
    pub text: String,
    pub selected: bool,
    pub mark: OptionMark,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub percent: u32,
    pub percent_label: String,
    pub text: String,
    pub choose_hint: Option<String>,
    pub options: Vec<OptionVm>,
    pub can_advance: bool,
    pub advance_label: &'static str,
    pub feedback: Option<FeedbackVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub heading: String,
    pub text: String,
    pub is_correct: bool,
    pub badge: &'static str,
    pub choose_hint: Option<String>,
    pub your_answer: String,
    /// Only shown for incorrect answers.
    pub correct_answer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percent_label: String,
    pub time_label: String,
    pub correct_label: String,
    pub incorrect_label: String,
    pub average_label: String,
    pub review_visible: bool,
    pub review_toggle_label: &'static str,
    pub review: Vec<ReviewItemVm>,
}

fn choose_hint(required: usize, is_multi: bool) -> Option<String> {
    is_multi.then(|| format!("Choose {required} answers"))
}

fn question_count_label(count: usize) -> String {
    if count == 1 {
        "1 question".to_string()
    } else {
        format!("{count} questions")
    }
}

impl ResultsVm {
    #[must_use]
    pub fn from_report(report: &QuizReport, review_visible: bool) -> Self {
        Self {
            score_label: format!("{}/{}", report.correct, report.total),
            percent_label: format!("{}%", report.percentage),
            time_label: format_elapsed(report.elapsed_secs),
            correct_label: question_count_label(report.correct),
            incorrect_label: question_count_label(report.incorrect),
            average_label: format_short(report.average_secs),
            review_visible,
            review_toggle_label: if review_visible {
                "Hide Detailed Review"
            } else {
                "View Detailed Review"
            },
            review: report.review.iter().map(map_review_item).collect(),
        }
    }
}

fn map_review_item(item: &ReviewItem) -> ReviewItemVm {
    let your_answer = if item.your_answer.is_empty() {
        "No answer selected".to_string()
    } else {
        item.your_answer.join(", ")
    };
    ReviewItemVm {
        heading: format!("Question {}", item.number),
        text: item.text.clone(),
        is_correct: item.is_correct,
        badge: if item.is_correct { "Correct" } else { "Incorrect" },
        choose_hint: choose_hint(item.kind.required(), item.kind.is_multi()),
        your_answer,
        correct_answer: (!item.is_correct).then(|| item.correct_answer.join(", ")),
    }
}

/// Holds the running quiz for the quiz screen and applies user intents to it.
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn set(&self) -> SetRef {
        self.session.set()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.session.can_advance()
    }

    /// Options of the current question in display order.
    #[must_use]
    pub fn option_ids(&self) -> Vec<OptionId> {
        self.session
            .current_question()
            .map(|q| q.options().iter().map(|o| o.id()).collect())
            .unwrap_or_default()
    }

    /// Apply `intent`. Attempts the quiz does not allow in its current state are no-ops.
    pub fn dispatch(&mut self, quiz_loop: &QuizLoopService, intent: QuizIntent) -> QuizOutcome {
        match intent {
            QuizIntent::Select(option) => {
                quiz_loop.select_option(&mut self.session, option);
            }
            QuizIntent::Advance => match quiz_loop.advance(&mut self.session) {
                Ok(Advance::Completed(_)) => return QuizOutcome::Completed,
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(set = %self.session.set(), error = %err, "advance ignored");
                }
            },
            QuizIntent::Restart => quiz_loop.restart(&mut self.session),
            QuizIntent::ToggleReview => {
                if let Err(err) = quiz_loop.toggle_review(&mut self.session) {
                    tracing::debug!(
                        set = %self.session.set(),
                        error = %err,
                        "review toggle ignored"
                    );
                }
            }
        }
        if self.session.is_complete() {
            QuizOutcome::Completed
        } else {
            QuizOutcome::Continue
        }
    }

    /// Running clock label while active, frozen once the quiz is completed.
    #[must_use]
    pub fn elapsed_label(&self, quiz_loop: &QuizLoopService) -> String {
        format_elapsed(quiz_loop.elapsed_secs(&self.session))
    }

    /// The current question ready for display.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::MissingQuestion` if the position has no question.
    pub fn question(&self, quiz_loop: &QuizLoopService) -> Result<QuestionVm, ViewError> {
        let question = self
            .session
            .current_question()
            .ok_or(ViewError::MissingQuestion)?;
        let answer = self
            .session
            .current_answer()
            .ok_or(ViewError::MissingQuestion)?;
        let progress = quiz_loop.progress(&self.session);
        let revealed = self.session.phase() == QuizPhase::AnswerRevealed;
        let key = question.key();

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let selected = answer.is_selected(option.id());
                let mark = if !revealed {
                    OptionMark::Plain
                } else if key.contains(option.id()) {
                    OptionMark::Correct
                } else if selected {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Plain
                };
                OptionVm {
                    id: option.id(),
                    shortcut: idx + 1,
                    text: option.text().to_string(),
                    selected,
                    mark,
                    locked: revealed,
                }
            })
            .collect();

        let feedback = self.session.revealed_correctness().map(|correct| {
            let message = if correct {
                "Correct!".to_string()
            } else {
                let answers: Vec<&str> = question
                    .correct_options()
                    .into_iter()
                    .map(|o| o.text())
                    .collect();
                format!("Incorrect. Correct answer: {}", answers.join(", "))
            };
            FeedbackVm { correct, message }
        });

        let advance_label = if self.session.feedback() == FeedbackMode::Reveal && !revealed {
            "Check Answer"
        } else if progress.is_last {
            "Complete Quiz"
        } else {
            "Next Question"
        };

        Ok(QuestionVm {
            progress_label: format!("Question {} of {}", progress.number, progress.total),
            percent: progress.percent,
            percent_label: format!("{}% Complete", progress.percent),
            text: question.text().to_string(),
            choose_hint: choose_hint(question.kind().required(), question.kind().is_multi()),
            options,
            can_advance: self.session.can_advance(),
            advance_label,
            feedback,
        })
    }

    /// Results for the completed quiz, `None` while it is running.
    #[must_use]
    pub fn results(&self, quiz_loop: &QuizLoopService) -> Option<ResultsVm> {
        quiz_loop
            .report(&self.session)
            .map(|report| ResultsVm::from_report(&report, self.session.review_visible()))
    }
}

/// Load `set` and wrap the new quiz for the view.
///
/// # Errors
///
/// Returns `ViewError::EmptySet` when the set cannot be fetched or has no questions.
pub async fn start_quiz(quiz_loop: &QuizLoopService, set: SetRef) -> Result<QuizVm, ViewError> {
    match quiz_loop.start_quiz(set).await {
        Ok(session) => Ok(QuizVm::new(session)),
        Err(err) if err.is_no_questions() => Err(ViewError::EmptySet),
        Err(_) => Err(ViewError::Unknown),
    }
}

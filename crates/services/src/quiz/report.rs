use chrono::{DateTime, Utc};
use prep_core::model::SetRef;
use prep_core::quiz::{QuizSession, ReviewItem, round_div};

/// Everything the results screen shows for a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub set: SetRef,
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub percentage: u32,
    pub elapsed_secs: u64,
    pub average_secs: u64,
    pub review: Vec<ReviewItem>,
}

impl QuizReport {
    /// Build the report, or `None` if the quiz has not been completed.
    #[must_use]
    pub fn from_session(session: &QuizSession, now: DateTime<Utc>) -> Option<Self> {
        let score = session.score()?;
        let elapsed_secs = session.elapsed_secs(now);
        Some(Self {
            set: session.set(),
            correct: score.correct(),
            incorrect: score.incorrect(),
            total: score.total(),
            percentage: score.percentage(),
            elapsed_secs,
            average_secs: round_div(elapsed_secs, score.total()),
            review: session.review(),
        })
    }
}

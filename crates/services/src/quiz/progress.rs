use prep_core::quiz::QuizSession;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the current question.
    pub number: usize,
    pub total: usize,
    pub answered: usize,
    pub percent: u32,
    pub is_last: bool,
    pub is_complete: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        Self {
            number: session.position() + 1,
            total: session.total(),
            answered: session.answers().iter().filter(|a| !a.is_empty()).count(),
            percent: session.progress_percent(),
            is_last: session.is_last(),
            is_complete: session.is_complete(),
        }
    }
}

use crate::model::{Answer, AnswerKind, Question, QuestionId};

/// Final tally of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    correct: usize,
    total: usize,
}

impl QuizScore {
    /// Score every question against its recorded answer. Missing answers count as wrong.
    #[must_use]
    pub fn tally(questions: &[Question], answers: &[Answer]) -> Self {
        let correct = questions
            .iter()
            .enumerate()
            .filter(|(idx, question)| {
                answers
                    .get(*idx)
                    .is_some_and(|answer| answer.matches(question.key()))
            })
            .count();
        Self {
            correct,
            total: questions.len(),
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    /// Accuracy in whole percent, rounded half up.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        round_ratio_percent(self.correct, self.total)
    }
}

/// `part / whole * 100`, rounded half up. Zero when `whole` is zero.
#[must_use]
pub fn round_ratio_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = (part as u128 * 200 + whole as u128) / (whole as u128 * 2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// `numerator / denominator`, rounded half up. Zero when `denominator` is zero.
#[must_use]
pub fn round_div(numerator: u64, denominator: usize) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let denominator = denominator as u64;
    (numerator * 2 + denominator) / (denominator * 2)
}

/// Side-by-side comparison of one question for the results review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// 1-based position in the quiz.
    pub number: usize,
    pub question_id: QuestionId,
    pub text: String,
    pub kind: AnswerKind,
    pub is_correct: bool,
    /// Texts of the options the user picked, in display order.
    pub your_answer: Vec<String>,
    /// Texts of the correct options, in display order.
    pub correct_answer: Vec<String>,
}

#[must_use]
pub fn review_items(questions: &[Question], answers: &[Answer]) -> Vec<ReviewItem> {
    questions
        .iter()
        .enumerate()
        .map(|(idx, question)| {
            let answer = answers.get(idx).cloned().unwrap_or_default();
            let texts = |opts: Vec<&crate::model::AnswerOption>| {
                opts.into_iter()
                    .map(|opt| opt.text().to_string())
                    .collect::<Vec<_>>()
            };
            ReviewItem {
                number: idx + 1,
                question_id: question.id(),
                text: question.text().to_string(),
                kind: question.kind(),
                is_correct: answer.matches(question.key()),
                your_answer: texts(question.options_where(|id| answer.is_selected(id))),
                correct_answer: texts(question.correct_options()),
            }
        })
        .collect()
}

mod scoring;
mod session;

pub use scoring::{QuizScore, ReviewItem, review_items, round_div, round_ratio_percent};
pub use session::{Advance, FeedbackMode, QuizError, QuizPhase, QuizSession};

mod progress;
mod report;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizServiceError;
pub use progress::QuizProgress;
pub use report::QuizReport;
pub use workflow::{QuizLoopService, feedback_for};

mod answer;
mod ids;
mod question;
mod set;

pub use answer::{Answer, Selection};
pub use ids::{OptionId, ParseIdError, QuestionId, SetId};
pub use question::{AnswerKey, AnswerKind, AnswerOption, Question, QuestionError};
pub use set::{SetKind, SetRef};

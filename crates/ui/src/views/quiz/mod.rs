mod results;
mod view;

pub use view::{ModuleQuizView, QuestionSetQuizView};

#[cfg(test)]
pub(crate) use view::QuizTestHandles;

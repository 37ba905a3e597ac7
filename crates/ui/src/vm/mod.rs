mod catalog_vm;
mod quiz_vm;
mod time_fmt;

pub use catalog_vm::{ModuleCardVm, QuestionSetCardVm, map_module_cards, map_question_set_cards};
pub use quiz_vm::{
    FeedbackVm, OptionMark, OptionVm, QuestionVm, QuizIntent, QuizOutcome, QuizVm, ResultsVm,
    ReviewItemVm, start_quiz,
};
pub use time_fmt::{format_elapsed, format_short};

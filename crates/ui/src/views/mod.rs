mod home;
mod modules;
mod question_sets;
pub(crate) mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use modules::ModulesView;
pub use question_sets::QuestionSetsView;
pub use quiz::{ModuleQuizView, QuestionSetQuizView};
pub use state::{ViewError, ViewState, view_state_from_resource};

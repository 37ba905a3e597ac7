use services::{ModuleInfo, QuestionSetInfo};

use crate::routes::Route;

/// Card on the question set listing page.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionSetCardVm {
    pub id: u64,
    pub title: String,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub topics: &'static str,
    pub meta: String,
    pub cta: String,
    pub route: Route,
}

/// Card on the module listing page.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleCardVm {
    pub id: u64,
    pub title: String,
    pub description: &'static str,
    pub meta: String,
    pub route: Route,
}

#[must_use]
pub fn map_question_set_cards(sets: &[QuestionSetInfo]) -> Vec<QuestionSetCardVm> {
    sets.iter()
        .map(|info| {
            let id = info.id.value();
            QuestionSetCardVm {
                id,
                title: format!("Question Set {id}"),
                difficulty: info.difficulty.label(),
                difficulty_class: info.difficulty.css_class(),
                topics: info.topics,
                meta: format!(
                    "{} questions · ~{} min",
                    info.questions, info.estimated_minutes
                ),
                cta: format!("Start Question Set {id}"),
                route: Route::QuestionSetQuiz { id: info.id },
            }
        })
        .collect()
}

#[must_use]
pub fn map_module_cards(modules: &[ModuleInfo]) -> Vec<ModuleCardVm> {
    modules
        .iter()
        .map(|info| {
            let id = info.id.value();
            ModuleCardVm {
                id,
                title: format!("Module {id}: {}", info.title),
                description: info.description,
                meta: format!("{} questions", info.questions),
                route: Route::ModuleQuiz { id: info.id },
            }
        })
        .collect()
}

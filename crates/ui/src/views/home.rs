use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let module_count = catalog.modules().len();
    let set_count = catalog.question_sets().len();
    let module_questions: u32 = catalog.modules().iter().map(|m| m.questions).sum();

    rsx! {
        div { class: "page home-page",
            header { class: "hero",
                h1 { "AWS Cloud Practitioner Exam Prep" }
                p { class: "hero__subtitle", "CLF-C02 practice quizzes" }
            }
            div { class: "home-cards",
                div { class: "home-card",
                    h2 { "Learning Modules" }
                    p { "Study one topic at a time with instant feedback after every question." }
                    p { class: "home-card__meta", "{module_count} modules · {module_questions} questions" }
                    Link { class: "btn btn-primary", to: Route::Modules {}, "Browse Modules" }
                }
                div { class: "home-card",
                    h2 { "Practice Question Sets" }
                    p { "Full-length practice sets scored at the end, like the real exam." }
                    p { class: "home-card__meta", "{set_count} question sets" }
                    Link { class: "btn btn-primary", to: Route::QuestionSets {}, "Browse Question Sets" }
                }
            }
        }
    }
}

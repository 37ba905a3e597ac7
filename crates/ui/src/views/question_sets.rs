use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::vm::{QuestionSetCardVm, map_question_set_cards};

#[component]
pub fn QuestionSetsView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = map_question_set_cards(ctx.catalog().question_sets());

    rsx! {
        div { class: "page",
            h2 { "Practice Question Sets" }
            p { class: "page__subtitle", "Answers are scored when you complete the set." }
            ul { class: "card-grid",
                for card in cards {
                    QuestionSetCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
fn QuestionSetCard(card: QuestionSetCardVm) -> Element {
    rsx! {
        li { class: "catalog-card",
            div { class: "catalog-card__header",
                h3 { class: "catalog-card__title", "{card.title}" }
                span { class: "{card.difficulty_class}", "{card.difficulty}" }
            }
            p { class: "catalog-card__description", "{card.topics}" }
            p { class: "catalog-card__meta", "{card.meta}" }
            Link { class: "btn btn-primary", to: card.route.clone(), "{card.cta}" }
        }
    }
}

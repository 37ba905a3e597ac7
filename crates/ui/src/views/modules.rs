use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::vm::{ModuleCardVm, map_module_cards};

#[component]
pub fn ModulesView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = map_module_cards(ctx.catalog().modules());

    rsx! {
        div { class: "page",
            h2 { "Learning Modules" }
            p { class: "page__subtitle", "Each module checks your answer as you go." }
            ul { class: "card-grid",
                for card in cards {
                    ModuleCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
fn ModuleCard(card: ModuleCardVm) -> Element {
    rsx! {
        li { class: "catalog-card",
            h3 { class: "catalog-card__title", "{card.title}" }
            p { class: "catalog-card__description", "{card.description}" }
            p { class: "catalog-card__meta", "{card.meta}" }
            Link { class: "btn btn-primary", to: card.route.clone(), "Start Module" }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::{QuizIntent, ResultsVm, ReviewItemVm};

#[component]
pub(super) fn ResultsPanel(
    title: String,
    results: ResultsVm,
    on_intent: EventHandler<QuizIntent>,
    back_label: &'static str,
    back: Route,
) -> Element {
    rsx! {
        div { class: "quiz-results",
            h3 { class: "quiz-results__title", "Quiz Complete!" }
            p { class: "quiz-results__subtitle", "{title}" }
            div { class: "quiz-results__score",
                span { class: "quiz-results__percent", "{results.percent_label}" }
                span { class: "quiz-results__fraction", "{results.score_label}" }
            }
            dl { class: "quiz-results__stats",
                dt { "Correct" }
                dd { "{results.correct_label}" }
                dt { "Incorrect" }
                dd { "{results.incorrect_label}" }
                dt { "Time" }
                dd { "{results.time_label}" }
                dt { "Avg. per question" }
                dd { "{results.average_label}" }
            }
            div { class: "quiz-results__actions",
                button {
                    class: "btn btn-primary",
                    id: "quiz-retry",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Retry Quiz"
                }
                button {
                    class: "btn btn-secondary",
                    id: "quiz-review-toggle",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::ToggleReview),
                    "{results.review_toggle_label}"
                }
                Link { class: "btn btn-ghost", to: back, "{back_label}" }
            }
            if results.review_visible {
                ol { class: "quiz-review",
                    for item in results.review {
                        ReviewItem { key: "{item.heading}", item }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewItem(item: ReviewItemVm) -> Element {
    let class = if item.is_correct {
        "quiz-review__item quiz-review__item--correct"
    } else {
        "quiz-review__item quiz-review__item--incorrect"
    };
    rsx! {
        li { class,
            div { class: "quiz-review__header",
                span { class: "quiz-review__number", "{item.heading}" }
                span { class: "quiz-review__badge", "{item.badge}" }
            }
            p { class: "quiz-review__text", "{item.text}" }
            if let Some(hint) = item.choose_hint.as_ref() {
                p { class: "quiz-question__hint", "({hint})" }
            }
            p { class: "quiz-review__answer",
                strong { "Your Answer: " }
                "{item.your_answer}"
            }
            if let Some(correct) = item.correct_answer.as_ref() {
                p { class: "quiz-review__answer quiz-review__answer--correct",
                    strong { "Correct Answer: " }
                    "{correct}"
                }
            }
        }
    }
}

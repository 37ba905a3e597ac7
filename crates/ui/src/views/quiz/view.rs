use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::model::{SetId, SetKind, SetRef};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{OptionVm, QuestionVm, QuizIntent, QuizVm, start_quiz};

use super::results::ResultsPanel;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn QuestionSetQuizView(id: SetId) -> Element {
    rsx! {
        QuizView { set: SetRef::question_set(id.value()) }
    }
}

#[component]
pub fn ModuleQuizView(id: SetId) -> Element {
    rsx! {
        QuizView { set: SetRef::module(id.value()) }
    }
}

fn back_link(kind: SetKind) -> (&'static str, Route) {
    match kind {
        SetKind::Module => ("Back to Modules", Route::Modules {}),
        SetKind::QuestionSet => ("Back to Question Sets", Route::QuestionSets {}),
    }
}

#[component]
fn QuizView(set: SetRef) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let title = ctx.catalog().title_for(set);
    let (back_label, back) = back_link(set.kind);

    let vm = use_signal(|| None::<QuizVm>);
    let mut tick = use_signal(|| 0_u64);

    let quiz_loop_for_resource = quiz_loop.clone();
    // Navigating between quizzes keeps this component and swaps `set`.
    let resource = use_resource(use_reactive!(|(set,)| {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut vm = vm;
        async move {
            vm.set(None);
            let started = start_quiz(&quiz_loop, set).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    }));

    // Dropped with the component, so leaving the page stops the clock.
    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            let running = vm.peek().as_ref().is_some_and(|vm| !vm.is_complete());
            if running {
                tick.with_mut(|t| *t += 1);
            }
        }
    });

    let dispatch_intent = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| {
            let mut vm = vm;
            if let Some(vm) = vm.write().as_mut() {
                vm.dispatch(&quiz_loop, intent);
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let Some(options) = vm
            .read()
            .as_ref()
            .filter(|vm| !vm.is_complete())
            .map(QuizVm::option_ids)
        else {
            return;
        };
        match evt.data.key() {
            Key::Enter => {
                evt.prevent_default();
                dispatch_intent.call(QuizIntent::Advance);
            }
            Key::Character(value) => {
                let option = value
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|idx| options.get(idx).copied());
                if let Some(option) = option {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Select(option));
                }
            }
            _ => {}
        }
    });

    // Subscribe to the ticker so the clock label refreshes.
    let _ticks = tick();
    let state = view_state_from_resource(&resource);
    let vm_guard = vm.read();
    let elapsed_label = vm_guard
        .as_ref()
        .map_or_else(|| "0:00".to_string(), |vm| vm.elapsed_label(&quiz_loop));
    let results = vm_guard.as_ref().and_then(|vm| vm.results(&quiz_loop));
    let question = vm_guard
        .as_ref()
        .filter(|vm| !vm.is_complete())
        .map(|vm| vm.question(&quiz_loop));
    drop(vm_guard);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            header { class: "quiz-header",
                h2 { class: "quiz-header__title", "{title}" }
                if matches!(state, ViewState::Ready(())) {
                    span { class: "quiz-header__timer", "Time: {elapsed_label}" }
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "quiz-loading",
                        div { class: "spinner" }
                        p { "Loading questions..." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "quiz-empty",
                        p { "{err.message()}" }
                        Link { class: "btn btn-secondary", to: back.clone(), "{back_label}" }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(results) = results {
                        ResultsPanel {
                            title: title.clone(),
                            results,
                            on_intent: dispatch_intent,
                            back_label,
                            back: back.clone(),
                        }
                    } else {
                        match question {
                            Some(Ok(question)) => rsx! {
                                QuestionPanel { question, on_intent: dispatch_intent }
                            },
                            Some(Err(err)) => rsx! {
                                div { class: "quiz-empty",
                                    p { "{err.message()}" }
                                    Link { class: "btn btn-secondary", to: back.clone(), "{back_label}" }
                                }
                            },
                            None => rsx! {
                                p { "Loading questions..." }
                            },
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let can_advance = question.can_advance;
    rsx! {
        div { class: "quiz-progress",
            div { class: "quiz-progress__labels",
                span { "{question.progress_label}" }
                span { "{question.percent_label}" }
            }
            div { class: "quiz-progress__track",
                div { class: "quiz-progress__fill", style: "width: {question.percent}%" }
            }
        }
        div { class: "quiz-question",
            p { class: "quiz-question__text", "{question.text}" }
            if let Some(hint) = question.choose_hint.as_ref() {
                p { class: "quiz-question__hint", "({hint})" }
            }
            ul { class: "quiz-options",
                for option in question.options {
                    OptionButton { key: "{option.id}", option, on_intent }
                }
            }
            if let Some(feedback) = question.feedback.as_ref() {
                p {
                    class: if feedback.correct { "quiz-feedback quiz-feedback--correct" } else { "quiz-feedback quiz-feedback--incorrect" },
                    "{feedback.message}"
                }
            }
        }
        footer { class: "quiz-footer",
            button {
                class: "btn btn-primary",
                id: "quiz-advance",
                r#type: "button",
                disabled: !can_advance,
                onclick: move |_| on_intent.call(QuizIntent::Advance),
                "{question.advance_label}"
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let id = option.id;
    rsx! {
        li {
            button {
                class: option.mark.class(option.selected),
                r#type: "button",
                disabled: option.locked,
                aria_pressed: if option.selected { "true" } else { "false" },
                onclick: move |_| on_intent.call(QuizIntent::Select(id)),
                span { class: "quiz-option__key", "{option.shortcut}" }
                span { class: "quiz-option__text", "{option.text}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}

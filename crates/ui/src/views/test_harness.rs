use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use prep_core::model::{
    AnswerKey, AnswerOption, OptionId, Question, QuestionId, SetId, SetKind, SetRef,
};
use prep_core::time::fixed_clock;
use services::{CatalogService, QuizLoopService};
use storage::repository::{InMemoryQuestionStore, QuestionStore};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, ModuleQuizView, ModulesView, QuestionSetQuizView, QuestionSetsView};
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    catalog: Arc<CatalogService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Modules,
    QuestionSets,
    Quiz(SetRef),
    /// Module quiz whose id the test can change after mounting.
    SwitchableModule(u64),
}

/// Lets a test change the module shown by `ViewKind::SwitchableModule`.
#[derive(Clone, Default)]
pub struct ModuleSwitch {
    id: Rc<RefCell<Option<Signal<u64>>>>,
}

impl ModuleSwitch {
    fn register(&self, id: Signal<u64>) {
        *self.id.borrow_mut() = Some(id);
    }

    pub fn switch_to(&self, module: u64) {
        let mut id = (*self.id.borrow()).expect("switchable module mounted");
        id.set(module);
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
    module_switch: ModuleSwitch,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    use_context_provider(|| props.module_switch.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Modules => rsx! { ModulesView {} },
        ViewKind::QuestionSets => rsx! { QuestionSetsView {} },
        ViewKind::Quiz(set) => match set.kind {
            SetKind::Module => rsx! { ModuleQuizView { id: set.id } },
            SetKind::QuestionSet => rsx! { QuestionSetQuizView { id: set.id } },
        },
        ViewKind::SwitchableModule(initial) => rsx! { SwitchableModule { initial } },
    }
}

#[component]
fn SwitchableModule(initial: u64) -> Element {
    let id = use_signal(|| initial);
    let switch = use_context::<ModuleSwitch>();
    use_hook(move || switch.register(id));
    rsx! { ModuleQuizView { id: SetId::new(id()) } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: QuizTestHandles,
    pub module_switch: ModuleSwitch,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&self) -> Callback<QuizIntent> {
        self.quiz_handles.dispatch()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Single-answer question whose options read `Q{id} option {n}`.
pub fn sample_question(id: u64, correct: u64) -> Question {
    let options = (1..=4)
        .map(|opt| AnswerOption::new(OptionId::new(opt), format!("Q{id} option {opt}")))
        .collect();
    Question::new(
        QuestionId::new(id),
        format!("Sample question {id}?"),
        options,
        AnswerKey::Single(OptionId::new(correct)),
    )
    .expect("valid question")
}

pub fn setup_view_harness(view: ViewKind, sets: Vec<(SetRef, Vec<Question>)>) -> ViewHarness {
    let store = InMemoryQuestionStore::new();
    for (set, questions) in sets {
        store.insert_set(set, questions).expect("insert set");
    }
    setup_view_harness_with_store(view, Arc::new(store))
}

pub fn setup_view_harness_with_store(
    view: ViewKind,
    store: Arc<dyn QuestionStore>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz_loop: Arc::new(QuizLoopService::new(fixed_clock(), store)),
        catalog: Arc::new(CatalogService::new()),
    });
    let quiz_handles = QuizTestHandles::default();
    let module_switch = ModuleSwitch::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            module_switch: module_switch.clone(),
        },
    );
    ViewHarness {
        dom,
        quiz_handles,
        module_switch,
    }
}

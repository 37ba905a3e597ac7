use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use prep_core::model::SetId;

use crate::views::{HomeView, ModuleQuizView, ModulesView, QuestionSetQuizView, QuestionSetsView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/modules", ModulesView)] Modules {},
        #[route("/question-sets", QuestionSetsView)] QuestionSets {},
        #[route("/question-sets/:id/quiz", QuestionSetQuizView)] QuestionSetQuiz { id: SetId },
        #[route("/modules/:id/quiz", ModuleQuizView)] ModuleQuiz { id: SetId },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    rsx! {
        nav { class: "topbar",
            Link { class: "topbar__brand", to: Route::Home {}, "CLF-C02 Prep" }
            ul { class: "topbar__links",
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Modules {}, "Modules" } }
                li { Link { to: Route::QuestionSets {}, "Question Sets" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_routes_carry_set_ids() {
        let route: Route = "/modules/3/quiz".parse().expect("module route");
        assert_eq!(route, Route::ModuleQuiz { id: SetId::new(3) });

        let path = Route::QuestionSetQuiz { id: SetId::new(11) }.to_string();
        assert_eq!(path, "/question-sets/11/quiz");
    }

    #[test]
    fn non_numeric_set_id_does_not_match() {
        assert!("/question-sets/abc/quiz".parse::<Route>().is_err());
    }
}

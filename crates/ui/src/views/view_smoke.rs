use std::sync::Arc;

use async_trait::async_trait;
use prep_core::model::{OptionId, Question, SetRef};
use storage::repository::{QuestionStore, StoreError};

use crate::vm::QuizIntent;

use super::test_harness::{
    ViewKind, sample_question, setup_view_harness, setup_view_harness_with_store,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_catalog_counts() {
    let mut harness = setup_view_harness(ViewKind::Home, Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("11 question sets"), "missing set count in {html}");
    assert!(html.contains("11 modules"), "missing module count in {html}");
    assert!(html.contains("Browse Modules"), "missing modules link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_sets_view_smoke_lists_all_sets() {
    let mut harness = setup_view_harness(ViewKind::QuestionSets, Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Question Set 1"), "missing first set in {html}");
    assert!(html.contains("Question Set 11"), "missing last set in {html}");
    assert!(html.contains("Cost Optimization, Billing"), "missing topics in {html}");
    assert!(html.contains("Beginner"), "missing difficulty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn modules_view_smoke_lists_titles() {
    let mut harness = setup_view_harness(ViewKind::Modules, Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Module 1: Cloud Concepts"), "missing first module in {html}");
    assert!(html.contains("Module 11: Mock Exam"), "missing mock exam in {html}");
    assert!(html.contains("65 questions"), "missing question count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_set_message() {
    let mut harness = setup_view_harness(ViewKind::Quiz(SetRef::question_set(3)), Vec::new());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No questions found for this set."),
        "missing empty message in {html}"
    );
    assert!(html.contains("Back to Question Sets"), "missing back link in {html}");
}

struct FailingStore;

#[async_trait]
impl QuestionStore for FailingStore {
    async fn load_set(&self, _set: SetRef) -> Result<Vec<Question>, StoreError> {
        Err(StoreError::Connection("offline".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_treats_fetch_failure_as_empty() {
    let mut harness =
        setup_view_harness_with_store(ViewKind::Quiz(SetRef::module(2)), Arc::new(FailingStore));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No questions found for this set."),
        "missing empty message in {html}"
    );
    assert!(html.contains("Back to Modules"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let set = SetRef::question_set(1);
    let mut harness = setup_view_harness(
        ViewKind::Quiz(set),
        vec![(set, vec![sample_question(1, 2), sample_question(2, 1)])],
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question Set 1"), "missing title in {html}");
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("50% Complete"), "missing percent in {html}");
    assert!(html.contains("Sample question 1?"), "missing question in {html}");
    assert!(html.contains("Q1 option 4"), "missing option in {html}");
    assert!(html.contains("Time: 0:00"), "missing timer in {html}");
    assert!(html.contains("Next Question"), "missing advance button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_walks_to_results_and_review() {
    let set = SetRef::question_set(2);
    let mut harness = setup_view_harness(
        ViewKind::Quiz(set),
        vec![(set, vec![sample_question(1, 2), sample_question(2, 1)])],
    );
    harness.rebuild();
    harness.drive_async().await;

    let dispatch = harness.dispatch();
    dispatch.call(QuizIntent::Select(OptionId::new(2)));
    dispatch.call(QuizIntent::Advance);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing progress in {html}");
    assert!(html.contains("Complete Quiz"), "missing complete button in {html}");

    dispatch.call(QuizIntent::Select(OptionId::new(3)));
    dispatch.call(QuizIntent::Advance);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing results in {html}");
    assert!(html.contains("50%"), "missing percentage in {html}");
    assert!(html.contains("1/2"), "missing score in {html}");
    assert!(html.contains("View Detailed Review"), "missing review toggle in {html}");
    assert!(!html.contains("Your Answer:"), "review should start hidden in {html}");

    dispatch.call(QuizIntent::ToggleReview);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Hide Detailed Review"), "missing hide toggle in {html}");
    assert!(html.contains("Q2 option 3"), "missing your answer in {html}");
    assert!(html.contains("Q2 option 1"), "missing correct answer in {html}");

    dispatch.call(QuizIntent::Restart);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "restart should return to start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_quiz_view_smoke_reveals_feedback() {
    let set = SetRef::module(1);
    let mut harness = setup_view_harness(
        ViewKind::Quiz(set),
        vec![(set, vec![sample_question(1, 1), sample_question(2, 2)])],
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Module 1: Cloud Concepts"), "missing title in {html}");
    assert!(html.contains("Check Answer"), "missing check button in {html}");

    let dispatch = harness.dispatch();
    dispatch.call(QuizIntent::Select(OptionId::new(1)));
    dispatch.call(QuizIntent::Advance);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("quiz-option--correct"), "missing highlight in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_quiz_view_smoke_reloads_when_id_changes() {
    let mut harness = setup_view_harness(
        ViewKind::SwitchableModule(1),
        vec![
            (SetRef::module(1), vec![sample_question(1, 1)]),
            (SetRef::module(2), vec![sample_question(7, 2), sample_question(8, 3)]),
        ],
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Module 1: Cloud Concepts"), "missing title in {html}");
    assert!(html.contains("Sample question 1?"), "missing question in {html}");

    harness.module_switch.switch_to(2);
    harness.drive();
    harness.drive_async().await;
    harness.drive();
    let html = harness.render();
    assert!(
        html.contains("Module 2: Cloud Economics and Billing"),
        "missing title in {html}"
    );
    assert!(html.contains("Sample question 7?"), "stale quiz in {html}");
    assert!(!html.contains("Sample question 1?"), "stale quiz in {html}");
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
}

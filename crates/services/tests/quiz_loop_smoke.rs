use std::sync::Arc;

use prep_core::model::{AnswerKey, AnswerOption, OptionId, Question, QuestionId, SetRef};
use prep_core::quiz::Advance;
use prep_core::time::fixed_now;
use services::{Clock, QuizLoopService, QuizServiceError};
use storage::repository::{InMemoryQuestionStore, QuestionStore, StoreError};

fn question(id: u64, correct: &[u64]) -> Question {
    let options = (1..=4)
        .map(|opt| AnswerOption::new(OptionId::new(opt), format!("Q{id}-{opt}")))
        .collect();
    let key = AnswerKey::from_ids(
        QuestionId::new(id),
        correct.iter().copied().map(OptionId::new),
    )
    .unwrap();
    Question::new(QuestionId::new(id), format!("Question {id}?"), options, key).unwrap()
}

#[tokio::test]
async fn three_question_set_scores_two_thirds() {
    let set = SetRef::question_set(1);
    let store = InMemoryQuestionStore::new();
    store
        .insert_set(
            set,
            vec![question(1, &[1]), question(2, &[2, 4]), question(3, &[3])],
        )
        .unwrap();
    let service = QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(store));

    let mut session = service.start_quiz(set).await.unwrap();

    // Q1 correct.
    service.select_option(&mut session, OptionId::new(1));
    service.advance(&mut session).unwrap();

    // Q2 wrong: only one of the two correct options.
    service.select_option(&mut session, OptionId::new(2));
    service.select_option(&mut session, OptionId::new(3));
    service.advance(&mut session).unwrap();

    // Q3 correct.
    service.select_option(&mut session, OptionId::new(3));
    let outcome = service.advance(&mut session).unwrap();
    assert!(matches!(outcome, Advance::Completed(_)));

    let report = service.report(&session).expect("report after completion");
    assert_eq!(report.correct, 2);
    assert_eq!(report.incorrect, 1);
    assert_eq!(report.percentage, 67);
    assert_eq!(report.elapsed_secs, 0);
    assert_eq!(report.review.len(), 3);
    assert!(!report.review[1].is_correct);
    assert_eq!(report.review[1].your_answer, vec!["Q2-2", "Q2-3"]);
    assert_eq!(report.review[1].correct_answer, vec!["Q2-2", "Q2-4"]);

    service.restart(&mut session);
    assert!(service.report(&session).is_none());
    assert_eq!(service.progress(&session).answered, 0);
}

struct UnreachableStore;

#[async_trait::async_trait]
impl QuestionStore for UnreachableStore {
    async fn load_set(&self, _set: SetRef) -> Result<Vec<Question>, StoreError> {
        Err(StoreError::Connection("offline".to_string()))
    }
}

#[tokio::test]
async fn fetch_failure_surfaces_as_no_questions() {
    let service = QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(UnreachableStore));
    let err = service
        .start_quiz(SetRef::question_set(3))
        .await
        .unwrap_err();
    assert!(matches!(err, QuizServiceError::Store(StoreError::Connection(_))));
    assert!(err.is_no_questions());
}

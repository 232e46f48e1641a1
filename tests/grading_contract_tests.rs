//! Contract tests pinning the grading-facing behavior the web client
//! relies on: rendered-choice format, answer-key resolution precedence,
//! and scoring of unanswered questions.

use serde_json::json;

use mcqgen_server::models::domain::{Choice, QuestionRecord};
use mcqgen_server::services::{grader, normalizer};

fn record(choices: Vec<Choice>, correct: &str) -> QuestionRecord {
    QuestionRecord {
        question: "Q".to_string(),
        choices,
        correct: correct.to_string(),
    }
}

#[test]
fn labelled_mapping_resolves_by_label() {
    let record = record(
        vec![Choice::new("a", "Paris"), Choice::new("b", "London")],
        "a",
    );
    assert_eq!(grader::resolve_correct_text(&record), "a) Paris");
}

#[test]
fn sequence_options_resolve_by_text_through_synthetic_label() {
    let raw = json!({"1": {"mcq": "Q", "options": ["Paris", "London"], "correct": "Paris"}});
    let document = normalizer::parse_response(&raw).unwrap();
    let records = normalizer::normalize(&document).expect("document should normalize");

    assert_eq!(grader::resolve_correct_text(&records[0]), "1) Paris");
}

#[test]
fn three_question_scenario_scores_one_of_three() {
    let records = vec![
        record(vec![Choice::new("a", "X"), Choice::new("b", "Y")], "a"),
        record(vec![Choice::new("a", "X"), Choice::new("b", "Y")], "b"),
        record(vec![Choice::new("a", "X"), Choice::new("b", "Y")], "a"),
    ];

    // Correct, unanswered, wrong.
    let selections = vec![
        Some("a) X".to_string()),
        None,
        Some("b) Y".to_string()),
    ];
    let result = grader::grade(&records, &selections);

    assert_eq!(result.score, 1);
    assert_eq!(result.total, 3);
    assert!(!result.questions[1].is_correct);
    assert_eq!(result.questions[1].selected_text, None);
}

#[test]
fn empty_question_entries_never_reach_grading() {
    let raw = json!({
        "1": {"mcq": "First", "options": {"a": "X"}, "correct": "a"},
        "2": {"mcq": "", "options": {"a": "X"}, "correct": "a"},
        "3": {"mcq": "Third", "options": {"a": "X"}, "correct": "a"}
    });
    let document = normalizer::parse_response(&raw).unwrap();
    let records = normalizer::normalize(&document).expect("document should normalize");

    let result = grader::grade(&records, &[]);

    assert_eq!(result.total, 2);
    assert!(result.questions.iter().all(|q| !q.is_correct));
}

#[test]
fn score_never_exceeds_total() {
    let records = vec![record(vec![Choice::new("a", "X")], "a")];
    let selections = vec![Some("a) X".to_string()), Some("a) X".to_string())];

    let result = grader::grade(&records, &selections);

    assert_eq!(result.total, 1);
    assert!(result.score <= result.total);
}

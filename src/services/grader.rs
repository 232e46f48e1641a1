//! Scores user selections against normalized question records.
//!
//! The answer key coming out of the model is ambiguous: it may name a
//! choice label ("a") or repeat the answer text ("Paris"). Resolution
//! tries labels before texts; that precedence is fixed.

use crate::models::domain::{GradingResult, QuestionGrade, QuestionRecord};

/// Resolves a record's answer key to the rendered form of the matching
/// choice. Labels are tried first (trimmed, case-insensitive), then raw
/// choice texts, first match wins. An answer key matching no choice
/// resolves to the empty string: the question is ungradable (any selection
/// scores incorrect) but still counts toward the total.
pub fn resolve_correct_text(record: &QuestionRecord) -> String {
    let key = record.correct.trim().to_lowercase();

    for choice in &record.choices {
        if !choice.label.is_empty() && choice.label.trim().to_lowercase() == key {
            return choice.rendered();
        }
    }

    for choice in &record.choices {
        if choice.text.trim().to_lowercase() == key {
            return choice.rendered();
        }
    }

    String::new()
}

/// Grades positional selections against `records`. `selections[i]` answers
/// `records[i]`; a missing or `None` entry is an unanswered question and
/// scores incorrect. A selection matches by exact string equality with the
/// canonical rendered form, after trimming both sides.
pub fn grade(records: &[QuestionRecord], selections: &[Option<String>]) -> GradingResult {
    let mut questions = Vec::with_capacity(records.len());
    let mut score = 0;

    for (idx, record) in records.iter().enumerate() {
        let selected_text = selections.get(idx).and_then(|s| s.clone());
        let correct_text = resolve_correct_text(record);

        let is_correct = match &selected_text {
            Some(selected) => {
                !correct_text.is_empty() && selected.trim() == correct_text.trim()
            }
            None => false,
        };
        if is_correct {
            score += 1;
        }

        questions.push(QuestionGrade {
            selected_text,
            correct_text,
            is_correct,
        });
    }

    GradingResult {
        questions,
        score,
        total: records.len(),
    }
}

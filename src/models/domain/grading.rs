use serde::{Deserialize, Serialize};

/// Grading outcome for one question. `selected_text` is `None` when the
/// quiz taker left the question unanswered; unanswered questions are
/// always scored incorrect, never skipped. `correct_text` is empty when
/// the record's answer key resolved to none of its choices (the question
/// is ungradable but still counted in the total).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionGrade {
    pub selected_text: Option<String>,
    pub correct_text: String,
    pub is_correct: bool,
}

/// Aggregate grading result. `total` equals the number of records graded
/// and `score <= total` always holds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradingResult {
    pub questions: Vec<QuestionGrade>,
    pub score: usize,
    pub total: usize,
}

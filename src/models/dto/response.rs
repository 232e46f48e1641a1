use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{GradingResult, QuestionGrade, QuestionRecord, QuizSession};

/// One question as presented to the quiz taker. The answer key is not
/// echoed here; correctness is only revealed by the grade endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuestionRecord> for QuestionView {
    fn from(record: &QuestionRecord) -> Self {
        QuestionView {
            question: record.question.clone(),
            options: record.rendered_choices(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub session_id: Uuid,
    pub questions: Vec<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl From<&QuizSession> for QuizResponse {
    fn from(session: &QuizSession) -> Self {
        QuizResponse {
            session_id: session.id,
            questions: session.records.iter().map(QuestionView::from).collect(),
            review: session.review.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GradedQuestionView {
    pub question: String,
    pub selected_text: Option<String>,
    pub correct_text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeResponse {
    pub questions: Vec<GradedQuestionView>,
    pub score: usize,
    pub total: usize,
}

impl GradeResponse {
    pub fn from_result(records: &[QuestionRecord], result: GradingResult) -> Self {
        let questions = records
            .iter()
            .zip(result.questions)
            .map(|(record, grade)| {
                let QuestionGrade {
                    selected_text,
                    correct_text,
                    is_correct,
                } = grade;
                GradedQuestionView {
                    question: record.question.clone(),
                    selected_text,
                    correct_text,
                    is_correct,
                }
            })
            .collect();

        GradeResponse {
            questions,
            score: result.score,
            total: result.total,
        }
    }
}

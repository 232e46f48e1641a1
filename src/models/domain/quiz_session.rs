use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::QuestionRecord;

/// Quiz state held for one quiz-taking interaction. A session's records
/// are derived once per generation request and replaced wholesale on
/// regeneration; they are never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub records: Vec<QuestionRecord>,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(records: Vec<QuestionRecord>, review: Option<String>) -> Self {
        QuizSession {
            id: Uuid::new_v4(),
            records,
            review,
            created_at: Utc::now(),
        }
    }

    /// A regenerated session keeps its id so the client's handle stays
    /// valid; the records are a full replacement.
    pub fn regenerated(&self, records: Vec<QuestionRecord>, review: Option<String>) -> Self {
        QuizSession {
            id: self.id,
            records,
            review,
            created_at: Utc::now(),
        }
    }
}

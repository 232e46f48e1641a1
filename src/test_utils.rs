use serde_json::json;

use crate::models::domain::{Choice, QuestionRecord};

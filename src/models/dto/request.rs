use serde::Deserialize;
use validator::Validate;

const DEFAULT_TONE: &str = "simple";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(range(min = 3, max = 50, message = "question count must be between 3 and 50"))]
    pub number: u16,

    #[validate(length(min = 1, max = 20))]
    pub subject: String,

    #[validate(length(min = 1, max = 20))]
    pub tone: String,
}

impl GenerateQuizRequest {
    pub fn new(number: u16, subject: impl Into<String>, tone: Option<String>) -> Self {
        let tone = tone
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TONE.to_string());

        GenerateQuizRequest {
            number,
            subject: subject.into(),
            tone,
        }
    }
}

/// Per-question selections, positional: `answers[i]` answers question `i`
/// of the stored session, each in the rendered `"label) text"` (or bare
/// text) form the choices were presented in. `null` marks an unanswered
/// question. Shorter arrays leave the remaining questions unanswered.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeQuizRequest {
    pub answers: Vec<Option<String>>,
}

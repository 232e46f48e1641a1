use serde::{Deserialize, Serialize};

/// A single answer choice, carrying the label it was keyed under in the
/// model output (or a synthetic 1-based index when the options arrived as a
/// plain sequence). The label may be empty for options of unknown shape.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub label: String,
    pub text: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Choice {
            label: label.into(),
            text: text.into(),
        }
    }

    /// The canonical form shown to the quiz taker and compared at grading
    /// time: `"a) Paris"` for a labelled choice, bare text otherwise.
    pub fn rendered(&self) -> String {
        if self.label.is_empty() {
            self.text.clone()
        } else {
            format!("{}) {}", self.label, self.text)
        }
    }
}

/// A normalized question. Invariants: `question` is non-empty after
/// trimming (entries failing this are dropped during normalization), and
/// `choices` preserves the ordering of the source document. `correct` is
/// the raw answer-key value; it is resolved against the choices only at
/// grading time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question: String,
    pub choices: Vec<Choice>,
    pub correct: String,
}

impl QuestionRecord {
    /// Choices in the form they are presented to the quiz taker.
    pub fn rendered_choices(&self) -> Vec<String> {
        self.choices.iter().map(Choice::rendered).collect()
    }
}

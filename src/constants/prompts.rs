//! Prompt templates for the two-stage quiz pipeline. Placeholders use
//! `{name}` and are filled by simple substitution in the model service.

pub const QUIZ_GENERATION_PROMPT: &str = "Text:
{text}

You are an expert MCQ maker. Given the above text, create a quiz of {number} multiple choice questions for {subject} students in {tone} tone.

## REQUIREMENTS

1. Questions must not repeat, and every question must be answerable from the text alone.
2. Each question has exactly one correct option.
3. Return {number} questions, no more and no fewer.

## OUTPUT FORMAT

Return a single JSON object shaped exactly like RESPONSE_JSON below, with one entry per question. No prose, no markdown, no extra keys.

### RESPONSE_JSON
{response_json}
";

pub const QUIZ_REVIEW_PROMPT: &str = "You are an expert English grammarian and writer. Given the following multiple choice quiz for {subject} students, evaluate its complexity and give a complete analysis of whether the students will be able to understand and answer the questions. Use at most 50 words for the complexity analysis. If the quiz is not at par with the cognitive and analytical abilities of the students, note which questions should be rephrased and how the tone should change to fit the student abilities.

Quiz_MCQs:
{quiz}

Review from an expert English writer of the above quiz:
";

/// Shape exemplar embedded into the generation prompt. This is the
/// external contract with the generation stage: ids map to payloads
/// carrying `mcq`, labelled `options`, and `correct`.
pub const RESPONSE_JSON: &str = r#"{
  "1": {
    "mcq": "multiple choice question",
    "options": {
      "a": "choice here",
      "b": "choice here",
      "c": "choice here",
      "d": "choice here"
    },
    "correct": "correct answer"
  },
  "2": {
    "mcq": "multiple choice question",
    "options": {
      "a": "choice here",
      "b": "choice here",
      "c": "choice here",
      "d": "choice here"
    },
    "correct": "correct answer"
  }
}"#;

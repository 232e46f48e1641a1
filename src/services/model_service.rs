//! The generation stage: a two-prompt chain over chat completions.
//!
//! Stage one asks for the quiz as JSON shaped like the RESPONSE_JSON
//! exemplar; stage two asks for a short complexity review of that quiz.
//! Neither output is trusted to be well-formed; the normalizer owns
//! coercion.

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::Config;
use crate::constants::prompts::{QUIZ_GENERATION_PROMPT, QUIZ_REVIEW_PROMPT, RESPONSE_JSON};
use crate::errors::AppResult;

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub text: String,
    pub number: u16,
    pub subject: String,
    pub tone: String,
}

/// Raw output of the generation stage. `quiz` is whatever the model
/// produced for stage one: expected to contain quiz JSON, guaranteed
/// nothing.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub quiz: Value,
    pub review: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationOutcome>;
}

pub struct OpenAiQuizGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiQuizGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());

        OpenAiQuizGenerator {
            client: Client::with_config(openai_config),
            model: config.model_name.clone(),
        }
    }

    async fn complete(&self, prompt: String) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}

#[async_trait]
impl QuizGenerator for OpenAiQuizGenerator {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationOutcome> {
        log::info!(
            "generating {} questions for subject '{}'",
            request.number,
            request.subject
        );

        let quiz = self.complete(generation_prompt(request)).await?;
        let review = self
            .complete(review_prompt(&request.subject, &quiz))
            .await?;

        Ok(GenerationOutcome {
            quiz: Value::String(quiz),
            review,
        })
    }
}

pub fn generation_prompt(request: &GenerationRequest) -> String {
    QUIZ_GENERATION_PROMPT
        .replace("{text}", &request.text)
        .replace("{number}", &request.number.to_string())
        .replace("{subject}", &request.subject)
        .replace("{tone}", &request.tone)
        .replace("{response_json}", RESPONSE_JSON)
}

pub fn review_prompt(subject: &str, quiz: &str) -> String {
    QUIZ_REVIEW_PROMPT
        .replace("{subject}", subject)
        .replace("{quiz}", quiz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> GenerationRequest {
        GenerationRequest {
            text: "The mitochondria is the powerhouse of the cell.".to_string(),
            number: 5,
            subject: "biology".to_string(),
            tone: "simple".to_string(),
        }
    }

    #[test]
    fn generation_prompt_substitutes_every_placeholder() {
        let prompt = generation_prompt(&sample_request());

        assert!(prompt.contains("The mitochondria is the powerhouse of the cell."));
        assert!(prompt.contains("quiz of 5 multiple choice questions"));
        assert!(prompt.contains("for biology students"));
        assert!(prompt.contains("in simple tone"));
        assert!(prompt.contains("\"mcq\""));
        assert!(!prompt.contains("{text}"));
        assert!(!prompt.contains("{response_json}"));
    }

    #[test]
    fn review_prompt_substitutes_subject_and_quiz() {
        let prompt = review_prompt("biology", "{\"1\": {\"mcq\": \"Q\"}}");

        assert!(prompt.contains("for biology students"));
        assert!(prompt.contains("{\"1\": {\"mcq\": \"Q\"}}"));
        assert!(!prompt.contains("{subject}"));
    }
}

use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{OpenAiQuizGenerator, QuizGenerator},
        session_store::SessionStore,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_generator: Arc<dyn QuizGenerator>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let quiz_generator: Arc<dyn QuizGenerator> = Arc::new(OpenAiQuizGenerator::new(&config));

        Self {
            quiz_generator,
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
        }
    }

    #[cfg(test)]
    pub fn with_generator(config: Config, quiz_generator: Arc<dyn QuizGenerator>) -> Self {
        Self {
            quiz_generator,
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
        }
    }
}

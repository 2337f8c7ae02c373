use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ExtractedDocument, Quiz},
    services::{
        context_service::assemble_context, model_service::ModelClient,
        prompt_service::build_quiz_prompt, response_repair_service::extract_json,
        schema_service::validate_reply,
    },
};

/// Inter-retry delay abstraction, so the retry loop is testable without real
/// time passing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Clone, Debug)]
pub struct GenerationSettings {
    pub max_attempts: u32,
    pub retry_backoff: Duration,
    pub max_context_chars: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_backoff: Duration::from_secs(2),
            max_context_chars: 25_000,
        }
    }
}

impl From<&Config> for GenerationSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            retry_backoff: Duration::from_secs(config.retry_backoff_secs),
            max_context_chars: config.max_context_chars,
        }
    }
}

/// Retry state. One `Attempting` cycle is a full invoke/repair/validate pass;
/// `Succeeded` and `Failed` are terminal.
enum GenerationState {
    Attempting(u32),
    Succeeded(Quiz),
    Failed(AppError),
}

/// Coordinates the generation pipeline: context assembly, prompt
/// construction, then sequential attempts against the model with a fixed
/// backoff between them. No failure kind is excluded from retry, and every
/// attempt issues a fresh model call.
pub struct QuizGenerationService {
    model_client: Arc<dyn ModelClient>,
    sleeper: Arc<dyn Sleeper>,
    settings: GenerationSettings,
}

impl QuizGenerationService {
    pub fn new(model_client: Arc<dyn ModelClient>, settings: GenerationSettings) -> Self {
        Self::with_sleeper(model_client, Arc::new(TokioSleeper), settings)
    }

    pub fn with_sleeper(
        model_client: Arc<dyn ModelClient>,
        sleeper: Arc<dyn Sleeper>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            model_client,
            sleeper,
            settings,
        }
    }

    pub async fn generate_quiz(&self, document: &ExtractedDocument) -> AppResult<Quiz> {
        let context = assemble_context(&document.segments, self.settings.max_context_chars);
        let prompt = build_quiz_prompt(&context);

        log::info!(
            "Generating quiz from {} segment(s), {} context chars",
            document.segment_count(),
            context.chars().count()
        );

        let mut state = GenerationState::Attempting(1);
        loop {
            state = match state {
                GenerationState::Attempting(attempt) => {
                    match self.run_attempt(&prompt).await {
                        Ok(quiz) => GenerationState::Succeeded(quiz),
                        Err(err) if attempt < self.settings.max_attempts => {
                            log::warn!(
                                "Quiz generation attempt {}/{} failed: {}",
                                attempt,
                                self.settings.max_attempts,
                                err
                            );
                            self.sleeper.sleep(self.settings.retry_backoff).await;
                            GenerationState::Attempting(attempt + 1)
                        }
                        Err(err) => GenerationState::Failed(AppError::GenerationFailed {
                            attempts: self.settings.max_attempts,
                            source: Box::new(err),
                        }),
                    }
                }
                GenerationState::Succeeded(quiz) => {
                    log::info!("Quiz generated with {} questions", quiz.question_count());
                    return Ok(quiz);
                }
                GenerationState::Failed(err) => {
                    log::warn!("{}", err);
                    return Err(err);
                }
            };
        }
    }

    async fn run_attempt(&self, prompt: &str) -> AppResult<Quiz> {
        let reply = self.model_client.invoke(prompt).await?;
        let value = extract_json(&reply)?;
        validate_reply(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockModelClient;
    use crate::test_utils::fixtures;
    use mockall::Sequence;

    fn settings() -> GenerationSettings {
        GenerationSettings::default()
    }

    fn quiet_sleeper() -> Arc<MockSleeper> {
        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().returning(|_| ());
        Arc::new(sleeper)
    }

    fn document() -> ExtractedDocument {
        ExtractedDocument::new(vec!["Operating systems schedule tasks.".to_string()])
    }

    #[tokio::test]
    async fn succeeds_on_first_attempt_without_sleeping() {
        let mut model = MockModelClient::new();
        model
            .expect_invoke()
            .times(1)
            .returning(|_| Ok(fixtures::valid_model_reply()));

        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().never();

        let service = QuizGenerationService::with_sleeper(
            Arc::new(model),
            Arc::new(sleeper),
            settings(),
        );

        let quiz = service.generate_quiz(&document()).await.unwrap();

        assert_eq!(quiz, fixtures::test_quiz());
    }

    #[tokio::test]
    async fn succeeds_on_third_attempt_after_two_failures() {
        let mut seq = Sequence::new();
        let mut model = MockModelClient::new();
        model
            .expect_invoke()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::ModelUnavailable("connection refused".into())));
        model
            .expect_invoke()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(fixtures::noisy_model_reply()));

        let mut sleeper = MockSleeper::new();
        sleeper
            .expect_sleep()
            .times(2)
            .withf(|duration| *duration == Duration::from_secs(2))
            .returning(|_| ());

        let service = QuizGenerationService::with_sleeper(
            Arc::new(model),
            Arc::new(sleeper),
            settings(),
        );

        let quiz = service.generate_quiz(&document()).await.unwrap();

        assert_eq!(quiz.question_count(), 5);
    }

    #[tokio::test]
    async fn fails_terminally_after_exactly_max_attempts() {
        let mut model = MockModelClient::new();
        model
            .expect_invoke()
            .times(3)
            .returning(|_| Ok("no json here at all".to_string()));

        let service =
            QuizGenerationService::with_sleeper(Arc::new(model), quiet_sleeper(), settings());

        let err = service.generate_quiz(&document()).await.unwrap_err();

        let AppError::GenerationFailed { attempts, source } = err else {
            panic!("expected GenerationFailed");
        };
        assert_eq!(attempts, 3);
        assert!(matches!(*source, AppError::NoJsonFound));
    }

    #[tokio::test]
    async fn schema_violations_are_retried_like_any_other_failure() {
        let mut seq = Sequence::new();
        let mut model = MockModelClient::new();
        model
            .expect_invoke()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("{\"items\": []}".to_string()));
        model
            .expect_invoke()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(fixtures::valid_model_reply()));

        let service =
            QuizGenerationService::with_sleeper(Arc::new(model), quiet_sleeper(), settings());

        let quiz = service.generate_quiz(&document()).await.unwrap();

        assert_eq!(quiz.question_count(), 5);
    }

    #[tokio::test]
    async fn prompt_carries_the_document_context() {
        let mut model = MockModelClient::new();
        model
            .expect_invoke()
            .times(1)
            .withf(|prompt| prompt.contains("Operating systems schedule tasks."))
            .returning(|_| Ok(fixtures::valid_model_reply()));

        let service =
            QuizGenerationService::with_sleeper(Arc::new(model), quiet_sleeper(), settings());

        service.generate_quiz(&document()).await.unwrap();
    }

    #[tokio::test]
    async fn empty_document_is_tolerated_by_the_pipeline() {
        let mut model = MockModelClient::new();
        model
            .expect_invoke()
            .times(1)
            .withf(|prompt| prompt.contains("Content to base questions on:"))
            .returning(|_| Ok(fixtures::valid_model_reply()));

        let service =
            QuizGenerationService::with_sleeper(Arc::new(model), quiet_sleeper(), settings());

        let document = ExtractedDocument::new(vec![]);
        let quiz = service.generate_quiz(&document).await.unwrap();

        assert_eq!(quiz.question_count(), 5);
    }

    #[tokio::test]
    async fn single_attempt_settings_do_not_sleep() {
        let mut model = MockModelClient::new();
        model
            .expect_invoke()
            .times(1)
            .returning(|_| Err(AppError::ModelError("quota exceeded".into())));

        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().never();

        let service = QuizGenerationService::with_sleeper(
            Arc::new(model),
            Arc::new(sleeper),
            GenerationSettings {
                max_attempts: 1,
                ..GenerationSettings::default()
            },
        );

        let err = service.generate_quiz(&document()).await.unwrap_err();

        assert!(matches!(err, AppError::GenerationFailed { attempts: 1, .. }));
    }
}

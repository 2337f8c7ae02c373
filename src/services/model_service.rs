use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

const GENERATION_TEMPERATURE: f32 = 0.3;
const MAX_COMPLETION_TOKENS: u32 = 4096;

/// The external generative-model boundary: one call, rendered prompt in, raw
/// reply text out. Everything downstream treats the reply as untrusted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn invoke(&self, prompt: &str) -> AppResult<String>;
}

/// Production model client speaking to any OpenAI-compatible chat-completion
/// endpoint. The default configuration targets Gemini's compatibility API.
pub struct OpenAiModelClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl OpenAiModelClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.model_api_key.expose_secret())
            .with_api_base(&config.model_api_base);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.model_name.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn invoke(&self, prompt: &str) -> AppResult<String> {
        log::debug!(
            "Sending {} char prompt to model {}",
            prompt.len(),
            self.model_name
        );

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build chat message: {}", e)))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_message)])
            .temperature(GENERATION_TEMPERATURE)
            .max_tokens(MAX_COMPLETION_TOKENS)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build chat request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::ModelError("Model returned an empty reply".to_string()))?;

        log::debug!("Received {} char reply from model", content.len());

        Ok(content)
    }
}

fn map_openai_error(err: OpenAIError) -> AppError {
    match err {
        // Transport-level failures: the service could not be reached at all.
        OpenAIError::Reqwest(_) => AppError::ModelUnavailable(err.to_string()),
        // Auth, quota, rate limits and malformed-request rejections.
        _ => AppError::ModelError(err.to_string()),
    }
}

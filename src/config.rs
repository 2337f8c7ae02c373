use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub model_api_base: String,
    pub model_api_key: SecretString,
    pub model_name: String,
    pub max_attempts: u32,
    pub retry_backoff_secs: u64,
    pub max_context_chars: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            model_api_base: env::var("MODEL_API_BASE").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
            }),
            model_api_key: SecretString::from(
                env::var("MODEL_API_KEY").unwrap_or_else(|_| "dev_model_api_key".to_string()),
            ),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            max_attempts: env::var("MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_backoff_secs: env::var("RETRY_BACKOFF_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            max_context_chars: env::var("MAX_CONTEXT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(25_000),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.model_api_key.expose_secret();

        if api_key == "dev_model_api_key" || api_key.is_empty() {
            panic!(
                "FATAL: MODEL_API_KEY is not set! Set MODEL_API_KEY environment variable to a valid API key."
            );
        }

        if self.max_attempts == 0 {
            panic!("FATAL: MAX_ATTEMPTS must be at least 1.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            model_api_base: "http://localhost:1234/v1".to_string(),
            model_api_key: SecretString::from("test_api_key".to_string()),
            model_name: "test-model".to_string(),
            max_attempts: 3,
            retry_backoff_secs: 2,
            max_context_chars: 25_000,
        }
    }
}

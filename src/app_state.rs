use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        DocumentLoader, GenerationSettings, OpenAiModelClient, PdfDocumentLoader,
        QuizGenerationService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_generation_service: Arc<QuizGenerationService>,
    pub document_loader: Arc<dyn DocumentLoader>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model_client = Arc::new(OpenAiModelClient::new(&config));
        let settings = GenerationSettings::from(&config);
        let quiz_generation_service = Arc::new(QuizGenerationService::new(model_client, settings));

        Self {
            quiz_generation_service,
            document_loader: Arc::new(PdfDocumentLoader),
            config: Arc::new(config),
        }
    }
}

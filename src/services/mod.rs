pub mod context_service;
pub mod document_service;
pub mod model_service;
pub mod prompt_service;
pub mod quiz_generation_service;
pub mod response_repair_service;
pub mod schema_service;

pub use document_service::{DocumentLoader, PdfDocumentLoader};
pub use model_service::{ModelClient, OpenAiModelClient};
pub use quiz_generation_service::{GenerationSettings, QuizGenerationService};

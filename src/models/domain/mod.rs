pub mod document;
pub mod quiz;
pub mod quiz_question;

pub use document::ExtractedDocument;
pub use quiz::Quiz;
pub use quiz_question::{AnswerKey, QuizQuestion};

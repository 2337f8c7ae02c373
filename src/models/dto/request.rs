use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/quizzes/generate-from-text`: pre-extracted text
/// segments in reading order, for callers that run their own document
/// extraction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizFromTextRequestDto {
    #[validate(length(min = 1, message = "segments must not be empty"))]
    pub segments: Vec<String>,
}

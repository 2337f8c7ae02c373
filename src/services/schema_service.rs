use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz::EXPECTED_QUESTION_COUNT;
use crate::models::domain::Quiz;

/// Checks a parsed model reply against the quiz schema and produces the typed
/// quiz. The gate is layered: the value must be an object carrying a
/// `questions` key, it must deserialize into the typed model (all fields
/// present, exactly the A-D option labels, a known answer key), every
/// question must carry all four options, and the quiz must hold exactly
/// five questions.
pub fn validate_reply(value: Value) -> AppResult<Quiz> {
    let Some(object) = value.as_object() else {
        return Err(AppError::SchemaViolation(
            "Reply is not a JSON object".to_string(),
        ));
    };
    if !object.contains_key("questions") {
        return Err(AppError::SchemaViolation(
            "Reply is missing the 'questions' key".to_string(),
        ));
    }

    let quiz: Quiz = serde_json::from_value(value)
        .map_err(|e| AppError::SchemaViolation(format!("Malformed quiz structure: {}", e)))?;

    for (index, question) in quiz.questions.iter().enumerate() {
        if !question.has_complete_options() {
            return Err(AppError::SchemaViolation(format!(
                "Question {} does not carry all four A-D options",
                index + 1
            )));
        }
    }

    if quiz.question_count() != EXPECTED_QUESTION_COUNT {
        return Err(AppError::SchemaViolation(format!(
            "Expected {} questions, got {}",
            EXPECTED_QUESTION_COUNT,
            quiz.question_count()
        )));
    }

    Ok(quiz)
}

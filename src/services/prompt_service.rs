use crate::constants::quiz_prompt::{CONTEXT_MARKER, QUIZ_GENERATION_PROMPT};

/// Renders the fixed quiz-generation instruction template with the document
/// context injected. Pure function of its input.
pub fn build_quiz_prompt(context: &str) -> String {
    QUIZ_GENERATION_PROMPT.replace(CONTEXT_MARKER, context)
}

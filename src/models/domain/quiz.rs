use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

/// Number of questions every generated quiz must contain.
pub const EXPECTED_QUESTION_COUNT: usize = 5;

/// The validated output of one generation request. Immutable once produced;
/// serializes to a JSON document with a single top-level `questions` array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

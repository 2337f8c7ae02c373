use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Option label for a multiple-choice question. Doubles as the answer key, so
/// a `correct_answer` can never name a label outside A-D.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKey::A => write!(f, "A"),
            AnswerKey::B => write!(f, "B"),
            AnswerKey::C => write!(f, "C"),
            AnswerKey::D => write!(f, "D"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct QuizQuestion {
    pub question: String,
    pub options: BTreeMap<AnswerKey, String>, // keyed A-D; BTreeMap keeps label order
    pub correct_answer: AnswerKey,
    pub explanation: String,
}

impl QuizQuestion {
    /// True when all four A-D labels are present and the answer key points at
    /// one of them.
    pub fn has_complete_options(&self) -> bool {
        self.options.len() == AnswerKey::ALL.len()
            && self.options.contains_key(&self.correct_answer)
    }
}

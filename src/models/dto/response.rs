use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::domain::{AnswerKey, Quiz, QuizQuestion};

/// Boundary serialization of a generated quiz: a single top-level `questions`
/// array, mirroring the domain shape field-for-field.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponseDto {
    pub questions: Vec<QuizQuestionResponseDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionResponseDto {
    pub question: String,
    pub options: BTreeMap<AnswerKey, String>,
    pub correct_answer: AnswerKey,
    pub explanation: String,
}

impl From<QuizQuestion> for QuizQuestionResponseDto {
    fn from(question: QuizQuestion) -> Self {
        QuizQuestionResponseDto {
            question: question.question,
            options: question.options,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
        }
    }
}

impl From<Quiz> for QuizResponseDto {
    fn from(quiz: Quiz) -> Self {
        QuizResponseDto {
            questions: quiz
                .questions
                .into_iter()
                .map(QuizQuestionResponseDto::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_response_dto_matches_domain_serialization() {
        let quiz = fixtures::test_quiz();
        let domain_json = serde_json::to_value(&quiz).unwrap();

        let dto = QuizResponseDto::from(quiz);
        let dto_json = serde_json::to_value(&dto).unwrap();

        assert_eq!(domain_json, dto_json);
    }

    #[test]
    fn test_response_dto_preserves_question_order() {
        let quiz = fixtures::test_quiz();
        let first_question = quiz.questions[0].question.clone();

        let dto = QuizResponseDto::from(quiz);

        assert_eq!(dto.questions[0].question, first_question);
    }
}

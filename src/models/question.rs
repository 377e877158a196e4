use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::services::question_validator::{self, ValidationError};

/// Number of questions in every assessment.
pub const QUIZ_LENGTH: usize = 5;
/// Number of answer options on every question.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question. Deserialisation runs the schema
/// validator, so a value of this type always satisfies the question contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "JsonValue")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TryFrom<JsonValue> for QuizQuestion {
    type Error = ValidationError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        question_validator::validate(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a quiz needs exactly {expected} questions, got {got}")]
pub struct QuizSetLengthError {
    pub expected: usize,
    pub got: usize,
}

/// The ordered questions of one assessment. Always exactly `QUIZ_LENGTH` long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<QuizQuestion>")]
pub struct QuizSet(Vec<QuizQuestion>);

impl QuizSet {
    pub fn from_array(questions: [QuizQuestion; QUIZ_LENGTH]) -> Self {
        Self(questions.into())
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizQuestion> {
        self.0.iter()
    }

    pub fn into_questions(self) -> Vec<QuizQuestion> {
        self.0
    }
}

impl TryFrom<Vec<QuizQuestion>> for QuizSet {
    type Error = QuizSetLengthError;

    fn try_from(questions: Vec<QuizQuestion>) -> Result<Self, Self::Error> {
        if questions.len() != QUIZ_LENGTH {
            return Err(QuizSetLengthError {
                expected: QUIZ_LENGTH,
                got: questions.len(),
            });
        }
        Ok(Self(questions))
    }
}

impl<'a> IntoIterator for &'a QuizSet {
    type Item = &'a QuizQuestion;
    type IntoIter = std::slice::Iter<'a, QuizQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(n: usize) -> Vec<QuizQuestion> {
        (0..n)
            .map(|i| QuizQuestion {
                question: format!("Question {}", i),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer: (i % OPTION_COUNT) as i32,
                explanation: None,
            })
            .collect()
    }

    #[test]
    fn quiz_set_requires_exactly_five() {
        assert!(QuizSet::try_from(sample(5)).is_ok());
        let err = QuizSet::try_from(sample(4)).unwrap_err();
        assert_eq!(err.got, 4);
        assert!(QuizSet::try_from(sample(6)).is_err());
    }

    #[test]
    fn question_serialises_with_camel_case_keys() {
        let questions = sample(1);
        let value = serde_json::to_value(&questions[0]).unwrap();
        assert_eq!(value["correctAnswer"], json!(0));
        assert!(value.get("explanation").is_none());
    }

    #[test]
    fn deserialising_an_invalid_question_fails() {
        let raw = json!({
            "question": "Pick one",
            "options": ["a", "b", "c"],
            "correctAnswer": 0
        });
        assert!(serde_json::from_value::<QuizQuestion>(raw).is_err());
    }
}

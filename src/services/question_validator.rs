use serde_json::Value as JsonValue;

use crate::models::question::{QuizQuestion, OPTION_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Checks a decoded candidate against the question contract, stopping at the
/// first violation.
pub fn validate(candidate: &JsonValue) -> Result<QuizQuestion, ValidationError> {
    let obj = candidate
        .as_object()
        .ok_or_else(|| ValidationError::new("candidate", "not an object"))?;

    let question = obj
        .get("question")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ValidationError::new("question", "missing or not text"))?;
    if question.trim().is_empty() {
        return Err(ValidationError::new("question", "must not be empty"));
    }

    let raw_options = obj
        .get("options")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ValidationError::new("options", "missing or not an array"))?;
    if raw_options.len() != OPTION_COUNT {
        return Err(ValidationError::new(
            "options",
            format!("expected {} entries, got {}", OPTION_COUNT, raw_options.len()),
        ));
    }
    let mut options = Vec::with_capacity(OPTION_COUNT);
    for (idx, opt) in raw_options.iter().enumerate() {
        match opt.as_str() {
            Some(s) if !s.trim().is_empty() => options.push(s.to_string()),
            Some(_) => {
                return Err(ValidationError::new(
                    "options",
                    format!("entry {} is empty", idx),
                ))
            }
            None => {
                return Err(ValidationError::new(
                    "options",
                    format!("entry {} is not text", idx),
                ))
            }
        }
    }
    for (i, a) in options.iter().enumerate() {
        if options[i + 1..].iter().any(|b| b.trim() == a.trim()) {
            return Err(ValidationError::new(
                "options",
                format!("entry {} is duplicated", i),
            ));
        }
    }

    let correct_answer = obj
        .get("correctAnswer")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| ValidationError::new("correctAnswer", "missing or not an integer"))?;
    if !(0..OPTION_COUNT as i64).contains(&correct_answer) {
        return Err(ValidationError::new(
            "correctAnswer",
            format!("{} is outside 0..={}", correct_answer, OPTION_COUNT - 1),
        ));
    }

    let explanation = match obj.get("explanation") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(_) => return Err(ValidationError::new("explanation", "not text")),
    };

    Ok(QuizQuestion {
        question: question.to_string(),
        options,
        correct_answer: correct_answer as i32,
        explanation,
    })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u8,
    pub passed: bool,
    pub certificate_id: String,
}

/// Per-question outcome shown after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionReview {
    pub question: String,
    pub selected: Option<usize>,
    pub correct_answer: i32,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// Row handed to the result store after scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResultRecord {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub skill: String,
    pub score: i32,
    pub total_questions: i32,
    pub percentage: i32,
    pub passed: bool,
    pub certificate_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl QuizResultRecord {
    pub fn new(user_id: Option<String>, skill: &str, user_name: &str, result: &QuizResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            skill: skill.to_string(),
            score: result.score as i32,
            total_questions: result.total_questions as i32,
            percentage: i32::from(result.percentage),
            passed: result.passed,
            certificate_id: result.certificate_id.clone(),
            user_name: user_name.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Input for the external certificate renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificatePayload {
    pub user_name: String,
    pub skill: String,
    pub percentage: u8,
    pub date: String,
    pub certificate_id: String,
}

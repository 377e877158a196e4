use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::{QuizQuestion, QuizSet};
use crate::models::quiz_result::{CertificatePayload, QuestionReview, QuizResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
    pub default_skill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub skill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuizResponse {
    pub skill: String,
    pub total_questions: usize,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAttemptRequest {
    #[validate(length(min = 1, max = 100))]
    pub skill: String,
    #[validate(length(min = 1, max = 200))]
    pub user_name: String,
    #[validate(length(max = 200))]
    pub user_id: Option<String>,
    pub questions: QuizSet,
    pub selected_answers: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAttemptResponse {
    pub result: QuizResult,
    pub review: Vec<QuestionReview>,
    pub certificate: Option<CertificatePayload>,
}

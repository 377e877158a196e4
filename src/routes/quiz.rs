use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::quiz_dto::{
    GenerateQuizRequest, GenerateQuizResponse, SkillsResponse, SubmitAttemptRequest,
    SubmitAttemptResponse,
};
use crate::error::Error;
use crate::models::attempt::Attempt;
use crate::models::quiz_result::QuizResultRecord;
use crate::services::fallback_bank;
use crate::utils::time;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_skills() -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: fallback_bank::supported_skills()
            .into_iter()
            .map(str::to_string)
            .collect(),
        default_skill: fallback_bank::DEFAULT_SKILL.to_string(),
    })
}

#[axum::debug_handler]
pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(req): Json<GenerateQuizRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let skill = req.skill.trim().to_string();
    if skill.is_empty() {
        return Err(Error::BadRequest("skill must not be blank".to_string()));
    }
    tracing::info!("Generating quiz for skill: {}", skill);

    let quiz = state.quiz_service.generate(&skill).await;
    let response = GenerateQuizResponse {
        skill,
        total_questions: quiz.len(),
        questions: quiz.into_questions(),
    };
    Ok(Json(response).into_response())
}

#[axum::debug_handler]
pub async fn submit_attempt(
    State(state): State<AppState>,
    Json(req): Json<SubmitAttemptRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let user_id = req.user_id;
    let attempt = Attempt {
        skill: req.skill.trim().to_string(),
        questions: req.questions,
        selected_answers: req.selected_answers,
        user_name: req.user_name.trim().to_string(),
    };

    let result = state.grading_service.score(&attempt)?;
    tracing::info!(
        skill = %attempt.skill,
        score = result.score,
        percentage = result.percentage,
        passed = result.passed,
        "Attempt submitted"
    );

    state.result_service.record_in_background(QuizResultRecord::new(
        user_id,
        &attempt.skill,
        &attempt.user_name,
        &result,
    ));

    let review = state.grading_service.review(&attempt);
    let certificate = state
        .grading_service
        .certificate_payload(&attempt, &result, time::now());
    Ok(Json(SubmitAttemptResponse {
        result,
        review,
        certificate,
    })
    .into_response())
}

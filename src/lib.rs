pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::QuizSettings;
use crate::services::{
    grading_service::GradingService, model_client::ModelClient, quiz_service::QuizService,
    result_service::{ResultService, ResultStore},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: QuizService,
    pub grading_service: GradingService,
    pub result_service: ResultService,
}

impl AppState {
    pub fn new(
        model_client: Arc<dyn ModelClient>,
        result_store: Arc<dyn ResultStore>,
        settings: QuizSettings,
    ) -> Self {
        Self {
            quiz_service: QuizService::new(model_client),
            grading_service: GradingService::new(settings),
            result_service: ResultService::new(result_store),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let quiz_api = Router::new()
        .route("/api/skills", get(routes::quiz::list_skills))
        .route("/api/quiz/generate", post(routes::quiz::generate_quiz))
        .route("/api/quiz/submit", post(routes::quiz::submit_attempt));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(quiz_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

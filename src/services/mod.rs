pub mod extractor;
pub mod fallback_bank;
pub mod grading_service;
pub mod model_client;
pub mod question_validator;
pub mod quiz_service;
pub mod result_service;

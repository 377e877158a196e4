use std::sync::Arc;

use crate::error::GenerationError;
use crate::models::question::{QuizQuestion, QuizSet, QUIZ_LENGTH};
use crate::services::extractor::extract;
use crate::services::fallback_bank;
use crate::services::model_client::ModelClient;
use crate::services::question_validator::validate;

#[derive(Clone)]
pub struct QuizService {
    client: Arc<dyn ModelClient>,
}

impl QuizService {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Builds the instruction sent to the model for `skill`.
    pub fn build_prompt(skill: &str) -> String {
        format!(
            r#"Generate exactly {count} multiple choice questions about {skill} for a skill assessment quiz.
The questions should be intermediate level and test practical, real-world knowledge of {skill}.

Respond with a JSON array of {count} objects, each with exactly these fields:
- "question": the question text
- "options": an array of 4 distinct answer options
- "correctAnswer": the index (0-3) of the correct option
- "explanation": a brief explanation of why the answer is correct

Example element:
{{"question": "...", "options": ["...", "...", "...", "..."], "correctAnswer": 2, "explanation": "..."}}

Make sure the JSON is valid. Vary the position of the correct answer across questions."#,
            count = QUIZ_LENGTH,
            skill = skill,
        )
    }

    /// Always yields a usable quiz: the model's set when every question checks
    /// out, otherwise the static set for `skill`.
    pub async fn generate(&self, skill: &str) -> QuizSet {
        match self.try_generate(skill).await {
            Ok(set) => {
                tracing::info!(skill, "Using model-generated quiz");
                set
            }
            Err(e) => {
                tracing::warn!(skill, error = %e, "Model quiz rejected, serving fallback set");
                fallback_bank::lookup(skill)
            }
        }
    }

    pub(crate) async fn try_generate(&self, skill: &str) -> Result<QuizSet, GenerationError> {
        let prompt = Self::build_prompt(skill);
        tracing::debug!(skill, prompt_len = prompt.len(), "Requesting quiz from model");

        let raw = self.client.invoke(&prompt).await?;
        let candidates = extract(&raw)?;

        // One bad question discards the whole set; a quiz never mixes sources.
        let mut questions: Vec<QuizQuestion> = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            let question =
                validate(candidate).map_err(|source| GenerationError::Validation { index, source })?;
            questions.push(question);
        }

        if questions.len() < QUIZ_LENGTH {
            return Err(GenerationError::TooFewQuestions {
                expected: QUIZ_LENGTH,
                got: questions.len(),
            });
        }
        if questions.len() > QUIZ_LENGTH {
            tracing::debug!(skill, got = questions.len(), "Truncating surplus questions");
            questions.truncate(QUIZ_LENGTH);
        }

        QuizSet::try_from(questions).map_err(|e| GenerationError::TooFewQuestions {
            expected: e.expected,
            got: e.got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::extractor::ExtractionError;
    use crate::services::model_client::{MockModelClient, ModelError};
    use serde_json::{json, Value as JsonValue};

    fn question_json(i: usize) -> JsonValue {
        json!({
            "question": format!("Generated question {}", i),
            "options": ["alpha", "beta", "gamma", "delta"],
            "correctAnswer": i % 4,
            "explanation": "generated"
        })
    }

    fn array_of(n: usize) -> Vec<JsonValue> {
        (0..n).map(question_json).collect()
    }

    fn service_returning(raw: String) -> QuizService {
        let mut mock = MockModelClient::new();
        mock.expect_invoke()
            .times(1)
            .returning(move |_| Ok(raw.clone()));
        QuizService::new(Arc::new(mock))
    }

    fn assert_is_fallback(set: &QuizSet, skill: &str) {
        assert_eq!(set, &fallback_bank::lookup(skill));
    }

    #[tokio::test]
    async fn model_failure_serves_fallback_set() {
        let mut mock = MockModelClient::new();
        mock.expect_invoke()
            .times(1)
            .returning(|_| Err(ModelError::EmptyResponse));
        let svc = QuizService::new(Arc::new(mock));

        let set = svc.generate("JavaScript").await;
        assert_is_fallback(&set, "JavaScript");

        let mut mock = MockModelClient::new();
        mock.expect_invoke().returning(|_| {
            Err(ModelError::Provider {
                status: 429,
                body: "quota".into(),
            })
        });
        let svc = QuizService::new(Arc::new(mock));
        assert!(matches!(
            svc.try_generate("JavaScript").await,
            Err(GenerationError::ModelUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn array_wrapped_in_prose_is_accepted() {
        let body = serde_json::to_string(&array_of(5)).unwrap();
        let raw = format!("Sure! Here you go: {} Hope that helps!", body);
        let set = service_returning(raw).generate("Rust").await;

        assert_eq!(set.len(), 5);
        for (i, q) in set.iter().enumerate() {
            assert_eq!(q.question, format!("Generated question {}", i));
            assert_eq!(q.correct_answer, (i % 4) as i32);
        }
    }

    #[tokio::test]
    async fn one_out_of_range_answer_rejects_whole_set() {
        let mut items = array_of(5);
        items[2]["correctAnswer"] = json!(4);
        let raw = serde_json::to_string(&items).unwrap();
        let svc = service_returning(raw.clone());

        let set = svc.generate("Python").await;
        assert_is_fallback(&set, "Python");

        let svc = service_returning(raw);
        match svc.try_generate("Python").await {
            Err(GenerationError::Validation { index, source }) => {
                assert_eq!(index, 2);
                assert_eq!(source.field, "correctAnswer");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_field_rejects_whole_set() {
        let mut items = array_of(5);
        items[4].as_object_mut().unwrap().remove("options");
        let raw = serde_json::to_string(&items).unwrap();

        let set = service_returning(raw).generate("React").await;
        assert_is_fallback(&set, "React");
    }

    #[tokio::test]
    async fn prose_without_array_falls_back() {
        let svc = service_returning("I'm sorry, I can't generate that right now.".into());
        assert!(matches!(
            svc.try_generate("CSS").await,
            Err(GenerationError::Extraction(_))
        ));

        let svc = service_returning("still no array".into());
        assert_is_fallback(&svc.generate("CSS").await, "CSS");
    }

    #[tokio::test]
    async fn array_of_scalars_is_an_extraction_failure() {
        let svc = service_returning(r#"here: [1, "two", null]"#.into());
        assert!(matches!(
            svc.try_generate("PHP").await,
            Err(GenerationError::Extraction(ExtractionError::NotAnObject { index: 0 }))
        ));
    }

    #[tokio::test]
    async fn too_few_questions_falls_back() {
        let raw = serde_json::to_string(&array_of(4)).unwrap();
        let svc = service_returning(raw);
        assert!(matches!(
            svc.try_generate("HTML").await,
            Err(GenerationError::TooFewQuestions { expected: 5, got: 4 })
        ));
    }

    #[tokio::test]
    async fn surplus_questions_are_truncated() {
        let raw = serde_json::to_string(&array_of(7)).unwrap();
        let set = service_returning(raw).generate("Go").await;
        assert_eq!(set.len(), 5);
        assert_eq!(set.questions()[4].question, "Generated question 4");
    }

    #[tokio::test]
    async fn unknown_skill_with_failing_model_serves_default_set() {
        let mut mock = MockModelClient::new();
        mock.expect_invoke()
            .returning(|_| Err(ModelError::EmptyResponse));
        let svc = QuizService::new(Arc::new(mock));
        assert_is_fallback(&svc.generate("Haskell").await, fallback_bank::DEFAULT_SKILL);
    }

    #[tokio::test]
    async fn prompt_is_sent_verbatim() {
        let mut mock = MockModelClient::new();
        let expected = QuizService::build_prompt("Vue.js");
        mock.expect_invoke()
            .withf(move |prompt| prompt == expected)
            .times(1)
            .returning(|_| Err(ModelError::EmptyResponse));
        let svc = QuizService::new(Arc::new(mock));
        svc.generate("Vue.js").await;
    }

    #[test]
    fn prompt_is_a_pure_function_of_skill() {
        let a = QuizService::build_prompt("Angular");
        assert_eq!(a, QuizService::build_prompt("Angular"));
        assert_ne!(a, QuizService::build_prompt("PHP"));
        assert!(a.contains("Angular"));
        assert!(a.contains("exactly 5"));
        assert!(a.contains("\"correctAnswer\""));
    }
}

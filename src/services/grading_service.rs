use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::QuizSettings;
use crate::error::{Error, Result};
use crate::models::attempt::Attempt;
use crate::models::quiz_result::{CertificatePayload, QuestionReview, QuizResult};
use crate::utils::{certificate, time};

#[derive(Clone, Debug)]
pub struct GradingService {
    settings: QuizSettings,
}

impl GradingService {
    pub fn new(settings: QuizSettings) -> Self {
        Self { settings }
    }

    /// Scores `attempt` against the wall clock and the thread RNG.
    pub fn score(&self, attempt: &Attempt) -> Result<QuizResult> {
        self.score_at(attempt, time::now(), &mut rand::thread_rng())
    }

    pub fn score_at(
        &self,
        attempt: &Attempt,
        at: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Result<QuizResult> {
        let total = attempt.questions.len();
        if attempt.selected_answers.len() != total {
            return Err(Error::NoActiveAttempt(format!(
                "attempt has {} answers for {} questions",
                attempt.selected_answers.len(),
                total
            )));
        }

        let score = self.review(attempt).iter().filter(|r| r.is_correct).count() as u32;

        let percentage = percentage(score, total as u32);
        let passed = percentage >= self.settings.pass_threshold;

        tracing::debug!(
            skill = %attempt.skill,
            score,
            total,
            percentage,
            passed,
            "Attempt scored"
        );

        Ok(QuizResult {
            score,
            total_questions: total as u32,
            percentage,
            passed,
            certificate_id: certificate::certificate_id(&attempt.skill, at, rng),
        })
    }

    /// One entry per question, in quiz order. Skipped or out-of-range
    /// selections come back as `None` and are never correct.
    pub fn review(&self, attempt: &Attempt) -> Vec<QuestionReview> {
        attempt
            .questions
            .iter()
            .enumerate()
            .map(|(idx, q)| {
                let selected = attempt.selection(idx);
                QuestionReview {
                    question: q.question.clone(),
                    selected,
                    correct_answer: q.correct_answer,
                    is_correct: selected.is_some_and(|s| s as i32 == q.correct_answer),
                    explanation: q.explanation.clone(),
                }
            })
            .collect()
    }

    /// Renderer input for a passing result; `None` when the attempt failed.
    pub fn certificate_payload(
        &self,
        attempt: &Attempt,
        result: &QuizResult,
        issued_at: DateTime<Utc>,
    ) -> Option<CertificatePayload> {
        if !result.passed {
            return None;
        }
        Some(CertificatePayload {
            user_name: attempt.user_name.clone(),
            skill: attempt.skill.clone(),
            percentage: result.percentage,
            date: time::certificate_date(issued_at),
            certificate_id: result.certificate_id.clone(),
        })
    }
}

/// `100 * score / total`, rounded half up.
fn percentage(score: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (200 * score + total) / (2 * total);
    pct.min(100) as u8
}

use serde::{Deserialize, Serialize};

use crate::models::question::{QuizSet, OPTION_COUNT};

/// Selection value for a question the user skipped.
pub const UNANSWERED: i32 = -1;

/// One user's finished run through a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub skill: String,
    pub questions: QuizSet,
    pub selected_answers: Vec<i32>,
    pub user_name: String,
}

impl Attempt {
    /// Selection at `index`, or `None` when skipped or out of range.
    pub fn selection(&self, index: usize) -> Option<usize> {
        self.selected_answers
            .get(index)
            .copied()
            .filter(|&s| s >= 0 && (s as usize) < OPTION_COUNT)
            .map(|s| s as usize)
    }
}

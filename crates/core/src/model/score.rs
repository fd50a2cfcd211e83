use serde::{Deserialize, Serialize};

use crate::model::answer::AnswerSheet;
use crate::model::question::Question;

/// Outcome of a single question after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
    Unattempted,
}

impl Verdict {
    #[must_use]
    pub fn classify(question: &Question, selected: Option<&str>) -> Self {
        match selected {
            None => Self::Unattempted,
            Some(option) if question.is_correct(option) => Self::Correct,
            Some(_) => Self::Incorrect,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Correct => "Correct",
            Self::Incorrect => "Incorrect",
            Self::Unattempted => "Unattempted",
        }
    }
}

/// Aggregate result of a submitted attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub incorrect: u32,
    pub unattempted: u32,
}

impl Score {
    /// Classify every question against its recorded answer.
    ///
    /// Questions beyond the end of `answers` count as unattempted.
    #[must_use]
    pub fn tally(questions: &[Question], answers: &AnswerSheet) -> Self {
        questions
            .iter()
            .enumerate()
            .fold(Self::default(), |mut score, (index, question)| {
                match Verdict::classify(question, answers.get(index)) {
                    Verdict::Correct => score.correct = score.correct.saturating_add(1),
                    Verdict::Incorrect => score.incorrect = score.incorrect.saturating_add(1),
                    Verdict::Unattempted => {
                        score.unattempted = score.unattempted.saturating_add(1);
                    }
                }
                score
            })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect + self.unattempted
    }

    /// Correct answers as a whole percentage of all questions, rounded half up.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.correct * 200 + total) / (total * 2)
    }
}

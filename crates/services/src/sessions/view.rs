use exam_core::model::{Question, QuestionFilter, Score, Verdict};
use exam_core::time::format_countdown;

use super::engine::{SessionStatus, SubmitReason, TestSession};
use super::progress::SessionProgress;

/// Presentation-agnostic review line for one submitted question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub index: usize,
    pub question: Question,
    pub selected: Option<String>,
    pub verdict: Verdict,
}

/// How a single option should be highlighted in the review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMark {
    pub text: String,
    pub is_answer: bool,
    /// The user picked this option and it is not the answer.
    pub is_wrong_pick: bool,
}

impl ReviewItem {
    #[must_use]
    pub fn option_marks(&self) -> Vec<OptionMark> {
        self.question
            .options()
            .iter()
            .map(|option| {
                let is_answer = self.question.is_correct(option);
                let picked = self.selected.as_deref() == Some(option.as_str());
                OptionMark {
                    text: option.clone(),
                    is_answer,
                    is_wrong_pick: picked && !is_answer,
                }
            })
            .collect()
    }
}

/// One button in the jump-to-question grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorCell {
    pub index: usize,
    pub answered: bool,
    pub current: bool,
}

/// Everything a renderer needs to draw the session at one instant.
///
/// No styling and no localization beyond the heading and the `MM:SS`
/// countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub heading: String,
    pub status: SessionStatus,
    pub submit_reason: Option<SubmitReason>,
    pub current_index: usize,
    pub total: usize,
    pub question: Question,
    pub selected: Option<String>,
    pub remaining_secs: u32,
    pub countdown: String,
    pub progress: SessionProgress,
    pub navigator: Vec<NavigatorCell>,
    pub can_submit: bool,
    pub score: Option<Score>,
    /// Empty until the session is submitted.
    pub review: Vec<ReviewItem>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn capture(session: &TestSession) -> Self {
        let current = session.current_index();
        let navigator = (0..session.questions().len())
            .map(|index| NavigatorCell {
                index,
                answered: session.answers().is_answered(index),
                current: index == current,
            })
            .collect();

        Self {
            heading: filter_heading(session.filter()),
            status: session.status(),
            submit_reason: session.submit_reason(),
            current_index: current,
            total: session.questions().len(),
            question: session.current_question().clone(),
            selected: session.current_answer().map(str::to_owned),
            remaining_secs: session.remaining_secs(),
            countdown: format_countdown(session.remaining_secs()),
            progress: session.progress(),
            navigator,
            can_submit: session.can_submit(),
            score: session.score(),
            review: session.review().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.status == SessionStatus::Submitted
    }
}

/// Final results of a submitted attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultReport {
    pub heading: String,
    pub score: Score,
    pub percentage: u32,
    pub submit_reason: SubmitReason,
    pub items: Vec<ReviewItem>,
}

impl ResultReport {
    /// Returns `None` while the session is still in progress.
    #[must_use]
    pub fn from_session(session: &TestSession) -> Option<Self> {
        Some(Self {
            heading: filter_heading(session.filter()),
            score: session.score()?,
            percentage: session.score()?.percentage(),
            submit_reason: session.submit_reason()?,
            items: session.review()?,
        })
    }

    /// Returns `None` unless the snapshot was taken after submission.
    #[must_use]
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Option<Self> {
        let score = snapshot.score?;
        Some(Self {
            heading: snapshot.heading.clone(),
            score,
            percentage: score.percentage(),
            submit_reason: snapshot.submit_reason?,
            items: snapshot.review.clone(),
        })
    }
}

/// `"<subject> - <topic>"`, spelling out the wildcards.
#[must_use]
pub fn filter_heading(filter: &QuestionFilter) -> String {
    format!(
        "{} - {}",
        filter.subject.name().unwrap_or("All Subjects"),
        filter.topic.name().unwrap_or("All Topics")
    )
}

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info};

use exam_core::model::{AnswerSheet, Question, QuestionBank, QuestionFilter, Score, Verdict};

use super::config::TestConfig;
use super::progress::SessionProgress;
use super::view::ReviewItem;
use crate::error::SessionError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of an attempt. The only transition is `InProgress` → `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Submitted,
}

/// Why an attempt was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitReason {
    /// The user asked for it.
    Manual,
    /// The countdown reached zero.
    Forced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Result of advancing the countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining_secs: u32 },
    /// The countdown hit zero and the attempt was submitted.
    Expired(Score),
    /// The attempt was already submitted; nothing changed.
    Ignored,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One timed multiple-choice attempt.
///
/// The question list is fixed at construction. Every mutating operation is
/// total: calls that do not apply (navigating past either end, editing after
/// submission, jumping out of range) leave the state untouched.
pub struct TestSession {
    filter: QuestionFilter,
    questions: Vec<Question>,
    answers: AnswerSheet,
    current: usize,
    remaining_secs: u32,
    status: SessionStatus,
    score: Option<Score>,
    submit_reason: Option<SubmitReason>,
    started_at: DateTime<Utc>,
    submitted_at: Option<DateTime<Utc>>,
}

impl TestSession {
    /// Select questions from the bank and start the countdown state.
    ///
    /// Questions matching the filter are taken in bank order, up to the
    /// configured count.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no question matches the filter.
    pub fn start(
        bank: &QuestionBank,
        config: &TestConfig,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let limit = usize::try_from(config.question_count()).unwrap_or(usize::MAX);
        let questions: Vec<Question> = bank.matching(config.filter()).take(limit).cloned().collect();

        if questions.is_empty() {
            debug!(
                subject = %config.filter().subject,
                topic = %config.filter().topic,
                "no questions match filter"
            );
            return Err(SessionError::Empty);
        }

        Ok(Self {
            filter: config.filter().clone(),
            answers: AnswerSheet::new(questions.len()),
            questions,
            current: 0,
            remaining_secs: config.timer_secs(),
            status: SessionStatus::InProgress,
            score: None,
            submit_reason: None,
            started_at,
            submitted_at: None,
        })
    }

    #[must_use]
    pub fn filter(&self) -> &QuestionFilter {
        &self.filter
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// The option recorded for the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(self.current)
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.status == SessionStatus::Submitted
    }

    /// Available once the attempt has been submitted.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    #[must_use]
    pub fn submit_reason(&self) -> Option<SubmitReason> {
        self.submit_reason
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    /// Manual submission is offered only after at least one answer.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitted() && self.answers.any_answered()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.questions.len();
        let answered = self.answers.answered_count();
        let position = self.current + 1;
        let percent_through = u32::try_from(position * 100 / total).unwrap_or(100);
        SessionProgress {
            total,
            answered,
            unanswered: total - answered,
            position,
            percent_through,
            is_submitted: self.is_submitted(),
        }
    }

    /// Per-question verdicts, available once submitted.
    #[must_use]
    pub fn review(&self) -> Option<Vec<ReviewItem>> {
        if !self.is_submitted() {
            return None;
        }
        Some(
            self.questions
                .iter()
                .enumerate()
                .map(|(index, question)| {
                    let selected = self.answers.get(index);
                    ReviewItem {
                        index,
                        question: question.clone(),
                        selected: selected.map(str::to_owned),
                        verdict: Verdict::classify(question, selected),
                    }
                })
                .collect(),
        )
    }

    /// Record `option` as the answer to the current question.
    pub fn select_answer(&mut self, option: impl Into<String>) {
        if self.is_submitted() {
            return;
        }
        self.answers.set(self.current, option);
    }

    /// Record the current question's option at `option_index`.
    pub fn select_option(&mut self, option_index: usize) {
        let Some(option) = self.current_question().option(option_index) else {
            return;
        };
        let option = option.to_owned();
        self.select_answer(option);
    }

    /// Move one question forward or back; stays put at either end.
    pub fn navigate(&mut self, direction: Direction) {
        if self.is_submitted() {
            return;
        }
        match direction {
            Direction::Next if self.current + 1 < self.questions.len() => self.current += 1,
            Direction::Previous if self.current > 0 => self.current -= 1,
            _ => {}
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        if self.is_submitted() || index >= self.questions.len() {
            return;
        }
        self.current = index;
    }

    /// Count down one second, submitting when the time runs out.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if self.is_submitted() {
            return TickOutcome::Ignored;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            return TickOutcome::Expired(self.finish(now, SubmitReason::Forced));
        }
        TickOutcome::Running {
            remaining_secs: self.remaining_secs,
        }
    }

    /// Score the attempt and close it.
    ///
    /// Calling this on a submitted session returns the existing score.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Score {
        match self.score {
            Some(score) => score,
            None => self.finish(now, SubmitReason::Manual),
        }
    }

    fn finish(&mut self, now: DateTime<Utc>, reason: SubmitReason) -> Score {
        let score = Score::tally(&self.questions, &self.answers);
        self.status = SessionStatus::Submitted;
        self.score = Some(score);
        self.submit_reason = Some(reason);
        self.submitted_at = Some(now);

        info!(
            ?reason,
            correct = score.correct,
            incorrect = score.incorrect,
            unattempted = score.unattempted,
            "test submitted"
        );
        score
    }
}

impl fmt::Debug for TestSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSession")
            .field("filter", &self.filter)
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answers.answered_count())
            .field("current", &self.current)
            .field("remaining_secs", &self.remaining_secs)
            .field("status", &self.status)
            .field("submit_reason", &self.submit_reason)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

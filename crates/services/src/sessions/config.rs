use exam_core::model::{QuestionFilter, Selection};

use crate::error::ConfigError;

/// Parameters chosen on the test form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    filter: QuestionFilter,
    question_count: u32,
    timer_minutes: u32,
}

impl TestConfig {
    /// Build a configuration, rejecting zero questions or a zero-minute timer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroQuestions` or `ConfigError::ZeroMinutes`.
    pub fn new(
        filter: QuestionFilter,
        question_count: u32,
        timer_minutes: u32,
    ) -> Result<Self, ConfigError> {
        if question_count == 0 {
            return Err(ConfigError::ZeroQuestions);
        }
        if timer_minutes == 0 {
            return Err(ConfigError::ZeroMinutes);
        }
        Ok(Self {
            filter,
            question_count,
            timer_minutes,
        })
    }

    /// Convenience for `subject`/`topic` strings as they arrive from a form,
    /// where `"All"` is the wildcard.
    ///
    /// # Errors
    ///
    /// Same as [`TestConfig::new`].
    pub fn from_form(
        subject: &str,
        topic: &str,
        question_count: u32,
        timer_minutes: u32,
    ) -> Result<Self, ConfigError> {
        Self::new(
            QuestionFilter::new(Selection::from(subject), Selection::from(topic)),
            question_count,
            timer_minutes,
        )
    }

    #[must_use]
    pub fn filter(&self) -> &QuestionFilter {
        &self.filter
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn timer_minutes(&self) -> u32 {
        self.timer_minutes
    }

    /// Countdown length in seconds.
    #[must_use]
    pub fn timer_secs(&self) -> u32 {
        self.timer_minutes.saturating_mul(60)
    }
}

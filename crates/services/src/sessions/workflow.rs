use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use exam_core::model::QuestionBank;

use super::config::TestConfig;
use super::engine::TestSession;
use super::live::LiveSession;
use super::view::ResultReport;
use crate::Clock;
use crate::error::SessionError;

const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Starts test attempts against a loaded question bank.
#[derive(Clone)]
pub struct TestSessionService {
    clock: Clock,
    bank: Arc<QuestionBank>,
    tick_period: Duration,
}

impl TestSessionService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>) -> Self {
        Self {
            clock,
            bank,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    /// Override how often the countdown ticks. Each tick removes one second
    /// of remaining time regardless of the period.
    #[must_use]
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// Start a session that the caller drives by hand, including ticks.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no question matches the filter.
    pub fn start(&self, config: &TestConfig) -> Result<TestSession, SessionError> {
        let session = TestSession::start(&self.bank, config, self.clock.now())?;
        info!(
            subject = %config.filter().subject,
            topic = %config.filter().topic,
            questions = session.questions().len(),
            minutes = config.timer_minutes(),
            "test started"
        );
        Ok(session)
    }

    /// Start a session on its own task with a running countdown.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no question matches the filter.
    pub fn start_live(&self, config: &TestConfig) -> Result<LiveSession, SessionError> {
        let session = self.start(config)?;
        Ok(LiveSession::spawn(session, self.clock, self.tick_period))
    }

    /// Results of a submitted session; `None` while it is still running.
    #[must_use]
    pub fn report(&self, session: &TestSession) -> Option<ResultReport> {
        ResultReport::from_session(session)
    }
}

impl std::fmt::Debug for TestSessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSessionService")
            .field("clock", &self.clock)
            .field("tick_period", &self.tick_period)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{Question, QuestionId, Subject, Topic};
    use exam_core::time::{fixed_clock, fixed_now};

    fn service() -> TestSessionService {
        let questions = (1..=3)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("Q{id}"),
                    vec!["yes".into(), "no".into()],
                    "yes",
                )
            })
            .collect();
        let bank = QuestionBank::new(vec![Subject::new(
            "Logic",
            vec![Topic::new("Basics", "Boole", None, questions)],
        )]);
        TestSessionService::new(fixed_clock(), Arc::new(bank))
    }

    #[test]
    fn start_stamps_with_clock() {
        let config = TestConfig::from_form("Logic", "All", 2, 1).unwrap();
        let session = service().start(&config).unwrap();
        assert_eq!(session.started_at(), fixed_now());
        assert_eq!(session.questions().len(), 2);
    }

    #[test]
    fn start_rejects_empty_selection() {
        let config = TestConfig::from_form("History", "All", 2, 1).unwrap();
        assert!(matches!(service().start(&config), Err(SessionError::Empty)));
    }

    #[test]
    fn report_only_after_submission() {
        let service = service();
        let config = TestConfig::from_form("All", "All", 5, 1).unwrap();
        let mut session = service.start(&config).unwrap();
        assert!(service.report(&session).is_none());

        session.select_option(0);
        session.submit(fixed_now());

        let report = service.report(&session).unwrap();
        assert_eq!(report.heading, "All Subjects - All Topics");
        assert_eq!(report.score.correct, 1);
        assert_eq!(report.score.unattempted, 2);
        assert_eq!(report.percentage, 33);
    }

    #[tokio::test(start_paused = true)]
    async fn live_session_uses_configured_tick_period() {
        let service = service().with_tick_period(Duration::from_millis(10));
        let config = TestConfig::from_form("Logic", "Basics", 3, 1).unwrap();
        let live = service.start_live(&config).unwrap();

        let started = tokio::time::Instant::now();
        let done = live.finished().await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(600));
        assert_eq!(done.score.map(|s| s.unattempted), Some(3));
    }
}

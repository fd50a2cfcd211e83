use std::fmt;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use exam_core::Clock;
use exam_core::model::Score;

use super::engine::{Direction, TestSession, TickOutcome};
use super::timer::SessionTimer;
use super::view::SessionSnapshot;
use crate::error::SessionError;

pub type LiveSessionId = Uuid;

const COMMAND_BUFFER: usize = 32;

/// A user action on the current question or position.
#[derive(Debug)]
pub(crate) enum Intent {
    SelectAnswer(String),
    SelectOption(usize),
    Navigate(Direction),
    JumpTo(usize),
}

/// Everything that may change a running session, in arrival order.
#[derive(Debug)]
pub(crate) enum SessionCommand {
    /// Acknowledged once the intent is applied and published.
    Apply {
        intent: Intent,
        applied: oneshot::Sender<()>,
    },
    Submit(oneshot::Sender<Score>),
    Tick,
}

//
// ─── HANDLE ────────────────────────────────────────────────────────────────────
//

/// A [`TestSession`] running on its own task with a live countdown.
///
/// User intents and timer ticks are queued to a single writer, so a manual
/// submit racing the final tick still produces exactly one submission. Every
/// state change is published as a [`SessionSnapshot`]; intent methods return
/// only after their change is visible through [`LiveSession::snapshot`].
///
/// Dropping the handle stops the session task and its countdown.
pub struct LiveSession {
    id: LiveSessionId,
    commands: mpsc::Sender<SessionCommand>,
    snapshots: watch::Receiver<SessionSnapshot>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl LiveSession {
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn(session: TestSession, clock: Clock, tick_period: Duration) -> Self {
        let id = Uuid::new_v4();
        let (commands, queue) = mpsc::channel(COMMAND_BUFFER);
        let (publisher, snapshots) = watch::channel(SessionSnapshot::capture(&session));
        let shutdown = CancellationToken::new();

        let actor = SessionActor {
            timer: Some(SessionTimer::start(tick_period, commands.clone())),
            session,
            clock,
            publisher,
        };
        let span = info_span!("live_session", session_id = %id);
        let task = tokio::spawn(actor.run(queue, shutdown.clone()).instrument(span));

        Self {
            id,
            commands,
            snapshots,
            shutdown,
            task: Some(task),
        }
    }

    #[must_use]
    pub fn id(&self) -> LiveSessionId {
        self.id
    }

    /// The most recently published state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every published state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the session task has stopped.
    pub async fn select_answer(&self, option: impl Into<String>) -> Result<(), SessionError> {
        self.apply(Intent::SelectAnswer(option.into())).await
    }

    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the session task has stopped.
    pub async fn select_option(&self, option_index: usize) -> Result<(), SessionError> {
        self.apply(Intent::SelectOption(option_index)).await
    }

    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the session task has stopped.
    pub async fn navigate(&self, direction: Direction) -> Result<(), SessionError> {
        self.apply(Intent::Navigate(direction)).await
    }

    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the session task has stopped.
    pub async fn jump_to(&self, index: usize) -> Result<(), SessionError> {
        self.apply(Intent::JumpTo(index)).await
    }

    /// Submit now, or return the existing score if the attempt is already
    /// closed. The published snapshot is up to date when this returns.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the session task has stopped.
    pub async fn submit(&self) -> Result<Score, SessionError> {
        let (reply, score) = oneshot::channel();
        self.send(SessionCommand::Submit(reply)).await?;
        score.await.map_err(|_| SessionError::Closed)
    }

    /// Wait until the attempt is submitted, by either path.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the session stops first.
    pub async fn finished(&self) -> Result<SessionSnapshot, SessionError> {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots
            .wait_for(SessionSnapshot::is_submitted)
            .await
            .map_err(|_| SessionError::Closed)?;
        Ok(snapshot.clone())
    }

    /// Stop the session and wait for its task to wind down.
    pub async fn close(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!(session_id = %self.id, %err, "live session task failed");
            }
        }
    }

    async fn apply(&self, intent: Intent) -> Result<(), SessionError> {
        let (applied, ack) = oneshot::channel();
        self.send(SessionCommand::Apply { intent, applied }).await?;
        ack.await.map_err(|_| SessionError::Closed)
    }

    async fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| SessionError::Closed)
    }
}

impl Drop for LiveSession {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl fmt::Debug for LiveSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveSession")
            .field("id", &self.id)
            .field("stopped", &self.shutdown.is_cancelled())
            .finish_non_exhaustive()
    }
}

//
// ─── ACTOR ─────────────────────────────────────────────────────────────────────
//

struct SessionActor {
    session: TestSession,
    clock: Clock,
    timer: Option<SessionTimer>,
    publisher: watch::Sender<SessionSnapshot>,
}

impl SessionActor {
    async fn run(mut self, mut queue: mpsc::Receiver<SessionCommand>, shutdown: CancellationToken) {
        info!(
            questions = self.session.questions().len(),
            remaining_secs = self.session.remaining_secs(),
            "live session started"
        );

        loop {
            let command = tokio::select! {
                () = shutdown.cancelled() => break,
                command = queue.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };
            self.handle(command);
        }

        debug!(submitted = self.session.is_submitted(), "live session stopped");
    }

    fn handle(&mut self, command: SessionCommand) {
        let now = self.clock.now();
        // Replies are sent after publishing; a caller that stopped waiting is fine.
        match command {
            SessionCommand::Apply { intent, applied } => {
                match intent {
                    Intent::SelectAnswer(option) => self.session.select_answer(option),
                    Intent::SelectOption(index) => self.session.select_option(index),
                    Intent::Navigate(direction) => self.session.navigate(direction),
                    Intent::JumpTo(index) => self.session.jump_to(index),
                }
                self.publish();
                let _ = applied.send(());
            }
            SessionCommand::Submit(reply) => {
                let score = self.session.submit(now);
                self.publish();
                let _ = reply.send(score);
            }
            SessionCommand::Tick => {
                if let TickOutcome::Expired(_) = self.session.tick(now) {
                    info!("time is up");
                }
                self.publish();
            }
        }
    }

    fn publish(&mut self) {
        if self.session.is_submitted() {
            if let Some(mut timer) = self.timer.take() {
                timer.cancel();
            }
        }

        let next = SessionSnapshot::capture(&self.session);
        self.publisher.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

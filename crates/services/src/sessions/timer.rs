use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use super::live::SessionCommand;

/// Recurring countdown tick owned by a live session.
///
/// Each period it pushes a `Tick` into the session's command queue, so ticks
/// and user intents are applied in one order by one writer. The task is
/// stopped when the timer is cancelled or dropped, whichever comes first.
pub(crate) struct SessionTimer {
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl SessionTimer {
    /// Start ticking. The first tick fires one full `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn start(period: Duration, commands: mpsc::Sender<SessionCommand>) -> Self {
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let handle = tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = ticks.tick() => {
                        if commands.send(SessionCommand::Tick).await.is_err() {
                            break;
                        }
                    }
                }
            }
            trace!("countdown task finished");
        });

        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    /// Stop ticking. Safe to call more than once.
    pub(crate) fn cancel(&mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

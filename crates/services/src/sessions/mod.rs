mod config;
mod engine;
mod live;
mod progress;
mod timer;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use config::TestConfig;
pub use engine::{Direction, SessionStatus, SubmitReason, TestSession, TickOutcome};
pub use live::{LiveSession, LiveSessionId};
pub use progress::SessionProgress;
pub use view::{
    NavigatorCell, OptionMark, ResultReport, ReviewItem, SessionSnapshot, filter_heading,
};
pub use workflow::TestSessionService;

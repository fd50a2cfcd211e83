#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod sessions;

pub use exam_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::{CatalogService, ReadingList, TopicSummary};
pub use error::{AppServicesError, CatalogError, ConfigError, SessionError};

pub use sessions::{
    Direction, LiveSession, LiveSessionId, NavigatorCell, OptionMark, ResultReport, ReviewItem,
    SessionProgress, SessionSnapshot, SessionStatus, SubmitReason, TestConfig, TestSession,
    TestSessionService, TickOutcome,
};

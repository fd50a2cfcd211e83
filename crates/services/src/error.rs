//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::model::Selection;
use storage::StorageError;

/// Rejected test configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("number of questions must be at least 1")]
    ZeroQuestions,
    #[error("timer must be at least 1 minute")]
    ZeroMinutes,
}

/// Errors emitted by session services.
///
/// Out-of-range navigation and edits after submission are not errors; the
/// engine ignores them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for the selected subject and topic")]
    Empty,
    #[error("session is no longer running")]
    Closed,
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no questions available for {subject} / {topic}")]
    NoQuestions { subject: Selection, topic: Selection },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

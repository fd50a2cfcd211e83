use async_trait::async_trait;
use exam_core::model::{BankError, QuestionBank};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    InvalidBank(#[from] BankError),
}

/// Read-only supplier of the question bank.
///
/// Sources are consulted once at start-up; nothing writes back through them.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load the full bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bank cannot be read, parsed, or fails
    /// the source's validation policy.
    async fn load_bank(&self) -> Result<QuestionBank, StorageError>;
}

/// Source backed by a bank already held in memory, for tests and embedding.
#[derive(Clone, Default)]
pub struct InMemoryQuestionSource {
    bank: Arc<QuestionBank>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
        Ok(self.bank.as_ref().clone())
    }
}

/// Holds the configured question source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionSource>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(bank: QuestionBank) -> Self {
        let questions: Arc<dyn QuestionSource> = Arc::new(InMemoryQuestionSource::new(bank));
        Self { questions }
    }
}

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use exam_core::model::QuestionBank;
use tracing::{debug, warn};

use crate::repository::{QuestionSource, Storage, StorageError};

mod mapping;

pub use mapping::{BankRecord, QuestionRecord, SubjectRecord, TopicRecord};

/// What to do with questions whose answer is not among their options
/// (or that are otherwise malformed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Accept the data as given and log each issue.
    #[default]
    Trust,
    /// Reject the whole bank on the first issue.
    Strict,
}

/// Question source reading the bank from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonQuestionSource {
    path: PathBuf,
    policy: LoadPolicy,
}

impl JsonQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: LoadPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for JsonQuestionSource {
    async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let bank = parse_bank(&raw, self.policy)?;
        debug!(
            path = %self.path.display(),
            subjects = bank.subjects().len(),
            "loaded question bank"
        );
        Ok(bank)
    }
}

/// Parse bank JSON and apply the load policy.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidBank` when a strict policy finds a malformed question.
pub fn parse_bank(raw: &str, policy: LoadPolicy) -> Result<QuestionBank, StorageError> {
    let record: BankRecord =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    let bank = record.into_bank();

    match policy {
        LoadPolicy::Strict => bank.validate()?,
        LoadPolicy::Trust => {
            for issue in bank.issues() {
                warn!(
                    subject = %issue.subject,
                    topic = %issue.topic,
                    question = %issue.question_id,
                    error = %issue.error,
                    "malformed question kept as-is"
                );
            }
        }
    }

    Ok(bank)
}

/// Write a bank to `path` in the on-disk JSON layout.
///
/// # Errors
///
/// Returns `StorageError::Serialization` or `StorageError::Io` on failure.
pub async fn write_bank(path: &Path, bank: &QuestionBank) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(&BankRecord::from_bank(bank))
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

impl Storage {
    /// Build a `Storage` reading the bank from a JSON file.
    #[must_use]
    pub fn json(path: impl Into<PathBuf>, policy: LoadPolicy) -> Self {
        let source = JsonQuestionSource::new(path).with_policy(policy);
        let questions: Arc<dyn QuestionSource> = Arc::new(source);
        Self { questions }
    }
}

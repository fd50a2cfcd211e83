use std::sync::Arc;

use tracing::{info, warn};

use exam_core::model::QuestionBank;
use storage::repository::Storage;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::sessions::TestSessionService;

/// Assembles app-facing services over one shared question bank.
#[derive(Debug, Clone)]
pub struct AppServices {
    bank: Arc<QuestionBank>,
    catalog: Arc<CatalogService>,
    sessions: Arc<TestSessionService>,
}

impl AppServices {
    /// Load the bank once from storage and build services over it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the bank cannot be loaded.
    pub async fn load(storage: &Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let bank = storage.questions.load_bank().await?;
        let subjects = bank.subjects().len();
        let questions: usize = bank.subjects().iter().map(|s| s.question_count()).sum();
        if bank.is_empty() {
            warn!("question bank has no questions");
        }
        info!(subjects, questions, "question bank loaded");

        Ok(Self::from_bank(Arc::new(bank), clock))
    }

    #[must_use]
    pub fn from_bank(bank: Arc<QuestionBank>, clock: Clock) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&bank)));
        let sessions = Arc::new(TestSessionService::new(clock, Arc::clone(&bank)));
        Self {
            bank,
            catalog,
            sessions,
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<TestSessionService> {
        Arc::clone(&self.sessions)
    }
}

pub mod catalog;
pub mod check;
pub mod read;
pub mod seed;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use services::{AppServices, Clock};
use storage::{LoadPolicy, Storage};

/// Where the question bank lives and how strictly to load it.
pub struct BankSource {
    path: PathBuf,
    policy: LoadPolicy,
}

impl BankSource {
    pub fn new(path: PathBuf, strict: bool) -> Self {
        let policy = if strict {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Trust
        };
        Self { path, policy }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage(&self, policy: LoadPolicy) -> Storage {
        Storage::json(&self.path, policy)
    }

    pub async fn services(&self) -> Result<AppServices> {
        AppServices::load(&self.storage(self.policy), Clock::default())
            .await
            .with_context(|| format!("loading question bank from {}", self.path.display()))
    }
}

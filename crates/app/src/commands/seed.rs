//! The `exam seed` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use storage::demo::demo_bank;
use storage::json::write_bank;
use tracing::info;

use super::BankSource;

pub async fn execute(source: &BankSource, out: Option<PathBuf>) -> Result<()> {
    let path = out.unwrap_or_else(|| source.path().to_path_buf());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let bank = demo_bank();
    write_bank(&path, &bank)
        .await
        .with_context(|| format!("writing question bank to {}", path.display()))?;

    info!(path = %path.display(), "demo bank written");
    println!("Wrote demo question bank to {}", path.display());
    Ok(())
}

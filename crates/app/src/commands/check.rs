//! The `exam check` command.

use anyhow::{Context, Result, bail};
use storage::LoadPolicy;

use super::BankSource;

pub async fn execute(source: &BankSource) -> Result<()> {
    // Trust here so every issue is listed, not only the first.
    let bank = source
        .storage(LoadPolicy::Trust)
        .questions
        .load_bank()
        .await
        .with_context(|| format!("loading question bank from {}", source.path().display()))?;

    let questions: usize = bank.subjects().iter().map(|s| s.question_count()).sum();
    println!(
        "Question bank: {} subject(s), {questions} question(s)",
        bank.subjects().len()
    );

    let issues = bank.issues();
    for issue in &issues {
        println!(
            "  [{}/{} #{}] {}",
            issue.subject, issue.topic, issue.question_id, issue.error
        );
    }

    if !issues.is_empty() {
        bail!("{} malformed question(s) found", issues.len());
    }
    println!("All questions valid.");
    Ok(())
}

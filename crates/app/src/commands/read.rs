//! The `exam read` command.

use anyhow::Result;
use exam_core::model::{QuestionFilter, Selection};

use super::BankSource;
use crate::render;

pub async fn execute(
    source: &BankSource,
    subject: &str,
    topic: &str,
    show_answers: bool,
) -> Result<()> {
    let services = source.services().await?;
    let filter = QuestionFilter::new(Selection::from(subject), Selection::from(topic));
    let list = services.catalog().reading_list(&filter);
    print!("{}", render::reading_list(&list, show_answers));
    Ok(())
}

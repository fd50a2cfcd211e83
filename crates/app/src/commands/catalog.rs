//! The `exam subjects`, `exam topics` and `exam books` commands.

use anyhow::Result;
use exam_core::model::Selection;

use super::BankSource;
use crate::render;

pub async fn subjects(source: &BankSource) -> Result<()> {
    let services = source.services().await?;
    let subjects = services.catalog().subjects();
    if subjects.is_empty() {
        println!("No subjects with questions.");
        return Ok(());
    }
    for subject in subjects {
        println!("{subject}");
    }
    Ok(())
}

pub async fn topics(source: &BankSource, subject: &str) -> Result<()> {
    let services = source.services().await?;
    let topics = services.catalog().topics(&Selection::from(subject));
    if topics.is_empty() {
        println!("No topics found for {subject}.");
        return Ok(());
    }
    println!("{}", render::topics_table(&topics));
    Ok(())
}

pub async fn books(source: &BankSource) -> Result<()> {
    let services = source.services().await?;
    let books = services.catalog().books();
    if books.is_empty() {
        println!("No reference books listed.");
        return Ok(());
    }
    println!("{}", render::books_table(&books));
    Ok(())
}

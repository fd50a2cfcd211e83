#![forbid(unsafe_code)]

pub mod demo;
pub mod json;
pub mod repository;

pub use json::{JsonQuestionSource, LoadPolicy};
pub use repository::{InMemoryQuestionSource, QuestionSource, Storage, StorageError};

mod answer;
mod bank;
mod ids;
mod question;
mod score;

pub use answer::AnswerSheet;
pub use bank::{
    BankError, BankIssue, Book, QuestionBank, QuestionFilter, Selection, Subject, Topic, slugify,
};
pub use ids::{ParseIdError, QuestionId};
pub use question::{Question, QuestionError};
pub use score::{Score, Verdict};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question {id} in {subject}/{topic}: {source}")]
    InvalidQuestion {
        subject: String,
        topic: String,
        id: QuestionId,
        #[source]
        source: QuestionError,
    },
}

/// A malformed question found while scanning the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankIssue {
    pub subject: String,
    pub topic: String,
    pub question_id: QuestionId,
    pub error: QuestionError,
}

impl From<BankIssue> for BankError {
    fn from(issue: BankIssue) -> Self {
        BankError::InvalidQuestion {
            subject: issue.subject,
            topic: issue.topic,
            id: issue.question_id,
            source: issue.error,
        }
    }
}

//
// ─── SELECTION ─────────────────────────────────────────────────────────────────
//

/// Either every subject/topic, or one of them by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Named(String),
}

impl Selection {
    /// The literal used by forms and query strings for the wildcard.
    pub const ALL: &'static str = "All";

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }

    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == candidate,
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Named(value.to_owned())
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Subject/topic filter used to pick questions for reading or testing.
///
/// The topic is matched only within subjects the subject selection admits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionFilter {
    pub subject: Selection,
    pub topic: Selection,
}

impl QuestionFilter {
    #[must_use]
    pub fn new(subject: Selection, topic: Selection) -> Self {
        Self { subject, topic }
    }

    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    name: String,
    author: String,
    book_link: Option<String>,
    questions: Vec<Question>,
}

impl Topic {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        book_link: Option<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            book_link,
            questions,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn book_link(&self) -> Option<&str> {
        self.book_link.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// URL-safe identifier for the topic's summary page.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    name: String,
    topics: Vec<Topic>,
}

impl Subject {
    #[must_use]
    pub fn new(name: impl Into<String>, topics: Vec<Topic>) -> Self {
        Self {
            name: name.into(),
            topics,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|t| t.questions.len()).sum()
    }
}

/// A reference book attached to a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub subject: String,
    pub topic: String,
    pub author: String,
    pub link: String,
}

/// Read-only question bank: subjects, each holding topics, each holding questions.
///
/// Order is significant everywhere; filtering never reorders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    subjects: Vec<Subject>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.iter().all(|s| s.question_count() == 0)
    }

    /// Names of subjects that hold at least one question.
    #[must_use]
    pub fn subject_names(&self) -> Vec<&str> {
        self.subjects
            .iter()
            .filter(|s| s.question_count() > 0)
            .map(Subject::name)
            .collect()
    }

    /// Topics within the selected subjects, paired with their subject.
    pub fn topics<'a, 's>(
        &'a self,
        subject: &'s Selection,
    ) -> impl Iterator<Item = (&'a Subject, &'a Topic)> + use<'a, 's> {
        self.subjects
            .iter()
            .filter(move |s| subject.matches(&s.name))
            .flat_map(|s| s.topics.iter().map(move |t| (s, t)))
    }

    /// Find a topic by name within the selected subjects.
    #[must_use]
    pub fn find_topic(&self, subject: &Selection, topic: &str) -> Option<(&Subject, &Topic)> {
        self.topics(subject).find(|(_, t)| t.name == topic)
    }

    /// Questions admitted by `filter`, in bank order.
    pub fn matching<'a, 'f>(
        &'a self,
        filter: &'f QuestionFilter,
    ) -> impl Iterator<Item = &'a Question> + use<'a, 'f> {
        self.topics(&filter.subject)
            .filter(move |(_, t)| filter.topic.matches(&t.name))
            .flat_map(|(_, t)| t.questions.iter())
    }

    #[must_use]
    pub fn count_matching(&self, filter: &QuestionFilter) -> usize {
        self.topics(&filter.subject)
            .filter(|(_, t)| filter.topic.matches(&t.name))
            .map(|(_, t)| t.questions.len())
            .sum()
    }

    /// Topics that carry a reference book link.
    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.topics(&Selection::All)
            .filter_map(|(s, t)| {
                t.book_link.as_ref().map(|link| Book {
                    subject: s.name.clone(),
                    topic: t.name.clone(),
                    author: t.author.clone(),
                    link: link.clone(),
                })
            })
            .collect()
    }

    /// Every malformed question in the bank.
    #[must_use]
    pub fn issues(&self) -> Vec<BankIssue> {
        self.topics(&Selection::All)
            .flat_map(|(s, t)| {
                t.questions.iter().filter_map(move |q| {
                    q.validate().err().map(|error| BankIssue {
                        subject: s.name.clone(),
                        topic: t.name.clone(),
                        question_id: q.id(),
                        error,
                    })
                })
            })
            .collect()
    }

    /// Strict check of every question.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` for the first malformed question.
    pub fn validate(&self) -> Result<(), BankError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(()),
        }
    }
}

/// Lowercase, hyphenate whitespace, drop non-word characters, collapse hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, answer: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Q{id}"),
            vec!["A".into(), "B".into()],
            answer,
        )
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            Subject::new(
                "Math",
                vec![
                    Topic::new("Algebra", "Euler", None, vec![question(1, "A"), question(2, "B")]),
                    Topic::new(
                        "Geometry",
                        "Euclid",
                        Some("https://example.org/elements".into()),
                        vec![question(3, "A")],
                    ),
                ],
            ),
            Subject::new(
                "Physics",
                vec![
                    Topic::new("Algebra", "Noether", None, vec![question(4, "A")]),
                    Topic::new("Optics", "Newton", None, vec![question(5, "Z")]),
                ],
            ),
            Subject::new("History", vec![Topic::new("Empty", "Nobody", None, Vec::new())]),
        ])
    }

    fn ids<'a>(questions: impl Iterator<Item = &'a Question>) -> Vec<u64> {
        questions.map(|q| q.id().value()).collect()
    }

    #[test]
    fn all_wildcards_keep_bank_order() {
        let bank = bank();
        let filter = QuestionFilter::all();
        assert_eq!(ids(bank.matching(&filter)), vec![1, 2, 3, 4, 5]);
        assert_eq!(bank.count_matching(&filter), 5);
    }

    #[test]
    fn topic_matches_only_within_selected_subject() {
        let bank = bank();
        let filter = QuestionFilter::new(Selection::named("Math"), Selection::named("Algebra"));
        assert_eq!(ids(bank.matching(&filter)), vec![1, 2]);

        let any_subject = QuestionFilter::new(Selection::All, Selection::named("Algebra"));
        assert_eq!(ids(bank.matching(&any_subject)), vec![1, 2, 4]);
    }

    #[test]
    fn unknown_names_match_nothing() {
        let bank = bank();
        let filter = QuestionFilter::new(Selection::named("Chemistry"), Selection::All);
        assert_eq!(bank.matching(&filter).count(), 0);
        assert_eq!(bank.count_matching(&filter), 0);
    }

    #[test]
    fn selection_parses_the_all_literal() {
        assert_eq!("All".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!(Selection::from("all"), Selection::named("all"));
        assert_eq!(Selection::named("Math").to_string(), "Math");
        assert_eq!(Selection::All.to_string(), "All");
    }

    #[test]
    fn found_topic_outlives_the_selection() {
        let bank = bank();
        let found = {
            let subject = Selection::named("Math");
            bank.find_topic(&subject, "Algebra")
        };
        let (subject, topic) = found.unwrap();
        assert_eq!(subject.name(), "Math");
        assert_eq!(topic.author(), "Euler");

        assert!(bank.find_topic(&Selection::named("Physics"), "Geometry").is_none());
    }

    #[test]
    fn subject_names_skip_empty_subjects() {
        assert_eq!(bank().subject_names(), vec!["Math", "Physics"]);
    }

    #[test]
    fn books_list_only_linked_topics() {
        let books = bank().books();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].topic, "Geometry");
        assert_eq!(books[0].author, "Euclid");
    }

    #[test]
    fn validate_reports_first_malformed_question() {
        let bank = bank();
        let issues = bank.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].question_id, QuestionId::new(5));

        let err = bank.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "question 5 in Physics/Optics: answer \"Z\" is not one of the options"
        );
    }

    #[test]
    fn slugify_matches_summary_urls() {
        assert_eq!(slugify("Linear Algebra"), "linear-algebra");
        assert_eq!(slugify("C++  Basics"), "c-basics");
        assert_eq!(slugify("Rise - and Fall"), "rise-and-fall");
        assert_eq!(slugify("snake_case ok"), "snake_case-ok");
    }
}

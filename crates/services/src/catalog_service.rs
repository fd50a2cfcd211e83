use std::sync::Arc;

use exam_core::model::{Book, Question, QuestionBank, QuestionFilter, Selection};

use crate::error::CatalogError;
use crate::sessions::TestConfig;

/// Suggested question count and timer minutes for a new test.
const DEFAULT_FORM_VALUE: u32 = 10;

/// One row of the topic listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub subject: String,
    pub name: String,
    pub author: String,
    pub slug: String,
    pub question_count: usize,
}

/// Questions to study outside a timed test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingList {
    pub title: String,
    pub questions: Vec<Question>,
}

/// Read-only browsing over the question bank.
#[derive(Debug, Clone)]
pub struct CatalogService {
    bank: Arc<QuestionBank>,
}

impl CatalogService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    /// Subjects that have at least one question.
    #[must_use]
    pub fn subjects(&self) -> Vec<String> {
        self.bank
            .subject_names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn topics(&self, subject: &Selection) -> Vec<TopicSummary> {
        self.bank
            .topics(subject)
            .map(|(s, t)| TopicSummary {
                subject: s.name().to_owned(),
                name: t.name().to_owned(),
                author: t.author().to_owned(),
                slug: t.slug(),
                question_count: t.questions().len(),
            })
            .collect()
    }

    /// Upper bound for both the question count and the timer minutes.
    #[must_use]
    pub fn max_questions(&self, filter: &QuestionFilter) -> u32 {
        u32::try_from(self.bank.count_matching(filter)).unwrap_or(u32::MAX)
    }

    /// Pre-filled form values for `filter`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoQuestions` if nothing matches the filter.
    pub fn default_config(&self, filter: QuestionFilter) -> Result<TestConfig, CatalogError> {
        let max = self.max_questions(&filter);
        if max == 0 {
            return Err(CatalogError::NoQuestions {
                subject: filter.subject,
                topic: filter.topic,
            });
        }
        let value = max.min(DEFAULT_FORM_VALUE);
        Ok(TestConfig::new(filter, value, value)?)
    }

    #[must_use]
    pub fn reading_list(&self, filter: &QuestionFilter) -> ReadingList {
        ReadingList {
            title: self.reading_title(filter),
            questions: self.bank.matching(filter).cloned().collect(),
        }
    }

    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.bank.books()
    }

    fn reading_title(&self, filter: &QuestionFilter) -> String {
        if let Some(topic) = filter.topic.name() {
            let author = self
                .bank
                .find_topic(&filter.subject, topic)
                .map(|(_, t)| t.author());
            return match author {
                Some(author) => format!("{topic} ({author})"),
                None => topic.to_owned(),
            };
        }
        filter
            .subject
            .name()
            .map_or_else(|| "Reading Material".to_owned(), str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{QuestionId, Subject, Topic};

    fn question(id: u64) -> Question {
        Question::new(QuestionId::new(id), format!("Q{id}"), vec!["A".into()], "A")
    }

    fn catalog() -> CatalogService {
        let many = (1..=12).map(question).collect();
        let bank = QuestionBank::new(vec![
            Subject::new(
                "Math",
                vec![
                    Topic::new("Linear Algebra", "Strang", None, vec![question(1), question(2)]),
                    Topic::new(
                        "Calculus",
                        "Spivak",
                        Some("https://example.org/calculus.pdf".into()),
                        many,
                    ),
                ],
            ),
            Subject::new("Art", vec![Topic::new("Color", "Itten", None, Vec::new())]),
        ]);
        CatalogService::new(Arc::new(bank))
    }

    fn filter(subject: &str, topic: &str) -> QuestionFilter {
        QuestionFilter::new(Selection::from(subject), Selection::from(topic))
    }

    #[test]
    fn subjects_skip_empty_ones() {
        assert_eq!(catalog().subjects(), vec!["Math".to_owned()]);
    }

    #[test]
    fn topics_carry_slug_and_counts() {
        let topics = catalog().topics(&Selection::named("Math"));
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].slug, "linear-algebra");
        assert_eq!(topics[0].question_count, 2);
        assert_eq!(topics[1].author, "Spivak");

        assert_eq!(catalog().topics(&Selection::All).len(), 3);
    }

    #[test]
    fn default_config_caps_at_ten() {
        let catalog = catalog();

        let big = catalog.default_config(filter("Math", "Calculus")).unwrap();
        assert_eq!(big.question_count(), 10);
        assert_eq!(big.timer_minutes(), 10);

        let small = catalog.default_config(filter("Math", "Linear Algebra")).unwrap();
        assert_eq!(small.question_count(), 2);
        assert_eq!(small.timer_minutes(), 2);
        assert_eq!(catalog.max_questions(&filter("All", "All")), 14);
    }

    #[test]
    fn default_config_rejects_empty_filter() {
        let err = catalog().default_config(filter("Art", "All")).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NoQuestions { ref subject, .. } if subject.name() == Some("Art")
        ));
    }

    #[test]
    fn reading_list_titles() {
        let catalog = catalog();
        assert_eq!(
            catalog.reading_list(&filter("Math", "Calculus")).title,
            "Calculus (Spivak)"
        );
        assert_eq!(catalog.reading_list(&filter("Math", "All")).title, "Math");
        assert_eq!(
            catalog.reading_list(&filter("All", "All")).title,
            "Reading Material"
        );
        assert_eq!(
            catalog.reading_list(&filter("Math", "Linear Algebra")).questions.len(),
            2
        );
    }

    #[test]
    fn books_come_from_linked_topics() {
        let books = catalog().books();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].topic, "Calculus");
    }
}

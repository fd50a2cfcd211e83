use exam_core::model::{Question, QuestionBank, QuestionId, Subject, Topic};
use serde::{Deserialize, Serialize};

/// On-disk shape of the question bank file.
///
/// Field names follow the content files (`question`, `bookLink`) rather than
/// the domain names, so mapping lives here and the domain stays format-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankRecord {
    pub syllabus: Vec<SubjectRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub subject: String,
    #[serde(default)]
    pub topics: Vec<TopicRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecord {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub book_link: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u64,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
}

impl BankRecord {
    #[must_use]
    pub fn from_bank(bank: &QuestionBank) -> Self {
        Self {
            syllabus: bank.subjects().iter().map(SubjectRecord::from_subject).collect(),
        }
    }

    #[must_use]
    pub fn into_bank(self) -> QuestionBank {
        QuestionBank::new(
            self.syllabus
                .into_iter()
                .map(SubjectRecord::into_subject)
                .collect(),
        )
    }
}

impl SubjectRecord {
    #[must_use]
    pub fn from_subject(subject: &Subject) -> Self {
        Self {
            subject: subject.name().to_owned(),
            topics: subject.topics().iter().map(TopicRecord::from_topic).collect(),
        }
    }

    #[must_use]
    pub fn into_subject(self) -> Subject {
        Subject::new(
            self.subject,
            self.topics.into_iter().map(TopicRecord::into_topic).collect(),
        )
    }
}

impl TopicRecord {
    #[must_use]
    pub fn from_topic(topic: &Topic) -> Self {
        Self {
            name: topic.name().to_owned(),
            author: topic.author().to_owned(),
            book_link: topic.book_link().map(str::to_owned),
            questions: topic
                .questions()
                .iter()
                .map(QuestionRecord::from_question)
                .collect(),
        }
    }

    #[must_use]
    pub fn into_topic(self) -> Topic {
        Topic::new(
            self.name,
            self.author,
            self.book_link,
            self.questions
                .into_iter()
                .map(QuestionRecord::into_question)
                .collect(),
        )
    }
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().value(),
            question: question.prompt().to_owned(),
            options: question.options().to_vec(),
            answer: question.answer().to_owned(),
        }
    }

    #[must_use]
    pub fn into_question(self) -> Question {
        Question::new(
            QuestionId::new(self.id),
            self.question,
            self.options,
            self.answer,
        )
    }
}

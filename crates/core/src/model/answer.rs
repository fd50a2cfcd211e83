use serde::{Deserialize, Serialize};

/// Per-question answers for one attempt.
///
/// The length is fixed at construction and matches the question list.
/// `None` marks a question the user has not answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    slots: Vec<Option<String>>,
}

impl AnswerSheet {
    /// An all-unanswered sheet for `len` questions.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Record `option` for the question at `index`.
    ///
    /// Out-of-range indices are ignored so the sheet never grows.
    pub fn set(&mut self, index: usize, option: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(option.into());
        }
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn any_answered(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.slots.iter().map(|slot| slot.as_deref())
    }
}

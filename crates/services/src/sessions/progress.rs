/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    /// One-based position of the current question.
    pub position: usize,
    /// How far through the question list the cursor is, 0..=100.
    pub percent_through: u32,
    pub is_submitted: bool,
}

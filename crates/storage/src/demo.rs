//! Small built-in question bank used by `exam seed` and by tests.

use exam_core::model::{Question, QuestionBank, QuestionId, Subject, Topic};

fn mcq(id: u64, prompt: &str, options: &[&str], answer: &str) -> Question {
    Question::new(
        QuestionId::new(id),
        prompt,
        options.iter().map(|o| (*o).to_owned()).collect(),
        answer,
    )
}

/// Demo bank with three subjects, one topic without questions and two
/// topics carrying reference books.
#[must_use]
pub fn demo_bank() -> QuestionBank {
    QuestionBank::new(vec![
        Subject::new(
            "Mathematics",
            vec![
                Topic::new(
                    "Algebra",
                    "Israel Gelfand",
                    None,
                    vec![
                        mcq(1, "Solve for x: 2x + 3 = 7", &["1", "2", "3", "4"], "2"),
                        mcq(2, "What is (a + b)^2?", &["a^2 + b^2", "a^2 + 2ab + b^2", "2a + 2b"], "a^2 + 2ab + b^2"),
                        mcq(3, "Roots of x^2 - 9 = 0?", &["±3", "3", "9", "±9"], "±3"),
                    ],
                ),
                Topic::new(
                    "Geometry",
                    "Euclid",
                    Some("https://example.org/books/elements.pdf".into()),
                    vec![
                        mcq(4, "Sum of interior angles of a triangle?", &["90°", "180°", "270°", "360°"], "180°"),
                        mcq(5, "A polygon with five sides is a…", &["Hexagon", "Pentagon", "Octagon"], "Pentagon"),
                    ],
                ),
            ],
        ),
        Subject::new(
            "Physics",
            vec![
                Topic::new(
                    "Mechanics",
                    "Isaac Newton",
                    Some("https://example.org/books/principia.pdf".into()),
                    vec![
                        mcq(1, "SI unit of force?", &["Joule", "Newton", "Watt", "Pascal"], "Newton"),
                        mcq(2, "F = m × ?", &["v", "a", "t", "s"], "a"),
                    ],
                ),
                Topic::new(
                    "Optics",
                    "Christiaan Huygens",
                    None,
                    vec![mcq(3, "Speed of light in vacuum is roughly…", &["3×10^8 m/s", "3×10^6 m/s", "340 m/s"], "3×10^8 m/s")],
                ),
            ],
        ),
        Subject::new(
            "Computer Science",
            vec![
                Topic::new(
                    "Data Structures",
                    "Niklaus Wirth",
                    None,
                    vec![
                        mcq(1, "Which structure is FIFO?", &["Stack", "Queue", "Tree"], "Queue"),
                        mcq(2, "Binary search requires the input to be…", &["Sorted", "Hashed", "Linked"], "Sorted"),
                    ],
                ),
                Topic::new("Compilers", "Alfred Aho", None, Vec::new()),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_bank_is_well_formed() {
        let bank = demo_bank();
        assert_eq!(bank.validate(), Ok(()));
        assert_eq!(bank.books().len(), 2);
    }
}

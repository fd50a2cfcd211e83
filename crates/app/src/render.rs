//! Plain-text rendering of catalog listings, the test screen and results.

use std::fmt::Write as _;

use comfy_table::{Cell, Table};
use exam_core::model::{Book, Question, Verdict};
use services::{ReadingList, ResultReport, SessionSnapshot, TopicSummary};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const TEST_HELP: &str =
    "[1-9] pick option   n/p next/previous   g <n> go to question   s submit   q quit";

pub fn topics_table(topics: &[TopicSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "Topic", "Author", "Questions", "Summary"]);
    for topic in topics {
        table.add_row(vec![
            Cell::new(&topic.subject),
            Cell::new(&topic.name),
            Cell::new(&topic.author),
            Cell::new(topic.question_count),
            Cell::new(format!("summary/{}", topic.slug)),
        ]);
    }
    table
}

pub fn books_table(books: &[Book]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "Topic", "Author", "Link"]);
    for book in books {
        table.add_row(vec![
            Cell::new(&book.subject),
            Cell::new(&book.topic),
            Cell::new(&book.author),
            Cell::new(&book.link),
        ]);
    }
    table
}

pub fn reading_list(list: &ReadingList, show_answers: bool) -> String {
    let mut out = format!("{}\n", list.title);
    if list.questions.is_empty() {
        out.push_str("\nNo questions available.\n");
        return out;
    }
    for (index, question) in list.questions.iter().enumerate() {
        out.push('\n');
        write_question(&mut out, index, question, |option| {
            if show_answers && question.is_correct(option) {
                "*"
            } else {
                " "
            }
        });
    }
    out
}

/// Full test screen for one snapshot, cleared and redrawn each time.
pub fn test_screen(snapshot: &SessionSnapshot) -> String {
    let mut out = String::from(CLEAR_SCREEN);
    let _ = writeln!(out, "{}", snapshot.heading);
    let _ = writeln!(
        out,
        "Time left {}   Answered {}/{}",
        snapshot.countdown, snapshot.progress.answered, snapshot.total
    );
    let _ = writeln!(out, "{}\n", navigator_line(snapshot));

    let selected = snapshot.selected.as_deref();
    write_question(&mut out, snapshot.current_index, &snapshot.question, |option| {
        if selected == Some(option) { ">" } else { " " }
    });

    out.push('\n');
    out.push_str(TEST_HELP);
    if !snapshot.can_submit {
        out.push_str("   (answer a question to enable submit)");
    }
    out.push('\n');
    out
}

/// Question numbers; the current one in brackets, answered ones starred.
pub fn navigator_line(snapshot: &SessionSnapshot) -> String {
    snapshot
        .navigator
        .iter()
        .map(|cell| {
            let number = cell.index + 1;
            let star = if cell.answered { "*" } else { "" };
            if cell.current {
                format!("[{number}{star}]")
            } else {
                format!("{number}{star}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn report(report: &ResultReport) -> String {
    let mut out = format!("{}\n", report.heading);
    if report.submit_reason == services::SubmitReason::Forced {
        out.push_str("Time is up. Your answers were submitted automatically.\n");
    }

    let mut table = Table::new();
    table.set_header(vec!["Correct", "Incorrect", "Unattempted", "Score"]);
    table.add_row(vec![
        Cell::new(report.score.correct),
        Cell::new(report.score.incorrect),
        Cell::new(report.score.unattempted),
        Cell::new(format!("{}%", report.percentage)),
    ]);
    let _ = writeln!(out, "{table}");

    for item in &report.items {
        out.push('\n');
        let _ = writeln!(
            out,
            "{}. {} [{}]",
            item.index + 1,
            item.question.prompt(),
            item.verdict.label()
        );
        for mark in item.option_marks() {
            let tag = if mark.is_answer {
                "+"
            } else if mark.is_wrong_pick {
                "x"
            } else {
                " "
            };
            let _ = writeln!(out, "   {tag} {}", mark.text);
        }
        if item.verdict == Verdict::Unattempted {
            out.push_str("   (not answered)\n");
        }
    }
    out
}

fn write_question<'q>(
    out: &mut String,
    index: usize,
    question: &'q Question,
    marker: impl Fn(&'q str) -> &'static str,
) {
    let _ = writeln!(out, "{}. {}", index + 1, question.prompt());
    for (number, option) in question.options().iter().enumerate() {
        let _ = writeln!(out, " {} {}) {}", marker(option), number + 1, option);
    }
}

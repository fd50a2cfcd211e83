//! Keyboard commands accepted during an interactive test.

use services::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestInput {
    /// Zero-based option index.
    Pick(usize),
    Move(Direction),
    /// Zero-based question index.
    Jump(usize),
    Submit,
    Quit,
}

/// Parse one input line. Numbers typed by the user are one-based.
pub fn parse(line: &str) -> Option<TestInput> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let head = parts.next()?;

    let input = match head.to_ascii_lowercase().as_str() {
        "n" | "next" => TestInput::Move(Direction::Next),
        "p" | "prev" | "previous" => TestInput::Move(Direction::Previous),
        "s" | "submit" => TestInput::Submit,
        "q" | "quit" => TestInput::Quit,
        "g" | "go" => TestInput::Jump(one_based(parts.next()?)?),
        other => TestInput::Pick(one_based(other)?),
    };

    parts.next().is_none().then_some(input)
}

fn one_based(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse("2"), Some(TestInput::Pick(1)));
        assert_eq!(parse(" n "), Some(TestInput::Move(Direction::Next)));
        assert_eq!(parse("P"), Some(TestInput::Move(Direction::Previous)));
        assert_eq!(parse("g 4"), Some(TestInput::Jump(3)));
        assert_eq!(parse("s"), Some(TestInput::Submit));
        assert_eq!(parse("quit"), Some(TestInput::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("0"), None);
        assert_eq!(parse("g"), None);
        assert_eq!(parse("g x"), None);
        assert_eq!(parse("n 2"), None);
        assert_eq!(parse("hello"), None);
    }
}

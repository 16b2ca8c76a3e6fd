//! Inline `**emphasis**` markup.
//!
//! Text is split on the literal `**` delimiter and fragments alternate
//! plain / emphasized, starting with plain. An odd number of delimiters
//! leaves the trailing fragment emphasized to the end of the string; that
//! behaviour is kept as is.

/// Emphasis delimiter.
pub const DELIMITER: &str = "**";

/// One fragment of a split text payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextRun {
    Plain(String),
    Emphasis(String),
}

impl TextRun {
    pub fn text(&self) -> &str {
        match self {
            TextRun::Plain(s) | TextRun::Emphasis(s) => s,
        }
    }

    pub fn is_emphasis(&self) -> bool {
        matches!(self, TextRun::Emphasis(_))
    }
}

/// Split `text` into alternating runs.
///
/// Every fragment is kept, empty ones included, so [`join`] restores the
/// input exactly.
pub fn split(text: &str) -> Vec<TextRun> {
    text.split(DELIMITER)
        .enumerate()
        .map(|(i, part)| {
            if i % 2 == 1 {
                TextRun::Emphasis(part.to_string())
            } else {
                TextRun::Plain(part.to_string())
            }
        })
        .collect()
}

/// Rejoin runs with the delimiter.
pub fn join(runs: &[TextRun]) -> String {
    runs.iter()
        .map(TextRun::text)
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_starting_plain() {
        assert_eq!(
            split("B **C** D"),
            vec![
                TextRun::Plain("B ".to_string()),
                TextRun::Emphasis("C".to_string()),
                TextRun::Plain(" D".to_string()),
            ]
        );
    }

    #[test]
    fn no_markup_is_one_plain_run() {
        assert_eq!(split("plain"), vec![TextRun::Plain("plain".to_string())]);
        assert_eq!(split(""), vec![TextRun::Plain(String::new())]);
    }

    #[test]
    fn unbalanced_markup_emphasizes_to_end() {
        let runs = split("a **b c");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1], TextRun::Emphasis("b c".to_string()));
    }

    #[test]
    fn leading_delimiter_keeps_empty_plain() {
        let runs = split("**bold** tail");
        assert_eq!(runs[0], TextRun::Plain(String::new()));
        assert!(runs[1].is_emphasis());
        assert_eq!(join(&runs), "**bold** tail");
    }
}

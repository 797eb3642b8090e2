use regex::Regex;
use std::sync::OnceLock;

/// Classification of a single source line containing only local facts.
///
/// Each line is classified independently; whether a list block is open is
/// the transformer's concern, not the classifier's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `#`-run, one space, then the heading text (possibly empty).
    Heading { level: usize, text: &'a str },
    /// `- ` followed by the item text (possibly empty).
    ListItem { text: &'a str },
    /// Anything else with at least one non-whitespace character.
    /// Trailing whitespace is already stripped.
    Text { content: &'a str },
    /// Empty or whitespace-only line.
    Blank,
}

/// Classifies individual lines for the transformation pass.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// A single trailing `\n` or `\r\n` terminator is ignored. Any other
    /// trailing whitespace stays part of heading and item text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = strip_terminator(line);

        if let Some(caps) = heading_regex().captures(line) {
            let (_, [hashes, text]) = caps.extract();
            return LineClass::Heading {
                level: hashes.len(),
                text,
            };
        }

        if let Some(caps) = list_item_regex().captures(line) {
            let (_, [text]) = caps.extract();
            return LineClass::ListItem { text };
        }

        if line.trim().is_empty() {
            LineClass::Blank
        } else {
            LineClass::Text {
                content: line.trim_end(),
            }
        }
    }
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| Regex::new(r"^(#+) (.*)$").expect("Invalid heading regex"))
}

fn list_item_regex() -> &'static Regex {
    static LIST_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    LIST_ITEM_REGEX.get_or_init(|| Regex::new(r"^- (.*)$").expect("Invalid list item regex"))
}

fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

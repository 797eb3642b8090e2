//! Line-by-line Markdown subset to HTML transformation.
//!
//! Only ATX-style headings (`# Title`) and flat unordered list items
//! (`- item`) are recognised. Everything else is copied through with
//! trailing whitespace removed, and blank lines are dropped. No tree is
//! built: each source line maps directly to zero or more output lines.
//!
//! ```
//! use markdown2html_engine::markdown_to_html;
//!
//! let html = markdown_to_html("# Title\n- one\n- two\n");
//! assert_eq!(html, "<h1>Title</h1>\n<ul>\n    <li>one</li>\n    <li>two</li>\n</ul>");
//! ```

pub mod classify;

pub use classify::{LineClass, LineClassifier};

use regex::Regex;
use std::sync::OnceLock;

pub const LIST_OPEN: &str = "<ul>";
pub const LIST_CLOSE: &str = "</ul>";
pub const DEFAULT_LIST_INDENT: usize = 4;

/// Knobs for output formatting. The defaults produce the canonical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Spaces placed before each `<li>` inside a list block.
    pub list_indent: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            list_indent: DEFAULT_LIST_INDENT,
        }
    }
}

/// Single-pass transformer. Feed lines with [`push`](Self::push) and
/// collect the output with [`finish`](Self::finish).
///
/// The only scan state is whether a `<ul>` block is currently open. It
/// lives in this value, so separate transformers never interfere.
///
/// A non-heading, non-item line that ends a list block only closes the
/// block; its own content is not emitted. Blank lines close a block the
/// same way. This keeps output compatible with existing converted files.
pub struct LineTransformer {
    item_indent: String,
    in_list_block: bool,
    out: Vec<String>,
}

impl LineTransformer {
    pub fn new() -> Self {
        Self::with_options(TransformOptions::default())
    }

    pub fn with_options(options: TransformOptions) -> Self {
        Self {
            item_indent: " ".repeat(options.list_indent),
            in_list_block: false,
            out: vec![],
        }
    }

    pub fn in_list_block(&self) -> bool {
        self.in_list_block
    }

    pub fn push(&mut self, line: &str) {
        let class = LineClassifier.classify(line);
        log::trace!("classified {line:?} as {class:?}");

        match class {
            LineClass::Heading { level, text } => {
                self.close_list();
                self.out.push(format!("<h{level}>{text}</h{level}>"));
            }
            LineClass::ListItem { text } => {
                self.open_list();
                self.out.push(format!("{}<li>{text}</li>", self.item_indent));
            }
            LineClass::Text { content } => {
                if self.in_list_block {
                    self.close_list();
                } else {
                    self.out.push(content.to_string());
                }
            }
            LineClass::Blank => self.close_list(),
        }
    }

    /// Closes any list block still open and returns the output lines.
    pub fn finish(mut self) -> Vec<String> {
        self.close_list();
        self.out
    }

    fn open_list(&mut self) {
        if !self.in_list_block {
            log::debug!("opening list block at output line {}", self.out.len());
            self.out.push(LIST_OPEN.to_string());
            self.in_list_block = true;
        }
    }

    fn close_list(&mut self) {
        if self.in_list_block {
            log::debug!("closing list block at output line {}", self.out.len());
            self.out.push(LIST_CLOSE.to_string());
            self.in_list_block = false;
        }
    }
}

impl Default for LineTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Transform an ordered sequence of lines with default options.
pub fn transform_lines<I>(lines: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    transform_lines_with(lines, &TransformOptions::default())
}

pub fn transform_lines_with<I>(lines: I, options: &TransformOptions) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut transformer = LineTransformer::with_options(options.clone());
    for line in lines {
        transformer.push(line.as_ref());
    }
    transformer.finish()
}

/// Split a document into lines on `\r\n`, `\n` or a lone `\r`.
///
/// A final terminator does not start an extra empty line.
pub fn source_lines(source: &str) -> Vec<&str> {
    static LINE_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();
    let line_break = LINE_BREAK_REGEX
        .get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("Invalid line break regex"));

    let mut lines: Vec<&str> = line_break.split(source).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Convert a whole document. Output lines are joined with `\n` and carry
/// no trailing newline.
pub fn markdown_to_html(source: &str) -> String {
    markdown_to_html_with(source, &TransformOptions::default())
}

pub fn markdown_to_html_with(source: &str, options: &TransformOptions) -> String {
    let lines = transform_lines_with(source_lines(source), options);
    log::debug!("emitted {} output lines", lines.len());
    lines.join("\n")
}

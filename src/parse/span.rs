//! Source locations within a single input line.

use serde::Serialize;

/// A byte range in the input line.
///
/// `start` is inclusive, `end` exclusive. Offsets always fall on UTF-8
/// character boundaries because the tokenizer only produces them from
/// `char_indices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text, or `""` when the span does not fit `line`.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.start..self.end).unwrap_or("")
    }
}

/// Render the part of `line` around `span` with carets underneath.
///
/// ```text
/// status && && push
///           ^^
/// ```
pub fn context_snippet(line: &str, span: Span, context_chars: usize) -> String {
    let span_start = span.start.min(line.len());
    let span_end = span.end.clamp(span_start, line.len());

    let start = line[..span_start]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(span_start);

    let end = line[span_end..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| span_end + i + c.len_utf8())
        .unwrap_or(line.len());

    let caret_pos = line[start..span_start].chars().count();
    let caret_len = line[span_start..span_end].chars().count().max(1);

    format!(
        "{}\n{}{}",
        &line[start..end],
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

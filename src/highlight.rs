//! Classifies every character of a line for syntax highlighting.
//!
//! The output is a list of styled segments that concatenate back to the
//! input line; mapping styles to terminal colors is left to the caller.

use std::fmt;

use crate::catalog::CommandCatalog;
use crate::parse::{tokenize, Cursor, Zipper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Action,
    PartialAction,
    /// The opening quote of a string that never closed.
    UnterminatedQuote,
    UnterminatedString,
    ValidCommand,
    InvalidCommand,
    QuotedArgument,
    Argument,
    Whitespace,
    /// Comments and anything else after the last token.
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub style: Style,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Highlighted<'a> {
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    fn push(&mut self, style: Style, text: &'a str) {
        if !text.is_empty() {
            self.segments.push(Segment { style, text });
        }
    }

    /// Leading whitespace stays whitespace; the rest is trailing content.
    fn push_trailing(&mut self, text: &'a str) {
        let rest = text.trim_start();
        self.push(Style::Whitespace, &text[..text.len() - rest.len()]);
        self.push(Style::Trailing, rest);
    }
}

impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text)?;
        }
        Ok(())
    }
}

/// Style every token of `line`, preserving the gaps between them.
pub fn highlight<'a>(line: &'a str, catalog: &CommandCatalog) -> Highlighted<'a> {
    let tokens = tokenize(line);
    let zipper = Zipper::new(line, &tokens, catalog);
    let mut highlighted = Highlighted::default();

    if zipper.is_empty() {
        highlighted.push_trailing(line);
        return highlighted;
    }

    highlighted.push(Style::Whitespace, &line[..zipper.leading_gap().len()]);
    for cursor in zipper.iter() {
        highlight_token(line, &cursor, &mut highlighted);
        highlighted.push(Style::Whitespace, cursor_gap(line, &cursor));
    }
    highlighted.push_trailing(&line[line.len() - zipper.trailing().len()..]);
    highlighted
}

/// The gap as a slice of `line` rather than of the zipper's borrow.
fn cursor_gap<'a>(line: &'a str, cursor: &Cursor) -> &'a str {
    let end = cursor.token().span.end;
    line.get(end..end + cursor.gap_text().len()).unwrap_or("")
}

fn highlight_token<'a>(line: &'a str, cursor: &Cursor, out: &mut Highlighted<'a>) {
    let token = cursor.token();
    let raw = token.span.slice(line);

    let style = if cursor.is_action() {
        Style::Action
    } else if cursor.is_partial_action_token() {
        Style::PartialAction
    } else if cursor.is_unterminated_string_token() {
        // Flag the quote that never closed, when the word starts with it
        if let Some(q) = token.quote.as_char()
            && token.start_char() == Some(q)
        {
            let (open, rest) = raw.split_at(q.len_utf8());
            out.push(Style::UnterminatedQuote, open);
            out.push(Style::UnterminatedString, rest);
            return;
        }
        Style::UnterminatedString
    } else if cursor.is_command() {
        if cursor.is_valid_command() {
            Style::ValidCommand
        } else {
            Style::InvalidCommand
        }
    } else if token.is_quoted() {
        Style::QuotedArgument
    } else {
        Style::Argument
    };
    out.push(style, raw);
}

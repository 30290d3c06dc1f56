//! The classified lexical unit shared by the parser and the zipper.

use serde::Serialize;

use super::span::Span;
use super::types::Operator;

/// What a token is, as decided by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A complete control operator.
    Action(Operator),
    /// A lone `&` or `|`: the start of an operator spelling that never
    /// completed. Not a valid operator.
    PartialAction,
    /// A command name, option, or positional argument.
    Word,
}

/// The quoting style that opened first inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Quote {
    #[default]
    None,
    Single,
    Double,
}

impl Quote {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Quote::None => None,
            Quote::Single => Some('\''),
            Quote::Double => Some('"'),
        }
    }
}

/// An immutable token.
///
/// `content` is the semantic value (dequoted, unescaped); `raw_content` is
/// exactly `span.slice(line)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    pub raw_content: String,
    pub quote: Quote,
    /// False when a quote was still open at end of line.
    pub terminated: bool,
    pub span: Span,
}

impl Token {
    pub fn is_action(&self) -> bool {
        matches!(self.kind, TokenKind::Action(_))
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Action(op) => Some(op),
            _ => None,
        }
    }

    pub fn is_partial_action(&self) -> bool {
        self.kind == TokenKind::PartialAction
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_quoted(&self) -> bool {
        self.quote != Quote::None
    }

    pub fn is_unterminated(&self) -> bool {
        self.is_word() && !self.terminated
    }

    /// The first character of the raw text.
    pub fn start_char(&self) -> Option<char> {
        self.raw_content.chars().next()
    }
}

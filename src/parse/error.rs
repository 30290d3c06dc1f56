//! Classified parse failures.

use thiserror::Error;

use super::span::{context_snippet, Span};
use super::token::Quote;
use super::types::Operator;

/// A malformed lexeme.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A quote was still open at end of line.
    #[error("unterminated {} string starting at position {}", quote_name(.quote), .span.start)]
    UnterminatedString { quote: Quote, span: Span },
}

fn quote_name(quote: &Quote) -> &'static str {
    match quote {
        Quote::Single => "single-quoted",
        Quote::Double => "double-quoted",
        Quote::None => "quoted",
    }
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnterminatedString { span, .. } => *span,
        }
    }
}

/// Why a line could not be turned into statements.
///
/// [`ParseError::Syntax`] wraps a defect in a single token; every other
/// variant is a structural defect in how valid tokens are arranged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// An operator where a command was expected (start of line, or right
    /// after another operator).
    #[error("expected a command before `{operator}` at position {}", .span.start)]
    MissingCommand { operator: Operator, span: Span },

    /// The line ends with an operator.
    #[error("expected a command after `{operator}` at end of line")]
    DanglingOperator { operator: Operator, span: Span },

    /// A lone `&` or `|`.
    #[error("unrecognized operator `{raw}` at position {}", .span.start)]
    UnrecognizedOperator { raw: String, span: Span },
}

impl ParseError {
    /// True when the malformed lexeme itself is the defect.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Syntax(e) => e.span(),
            ParseError::MissingCommand { span, .. }
            | ParseError::DanglingOperator { span, .. }
            | ParseError::UnrecognizedOperator { span, .. } => *span,
        }
    }

    /// The part of `line` around the error with carets underneath.
    pub fn context(&self, line: &str, context_chars: usize) -> String {
        context_snippet(line, self.span(), context_chars)
    }
}

//! Types produced by the parser and consumed by the executor.

use std::fmt;

use serde::Serialize;

use super::token::Token;

/// Control operator joining two statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    /// `&&`: run next only if previous succeeded
    And,
    /// `||`: run next only if previous failed
    Or,
    /// `;`: run next unconditionally
    Sequence,
}

impl Operator {
    /// The operator's shell syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Sequence => ";",
        }
    }

    /// Whether a statement following this operator runs, given the
    /// success of the statement before it.
    pub fn gates_open(&self, previous_ok: bool) -> bool {
        match self {
            Operator::And => previous_ok,
            Operator::Or => !previous_ok,
            Operator::Sequence => true,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One command with its arguments, plus the operator gating the next one.
///
/// `command` and `arguments` are always [`TokenKind::Word`](super::TokenKind::Word)
/// tokens; the parser never builds a statement without a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub command: Token,
    pub arguments: Vec<Token>,
    pub next_operator: Option<Operator>,
}

impl Statement {
    /// The command name after dequoting.
    pub fn name(&self) -> &str {
        &self.command.content
    }

    /// Dequoted argument values, in their original order.
    pub fn args(&self) -> Vec<String> {
        self.arguments.iter().map(|t| t.content.clone()).collect()
    }
}

impl fmt::Display for Statement {
    /// Render the statement as a re-parseable line, quoting where needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(&self.command).chain(&self.arguments);
        for (i, word) in words.enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match shlex::try_quote(&word.content) {
                Ok(quoted) => f.write_str(&quoted)?,
                Err(_) => f.write_str(&word.raw_content)?,
            }
        }
        if let Some(op) = self.next_operator {
            write!(f, " {op}")?;
        }
        Ok(())
    }
}

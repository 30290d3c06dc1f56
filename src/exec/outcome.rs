use crate::parse::ParseError;

/// Exit status reported for a line that was rejected before running.
pub const REJECTED_STATUS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    CompletedOk,
    CompletedWithFailure,
    /// A malformed lexeme (unterminated string); nothing ran.
    SyntaxRejected,
    /// Valid tokens in an invalid arrangement; nothing ran.
    ParseRejected,
    /// A built-in asked the shell to exit.
    ExitRequested,
}

impl OutcomeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::CompletedOk => "ok",
            OutcomeKind::CompletedWithFailure => "failed",
            OutcomeKind::SyntaxRejected => "syntax-rejected",
            OutcomeKind::ParseRejected => "parse-rejected",
            OutcomeKind::ExitRequested => "exit",
        }
    }
}

/// How one input line ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Status of the last statement that ran.
    pub exit_code: i32,
    /// Set for rejected lines.
    pub error: Option<ParseError>,
}

impl Outcome {
    pub fn completed(exit_code: i32) -> Self {
        let kind = if exit_code == 0 {
            OutcomeKind::CompletedOk
        } else {
            OutcomeKind::CompletedWithFailure
        };
        Self {
            kind,
            exit_code,
            error: None,
        }
    }

    pub fn exit_requested(exit_code: i32) -> Self {
        Self {
            kind: OutcomeKind::ExitRequested,
            exit_code,
            error: None,
        }
    }

    pub fn rejected(error: ParseError) -> Self {
        let kind = if error.is_syntax() {
            OutcomeKind::SyntaxRejected
        } else {
            OutcomeKind::ParseRejected
        };
        Self {
            kind,
            exit_code: REJECTED_STATUS,
            error: Some(error),
        }
    }

    pub fn is_exit(&self) -> bool {
        self.kind == OutcomeKind::ExitRequested
    }

    pub fn is_rejected(&self) -> bool {
        matches!(
            self.kind,
            OutcomeKind::SyntaxRejected | OutcomeKind::ParseRejected
        )
    }
}

//! Runs parsed statements with `&&`/`||`/`;` short-circuiting.
//!
//! Each statement resolves to a built-in or to git. Statements run one at a
//! time, left to right; a statement's status is known before the operator
//! after it decides whether the next one runs.

pub mod outcome;

pub use outcome::{Outcome, OutcomeKind, REJECTED_STATUS};

use std::io::Write;

use crate::catalog::CommandCatalog;
use crate::commands::{CommandContext, Commander, Control, Resolved};
use crate::git::GitBackend;
use crate::logging;
use crate::parse::{self, Operator, Statement};

/// Status reported when git itself could not be started.
pub const SPAWN_FAILED_STATUS: i32 = 127;

/// Dispatches statements to built-ins or git.
pub struct Executor<'a> {
    catalog: &'a CommandCatalog,
    commander: &'a Commander,
    git: &'a dyn GitBackend,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl<'a> Executor<'a> {
    pub fn new(
        catalog: &'a CommandCatalog,
        commander: &'a Commander,
        git: &'a dyn GitBackend,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Self {
        Self {
            catalog,
            commander,
            git,
            out,
            err,
        }
    }

    /// Tokenize, parse, and execute one line.
    ///
    /// A line that fails to parse runs nothing and reports
    /// [`OutcomeKind::SyntaxRejected`] or [`OutcomeKind::ParseRejected`].
    pub fn run_line(&mut self, line: &str) -> Outcome {
        let tokens = parse::tokenize(line);
        let outcome = match parse::parse(&tokens) {
            Ok(statements) => self.execute(&statements),
            Err(e) => Outcome::rejected(e),
        };
        logging::log_outcome(line, &outcome);
        outcome
    }

    /// Execute statements in order, honoring the operator between each pair.
    pub fn execute(&mut self, statements: &[Statement]) -> Outcome {
        let mut exit_code = 0;
        let mut previous_ok = true;
        let mut gate: Option<Operator> = None;

        for statement in statements {
            // Skipped statements leave `previous_ok` untouched
            if let Some(op) = gate
                && !op.gates_open(previous_ok)
            {
                log::debug!("skipped: {statement}");
                gate = statement.next_operator;
                continue;
            }
            gate = statement.next_operator;

            log::debug!("running: {statement}");
            match self.run_statement(statement) {
                Control::Status(code) => {
                    exit_code = code;
                    previous_ok = code == 0;
                }
                Control::Exit => return Outcome::exit_requested(exit_code),
            }
        }

        Outcome::completed(exit_code)
    }

    fn run_statement(&mut self, statement: &Statement) -> Control {
        let args = statement.args();
        match self.commander.from_name(statement.name()) {
            Resolved::Internal(command) => {
                let mut ctx = CommandContext {
                    args: &args,
                    catalog: self.catalog,
                    commander: self.commander,
                    out: &mut *self.out,
                    err: &mut *self.err,
                };
                command.run(&mut ctx)
            }
            Resolved::Git => {
                let mut git_args = Vec::with_capacity(args.len() + 1);
                git_args.push(statement.name().to_string());
                git_args.extend(args);
                match self.git.run(&git_args) {
                    Ok(code) => Control::Status(code),
                    Err(e) => {
                        log::error!("failed to run git {}: {e}", statement.name());
                        let _ = writeln!(self.err, "gitsh: failed to run git: {e}");
                        Control::Status(SPAWN_FAILED_STATUS)
                    }
                }
            }
        }
    }
}

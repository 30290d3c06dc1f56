use std::io::Write;

use crate::catalog::CommandCatalog;

use super::{Commander, InternalCommand};

/// Context for running a single built-in.
pub struct CommandContext<'a> {
    /// Dequoted arguments after the command name.
    pub args: &'a [String],
    pub catalog: &'a CommandCatalog,
    pub commander: &'a Commander,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
    /// Check if any argument matches a flag.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Arguments that are not among the command's declared options.
    pub fn unknown_args(&self, command: &dyn InternalCommand) -> Vec<&'a str> {
        let args: &'a [String] = self.args;
        args.iter()
            .map(String::as_str)
            .filter(|a| !command.options().iter().any(|o| o.name == *a))
            .collect()
    }

    /// Report bad arguments and the command's usage on stderr.
    pub fn usage_error(&mut self, command: &dyn InternalCommand, unknown: &[&str]) {
        let _ = writeln!(
            self.err,
            "{}: unexpected argument(s): {}\n{}",
            command.name(),
            unknown.join(" "),
            command.usage()
        );
    }
}

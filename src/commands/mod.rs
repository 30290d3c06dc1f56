//! Built-in commands: the shell's own commands, prefixed with `:`.
//!
//! Every name that is not a built-in resolves to git. Each built-in has
//! its own `InternalCommand` implementation registered in the
//! [`Commander`].

pub mod context;
/// `:exit`: leave the shell.
pub mod exit;
/// `:help`: list built-ins and optionally git commands.
pub mod help;

use std::collections::HashMap;

pub use context::CommandContext;

/// A long option a built-in accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOption {
    pub name: &'static str,
    pub description: &'static str,
}

/// What a built-in asks the executor to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Finished with an exit status.
    Status(i32),
    /// Stop processing statements and leave the shell.
    Exit,
}

/// Trait for built-in commands.
pub trait InternalCommand: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn options(&self) -> &'static [CommandOption];

    /// Run with the arguments in `ctx`.
    fn run(&self, ctx: &mut CommandContext) -> Control;

    /// Option spellings offered by completion.
    fn option_prefixes(&self) -> Vec<String> {
        self.options().iter().map(|o| o.name.to_string()).collect()
    }

    fn usage(&self) -> String {
        let mut usage = format!("usage: {}", self.name());
        for option in self.options() {
            usage.push_str(&format!(" [{}]", option.name));
        }
        for option in self.options() {
            usage.push_str(&format!("\n    {:<12}{}", option.name, option.description));
        }
        usage
    }
}

/// How a command name resolves.
pub enum Resolved<'a> {
    Internal(&'a dyn InternalCommand),
    Git,
}

/// Registry of built-in commands, keyed by name.
pub struct Commander {
    commands: HashMap<&'static str, Box<dyn InternalCommand>>,
}

impl Commander {
    /// The shell's standard built-ins.
    pub fn builtin() -> Self {
        let mut commander = Self {
            commands: HashMap::new(),
        };
        commander.register(Box::new(exit::Exit));
        commander.register(Box::new(help::Help));
        commander
    }

    pub fn register(&mut self, command: Box<dyn InternalCommand>) {
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn InternalCommand> {
        self.commands.get(name).map(|b| b.as_ref())
    }

    /// Resolve a command name; anything unknown goes to git.
    pub fn from_name(&self, name: &str) -> Resolved<'_> {
        match self.get(name) {
            Some(command) => Resolved::Internal(command),
            None => Resolved::Git,
        }
    }

    /// Built-in names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Built-ins in name order.
    pub fn commands(&self) -> Vec<&dyn InternalCommand> {
        self.names()
            .into_iter()
            .filter_map(|name| self.get(name))
            .collect()
    }
}

//! gitsh: an interactive shell for git.
//!
//! A line such as `status && commit -m 'wip' ; push` is tokenized once and
//! then consumed two ways: strictly, by the parser and executor, which
//! reject malformed input and run statements with `&&`/`||`/`;`
//! short-circuiting; and leniently, through a [`parse::Zipper`], which
//! classifies every token of a half-typed line for completion and
//! highlighting without ever failing. Any command that is not a built-in
//! runs as `git <command>`.
//!
//! # Architecture
//!
//! - **[`parse`]**: Tokenizer, token model, zipper, parser, classified errors.
//! - **[`exec`]**: Executor: statement dispatch, short-circuiting, outcomes.
//! - **[`commands`]**: Built-in commands (`:exit`, `:help`) and their registry.
//! - **[`git`]**: The git process seam, command listing, help-page options.
//! - **[`catalog`]**: Known command names, built once and refreshed explicitly.
//! - **[`complete`]** / **[`highlight`]**: The zipper's consumers.
//! - **[`config`]**: Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]**: File logging to `~/.local/share/gitsh/gitsh.log`.

/// Known command names for validation and completion.
pub mod catalog;
/// Built-in command trait, registry, and implementations.
pub mod commands;
/// Tab completion for command names and long options.
pub mod complete;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Statement execution and line outcomes.
pub mod exec;
/// Git process execution and queries.
pub mod git;
/// Styled segments for syntax highlighting.
pub mod highlight;
/// File-based logging setup.
pub mod logging;
/// Tokenizer, zipper, and parser.
pub mod parse;

use std::io::Write;

use catalog::CommandCatalog;
use commands::Commander;
use complete::Completer;
use config::Config;
use exec::Executor;
use git::{GitBackend, ProcessGit};

/// Everything needed to run lines, built once per process.
pub struct Shell {
    pub config: Config,
    pub commander: Commander,
    pub catalog: CommandCatalog,
    git: Box<dyn GitBackend>,
}

impl Shell {
    /// Load user config, start logging, and query the configured git binary.
    pub fn load() -> Self {
        let config = Config::load();
        logging::init(&config);
        let git = ProcessGit::new(config.git_program());
        Self::with_backend(config, Box::new(git))
    }

    pub fn with_backend(config: Config, git: Box<dyn GitBackend>) -> Self {
        let commander = Commander::builtin();
        let catalog = CommandCatalog::load(git.as_ref(), &commander, &config);
        Self {
            config,
            commander,
            catalog,
            git,
        }
    }

    pub fn git(&self) -> &dyn GitBackend {
        self.git.as_ref()
    }

    /// Re-read git's command list.
    pub fn refresh_catalog(&mut self) {
        self.catalog.refresh(self.git.as_ref(), &self.config);
    }

    pub fn executor<'a>(
        &'a self,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Executor<'a> {
        Executor::new(&self.catalog, &self.commander, self.git.as_ref(), out, err)
    }

    pub fn completer(&self) -> Completer<'_> {
        Completer::new(&self.catalog, &self.commander, self.git.as_ref())
    }
}

//! Known command names, used to validate and complete command positions.

use std::collections::BTreeSet;

use crate::commands::Commander;
use crate::config::Config;
use crate::git::{self, GitBackend};

/// Read-only lookup of built-in and git command names.
///
/// Built once per process with [`CommandCatalog::load`]; the git list is
/// only re-queried when [`CommandCatalog::refresh`] is called.
#[derive(Debug, Clone, Default)]
pub struct CommandCatalog {
    internal: BTreeSet<String>,
    git: BTreeSet<String>,
    extra: Vec<String>,
}

impl CommandCatalog {
    pub fn new<I, G>(internal: I, git: G) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Self {
            internal: internal.into_iter().map(Into::into).collect(),
            git: git.into_iter().map(Into::into).collect(),
            extra: Vec::new(),
        }
    }

    /// Built-ins from `commander`, git commands from the git binary.
    ///
    /// Falls back to the configured command list when git cannot list its
    /// commands. Configured extra commands (aliases) are always included.
    pub fn load(git: &dyn GitBackend, commander: &Commander, config: &Config) -> Self {
        let mut catalog = Self::new(commander.names(), config.git.fallback_commands.clone());
        catalog.extra = config.git.extra_commands.clone();
        catalog.refresh(git, config);
        catalog
    }

    /// Re-query git for its command list.
    pub fn refresh(&mut self, git: &dyn GitBackend, config: &Config) {
        let listed = match git::list_commands(git) {
            Ok(commands) if !commands.is_empty() => commands,
            Ok(_) => {
                log::warn!("git listed no commands, using fallback list");
                config.git.fallback_commands.clone()
            }
            Err(e) => {
                log::warn!("could not list git commands ({e}), using fallback list");
                config.git.fallback_commands.clone()
            }
        };
        self.git = listed.into_iter().chain(self.extra.iter().cloned()).collect();
        log::debug!("catalog holds {} git commands", self.git.len());
    }

    pub fn is_internal_command(&self, name: &str) -> bool {
        self.internal.contains(name)
    }

    pub fn is_git_command(&self, name: &str) -> bool {
        self.git.contains(name)
    }

    pub fn is_command(&self, name: &str) -> bool {
        self.is_internal_command(name) || self.is_git_command(name)
    }

    pub fn internal_command_names(&self) -> impl Iterator<Item = &str> {
        self.internal.iter().map(String::as_str)
    }

    pub fn git_command_names(&self) -> impl Iterator<Item = &str> {
        self.git.iter().map(String::as_str)
    }

    /// Built-in and git names, sorted and without duplicates.
    pub fn all_command_names(&self) -> Vec<&str> {
        let all: BTreeSet<&str> = self
            .internal_command_names()
            .chain(self.git_command_names())
            .collect();
        all.into_iter().collect()
    }
}

//! The external git tool: process execution and queries derived from it.
//!
//! Everything that touches a `git` process goes through [`GitBackend`], so
//! the executor, catalog, and completer can be driven by a fake in tests.

pub mod help;

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub use help::GitHelp;

/// Status reported when a process ends without an exit code (killed by a
/// signal).
const SIGNALED_STATUS: i32 = 128;

/// Capability to run git.
pub trait GitBackend {
    /// Run git with `args`, stdio connected to the terminal, and wait for
    /// its exit status.
    fn run(&self, args: &[String]) -> io::Result<i32>;

    /// Run git with `args` and return its stdout, whatever its exit status.
    fn capture(&self, args: &[&str]) -> io::Result<String>;
}

/// Runs the real git binary.
#[derive(Debug, Clone)]
pub struct ProcessGit {
    program: PathBuf,
}

impl ProcessGit {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ProcessGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitBackend for ProcessGit {
    fn run(&self, args: &[String]) -> io::Result<i32> {
        log::debug!("spawning {} {:?}", self.program.display(), args);
        let status = Command::new(&self.program).args(args).status()?;
        Ok(status.code().unwrap_or(SIGNALED_STATUS))
    }

    fn capture(&self, args: &[&str]) -> io::Result<String> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Main porcelain and plumbing command names, without helpers.
pub fn list_commands(git: &dyn GitBackend) -> io::Result<Vec<String>> {
    let out = git.capture(&["--list-cmds=main,nohelpers"])?;
    Ok(out
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

/// Whether the working directory is inside a work tree.
pub fn is_repo(git: &dyn GitBackend) -> bool {
    git.capture(&["rev-parse", "--is-inside-work-tree"])
        .is_ok_and(|out| out.trim() == "true")
}

/// The checked-out branch (`HEAD` when detached), if any.
pub fn current_branch(git: &dyn GitBackend) -> Option<String> {
    let out = git.capture(&["rev-parse", "--abbrev-ref", "HEAD"]).ok()?;
    let branch = out.trim();
    (!branch.is_empty()).then(|| branch.to_string())
}

/// Counts of files with staged and unstaged changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Changes {
    pub staged: usize,
    pub unstaged: usize,
}

impl Changes {
    /// Count from `git status --porcelain` output: an uppercase letter in
    /// the first column is staged, in the second unstaged.
    pub fn from_porcelain(out: &str) -> Self {
        let mut changes = Changes::default();
        for line in out.lines() {
            let mut columns = line.chars();
            if columns.next().is_some_and(|c| c.is_ascii_uppercase()) {
                changes.staged += 1;
            }
            if columns.next().is_some_and(|c| c.is_ascii_uppercase()) {
                changes.unstaged += 1;
            }
        }
        changes
    }
}

pub fn uncommitted_changes(git: &dyn GitBackend) -> Changes {
    git.capture(&["status", "--porcelain"])
        .map(|out| Changes::from_porcelain(&out))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn porcelain_counts() {
        let out = "M  src/lib.rs\n M README.md\nMM Cargo.toml\n?? notes.txt\nA  new.rs\n";
        assert_eq!(
            Changes::from_porcelain(out),
            Changes {
                staged: 3,
                unstaged: 2
            }
        );
    }

    #[test]
    fn porcelain_empty() {
        assert_eq!(Changes::from_porcelain(""), Changes::default());
    }
}

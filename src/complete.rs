//! Tab completion for command names and long options.

use std::collections::HashMap;

use crate::catalog::CommandCatalog;
use crate::commands::Commander;
use crate::git::{GitBackend, GitHelp};
use crate::parse::{tokenize, Cursor, Zipper};

/// Completes the word at the end of a line.
///
/// Option lists for git commands are read from help pages once per
/// command and kept for the completer's lifetime.
pub struct Completer<'a> {
    catalog: &'a CommandCatalog,
    commander: &'a Commander,
    git: &'a dyn GitBackend,
    help_pages: HashMap<String, Option<Vec<String>>>,
}

impl<'a> Completer<'a> {
    pub fn new(
        catalog: &'a CommandCatalog,
        commander: &'a Commander,
        git: &'a dyn GitBackend,
    ) -> Self {
        Self {
            catalog,
            commander,
            git,
            help_pages: HashMap::new(),
        }
    }

    /// Candidates for the last word of `line`.
    ///
    /// `None` means there is nothing to complete here (the line ends in
    /// whitespace, the last word is a positional argument, or a short
    /// option). `Some(vec![])` means the prefix matched nothing.
    pub fn complete(&mut self, line: &str) -> Option<Vec<String>> {
        if line.ends_with(char::is_whitespace) {
            return None;
        }
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, self.catalog);
        let last = zipper.last()?;
        // Trailing comment: the cursor is not inside the last word
        if last.option_suffix().is_some() {
            return None;
        }

        if last.is_command() {
            Some(self.for_command(last))
        } else if last.is_option() {
            self.for_option(last)
        } else {
            None
        }
    }

    fn for_command(&self, last: Cursor) -> Vec<String> {
        let prefix = &last.token().raw_content;
        let names = self.catalog.all_command_names();
        matching(names.iter().copied(), prefix)
    }

    fn for_option(&mut self, last: Cursor) -> Option<Vec<String>> {
        let prefix = &last.token().raw_content;
        if !prefix.starts_with("--") {
            return None;
        }
        let owner = last.reverse_find(Cursor::is_command)?;
        let command = owner.token().content.as_str();

        let option_prefixes = if owner.is_valid_git_command() {
            self.git_option_prefixes(command)?
        } else if owner.is_valid_internal_command() {
            self.commander.get(command)?.option_prefixes()
        } else {
            return None;
        };

        Some(matching(option_prefixes.iter().map(String::as_str), prefix))
    }

    fn git_option_prefixes(&mut self, command: &str) -> Option<Vec<String>> {
        let (git, catalog) = (self.git, self.catalog);
        self.help_pages
            .entry(command.to_string())
            .or_insert_with(|| {
                GitHelp::for_command(git, catalog, command).map(|h| h.long_option_prefixes())
            })
            .clone()
    }
}

/// Names extending `prefix` (an exact match is already complete), shortest
/// first, then alphabetical.
fn matching<'n>(names: impl Iterator<Item = &'n str>, prefix: &str) -> Vec<String> {
    let mut found: Vec<String> = names
        .filter(|name| name.starts_with(prefix) && *name != prefix)
        .map(String::from)
        .collect();
    found.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    found.dedup();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;

    const DIFF_HELP: &str = "\
usage: git diff [<options>] [<commit>] [--] [<path>...]

    -s, --no-patch        suppress diff output
    --output <file>       output to a specific file
    --output-indicator-new <char>
    --output-indicator-old <char>
    --output-indicator-context <char>
    --stat[=<width>]      generate diffstat
";

    /// Serves the diff help page and counts how often it was asked.
    struct HelpGit {
        requests: Cell<usize>,
    }

    impl GitBackend for HelpGit {
        fn run(&self, _args: &[String]) -> io::Result<i32> {
            Ok(0)
        }

        fn capture(&self, args: &[&str]) -> io::Result<String> {
            self.requests.set(self.requests.get() + 1);
            match args {
                ["diff", "-h"] => Ok(DIFF_HELP.to_string()),
                _ => Ok(String::new()),
            }
        }
    }

    fn complete_all(lines: &[&str]) -> Vec<Option<Vec<String>>> {
        let catalog = CommandCatalog::new(
            [":exit", ":help"],
            ["commit", "commit-tree", "commit-graph", "diff", "restore", "add"],
        );
        let commander = Commander::builtin();
        let git = HelpGit {
            requests: Cell::new(0),
        };
        let mut completer = Completer::new(&catalog, &commander, &git);
        lines.iter().map(|l| completer.complete(l)).collect()
    }

    fn complete(line: &str) -> Option<Vec<String>> {
        complete_all(&[line]).remove(0)
    }

    #[test]
    fn commands_with_shared_prefix() {
        for line in ["comm", "add README.md && comm"] {
            assert_eq!(
                complete(line).unwrap(),
                vec!["commit", "commit-tree", "commit-graph"],
                "line: {line}"
            );
        }
    }

    #[test]
    fn exact_command_excluded() {
        for line in ["commit", "add README.md || commit"] {
            assert_eq!(
                complete(line).unwrap(),
                vec!["commit-tree", "commit-graph"],
                "line: {line}"
            );
        }
    }

    #[test]
    fn commands_no_longer_matching_excluded() {
        assert_eq!(
            complete("add README.md; commit-").unwrap(),
            vec!["commit-tree", "commit-graph"]
        );
    }

    #[test]
    fn unmatched_command_prefix_is_empty() {
        assert_eq!(complete("smile").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn builtins_complete() {
        assert_eq!(complete(":e").unwrap(), vec![":exit"]);
    }

    #[test]
    fn short_options_not_completed() {
        assert_eq!(complete("diff -s"), None);
        assert_eq!(complete("restore README.md; diff -s"), None);
    }

    #[test]
    fn long_options_from_help_page() {
        assert_eq!(
            complete("restore README.md; diff --out").unwrap(),
            vec![
                "--output",
                "--output-indicator-new",
                "--output-indicator-old",
                "--output-indicator-context",
            ]
        );
    }

    #[test]
    fn exact_option_excluded() {
        assert_eq!(
            complete("diff --output").unwrap(),
            vec![
                "--output-indicator-new",
                "--output-indicator-old",
                "--output-indicator-context",
            ]
        );
    }

    #[test]
    fn unmatched_option_prefix_is_empty() {
        assert_eq!(complete("diff --input").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn builtin_options() {
        assert_eq!(complete(":help --a").unwrap(), vec!["--all"]);
    }

    #[test]
    fn bare_double_dash_offers_every_long_option() {
        assert_eq!(
            complete("diff --").unwrap(),
            vec![
                "--stat",
                "--output",
                "--no-patch",
                "--output-indicator-new",
                "--output-indicator-old",
                "--output-indicator-context",
            ]
        );
        assert_eq!(complete(":help --").unwrap(), vec!["--all", "--help"]);
    }

    #[test]
    fn unknown_command_options_not_completed() {
        assert_eq!(complete("dance --out"), None);
    }

    #[test]
    fn no_completion_after_whitespace_or_end_of_options() {
        assert_eq!(complete("comm "), None);
        assert_eq!(complete(""), None);
        assert_eq!(complete("diff -- --out"), None);
        assert_eq!(complete("diff HEAD"), None);
    }

    #[test]
    fn help_pages_are_cached() {
        let catalog = CommandCatalog::new::<[&str; 0], _>([], ["diff"]);
        let commander = Commander::builtin();
        let git = HelpGit {
            requests: Cell::new(0),
        };
        let mut completer = Completer::new(&catalog, &commander, &git);
        completer.complete("diff --out");
        completer.complete("diff --sta");
        assert_eq!(git.requests.get(), 1);
    }
}

//! Option names scraped from `git <command> -h`.

use crate::catalog::CommandCatalog;

use super::GitBackend;

/// Options listed on a git command's short help page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GitHelp {
    options: Vec<String>,
}

impl GitHelp {
    /// Fetch and parse the help page for a known git command.
    ///
    /// Returns `None` when `command` is not a git command or git could not
    /// be run.
    pub fn for_command(
        git: &dyn GitBackend,
        catalog: &CommandCatalog,
        command: &str,
    ) -> Option<Self> {
        if !catalog.is_git_command(command) {
            return None;
        }
        match git.capture(&[command, "-h"]) {
            Ok(page) => Some(Self::parse(&page)),
            Err(e) => {
                log::warn!("could not read help for git {command}: {e}");
                None
            }
        }
    }

    /// Collect every option spelling from a help page.
    ///
    /// Option lines start with `-` after indentation; the description is
    /// separated from the spellings by a run of spaces.
    pub fn parse(page: &str) -> Self {
        let mut options = Vec::new();
        for line in page.lines() {
            let line = line.trim_start();
            if !line.starts_with('-') {
                continue;
            }
            let spellings = line.split("  ").next().unwrap_or(line);
            for part in spellings.split(", ") {
                for option in expand(part.trim()) {
                    if !options.contains(&option) {
                        options.push(option);
                    }
                }
            }
        }
        Self { options }
    }

    /// Short and long options, in page order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Long options only, suitable for completion.
    pub fn long_option_prefixes(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.starts_with("--"))
            .cloned()
            .collect()
    }
}

/// `--[no-]color[=<when>]` → `--color`, `--no-color`; `-O<file>` → `-O`.
fn expand(part: &str) -> Vec<String> {
    if let Some(rest) = part.strip_prefix("--[no-]") {
        let name = option_name(rest);
        if name.is_empty() {
            return vec![];
        }
        return vec![format!("--{name}"), format!("--no-{name}")];
    }
    if let Some(rest) = part.strip_prefix("--") {
        let name = option_name(rest);
        return if name.is_empty() {
            vec![]
        } else {
            vec![format!("--{name}")]
        };
    }
    match part.strip_prefix('-').and_then(|rest| rest.chars().next()) {
        Some(c) if c.is_ascii_alphanumeric() => vec![format!("-{c}")],
        _ => vec![],
    }
}

fn option_name(rest: &str) -> &str {
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIFF_HELP: &str = "\
usage: git diff [<options>] [<commit>] [--] [<path>...]
   or: git diff [<options>] --cached [<commit>] [--] [<path>...]

Diff output format options
    -p, --patch           generate patch
    -s, --no-patch        suppress diff output
    -u                    generate patch
    -U, --unified[=<n>]   generate diffs with <n> lines context
    --output <file>       output to a specific file
    --output-indicator-new <char>
                          specify the character to indicate a new line instead of '+'
    --output-indicator-old <char>
    --output-indicator-context <char>
    --[no-]color[=<when>] show colored diff
    -O<file>              control the order in which files appear in the output
";

    #[test]
    fn parses_short_and_long() {
        let help = GitHelp::parse(DIFF_HELP);
        assert!(help.options().contains(&"-p".to_string()));
        assert!(help.options().contains(&"-O".to_string()));
        assert!(help.options().contains(&"--unified".to_string()));
    }

    #[test]
    fn long_prefixes_only_long() {
        let help = GitHelp::parse(DIFF_HELP);
        assert_eq!(
            help.long_option_prefixes(),
            vec![
                "--patch",
                "--no-patch",
                "--unified",
                "--output",
                "--output-indicator-new",
                "--output-indicator-old",
                "--output-indicator-context",
                "--color",
                "--no-color",
            ]
        );
    }

    #[test]
    fn usage_and_description_lines_ignored() {
        let help = GitHelp::parse("usage: git thing\n\n    plain text\n");
        assert!(help.options().is_empty());
    }
}

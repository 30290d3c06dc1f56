//! Read-only, bidirectional navigation over a tokenized line.
//!
//! The zipper is the lenient view of a line: every predicate is defined for
//! every token, including malformed ones, so completion and highlighting
//! can describe input the user has not finished typing. Nothing here
//! returns an error.

use crate::catalog::CommandCatalog;

use super::token::{Quote, Token};

/// A tokenized line together with the catalog used to judge command names.
#[derive(Debug, Clone, Copy)]
pub struct Zipper<'a> {
    line: &'a str,
    tokens: &'a [Token],
    catalog: &'a CommandCatalog,
}

impl<'a> Zipper<'a> {
    /// Wrap the tokens produced from `line`.
    pub fn new(line: &'a str, tokens: &'a [Token], catalog: &'a CommandCatalog) -> Self {
        Self {
            line,
            tokens,
            catalog,
        }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    pub fn catalog(&self) -> &'a CommandCatalog {
        self.catalog
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn first(&self) -> Option<Cursor<'a>> {
        self.at(0)
    }

    pub fn last(&self) -> Option<Cursor<'a>> {
        self.tokens.len().checked_sub(1).and_then(|i| self.at(i))
    }

    pub fn at(&self, index: usize) -> Option<Cursor<'a>> {
        (index < self.tokens.len()).then_some(Cursor {
            zipper: *self,
            index,
        })
    }

    /// Every position, left to right.
    pub fn iter(&self) -> impl Iterator<Item = Cursor<'a>> + 'a {
        let zipper = *self;
        (0..self.tokens.len()).map(move |index| Cursor { zipper, index })
    }

    /// Text before the first token (the whole line when there are none).
    pub fn leading_gap(&self) -> &'a str {
        match self.tokens.first() {
            Some(token) => self.line.get(..token.span.start).unwrap_or(""),
            None => self.line,
        }
    }

    /// All text after the last token, including trailing whitespace and
    /// comments. Empty when there are no tokens.
    pub fn trailing(&self) -> &'a str {
        match self.tokens.last() {
            Some(token) => self.line.get(token.span.end..).unwrap_or(""),
            None => "",
        }
    }
}

/// One position within a [`Zipper`].
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    zipper: Zipper<'a>,
    index: usize,
}

impl<'a> Cursor<'a> {
    pub fn token(&self) -> &'a Token {
        &self.zipper.tokens[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn zipper(&self) -> Zipper<'a> {
        self.zipper
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.zipper.tokens.len()
    }

    /// The next position, or `None` past the end.
    pub fn advance(&self) -> Option<Self> {
        self.zipper.at(self.index + 1)
    }

    /// The previous position, or `None` before the start.
    pub fn retreat(&self) -> Option<Self> {
        self.index.checked_sub(1).and_then(|i| self.zipper.at(i))
    }

    /// Walk backward from this position (inclusive) to the first cursor
    /// satisfying `predicate`.
    pub fn reverse_find<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Cursor<'a>) -> bool,
    {
        let mut cursor = Some(*self);
        while let Some(current) = cursor {
            if predicate(&current) {
                return Some(current);
            }
            cursor = current.retreat();
        }
        None
    }

    /// The whitespace between this token and the next one.
    pub fn gap_text(&self) -> &'a str {
        let Some(next) = self.zipper.tokens.get(self.index + 1) else {
            return "";
        };
        self.zipper
            .line
            .get(self.token().span.end..next.span.start)
            .unwrap_or("")
    }

    /// Number of characters skipped before the next token; 0 at the end.
    pub fn gap_to_next(&self) -> usize {
        self.gap_text().chars().count()
    }

    /// Raw text after the last token when the line does not end in
    /// whitespace. Only the last cursor has a suffix.
    pub fn option_suffix(&self) -> Option<&'a str> {
        if !self.is_last() || self.zipper.line.ends_with(char::is_whitespace) {
            return None;
        }
        let suffix = self.zipper.trailing();
        (!suffix.is_empty()).then_some(suffix)
    }

    // ── Classification ──

    /// A word at the start of the line or right after an operator.
    pub fn is_command(&self) -> bool {
        self.token().is_word()
            && (self.is_first()
                || self.retreat().is_some_and(|previous| previous.is_action()))
    }

    /// A dash-prefixed word in argument position, before any earlier `--`.
    /// The first `--` is itself an option, so `diff --` completes.
    pub fn is_option(&self) -> bool {
        let token = self.token();
        token.is_word()
            && token.content.starts_with('-')
            && !self.is_command()
            && self.options_allowed()
    }

    pub fn is_action(&self) -> bool {
        self.token().is_action()
    }

    pub fn is_partial_action_token(&self) -> bool {
        self.token().is_partial_action()
    }

    pub fn is_unterminated_string_token(&self) -> bool {
        self.token().is_unterminated()
    }

    /// A complete word: not an operator and not missing a closing quote.
    pub fn is_string_token(&self) -> bool {
        self.token().is_word() && self.token().terminated
    }

    /// False once an unquoted `--` appeared earlier in the same statement.
    pub fn options_allowed(&self) -> bool {
        let mut cursor = self.retreat();
        while let Some(current) = cursor {
            let token = current.token();
            if token.is_action() {
                break;
            }
            if token.is_word() && token.quote == Quote::None && token.content == "--" {
                return false;
            }
            cursor = current.retreat();
        }
        true
    }

    pub fn is_valid_command(&self) -> bool {
        self.zipper.catalog.is_command(&self.token().content)
    }

    pub fn is_valid_git_command(&self) -> bool {
        self.zipper.catalog.is_git_command(&self.token().content)
    }

    pub fn is_valid_internal_command(&self) -> bool {
        self.zipper.catalog.is_internal_command(&self.token().content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tokenize;

    fn catalog() -> CommandCatalog {
        CommandCatalog::new([":exit", ":help"], ["status", "commit", "push", "diff"])
    }

    fn commands(line: &str) -> Vec<String> {
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        zipper
            .iter()
            .filter(Cursor::is_command)
            .map(|c| c.token().content.clone())
            .collect()
    }

    fn options(line: &str) -> Vec<String> {
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        zipper
            .iter()
            .filter(Cursor::is_option)
            .map(|c| c.token().content.clone())
            .collect()
    }

    #[test]
    fn empty_zipper() {
        let catalog = catalog();
        let tokens = tokenize("   ");
        let zipper = Zipper::new("   ", &tokens, &catalog);
        assert!(zipper.is_empty());
        assert!(zipper.first().is_none());
        assert!(zipper.last().is_none());
        assert_eq!(zipper.leading_gap(), "   ");
    }

    #[test]
    fn advance_and_retreat_stop_at_ends() {
        let catalog = catalog();
        let tokens = tokenize("status -s");
        let zipper = Zipper::new("status -s", &tokens, &catalog);
        let first = zipper.first().unwrap();
        assert!(first.is_first());
        assert!(first.retreat().is_none());
        let last = first.advance().unwrap();
        assert_eq!(last.token().content, "-s");
        assert!(last.advance().is_none());
        assert!(!last.is_first());
        assert_eq!(last.retreat().unwrap().index(), 0);
    }

    #[test]
    fn command_positions() {
        assert_eq!(
            commands("status -s && commit -m wip ; push || diff"),
            vec!["status", "commit", "push", "diff"]
        );
    }

    #[test]
    fn word_after_partial_action_is_not_command() {
        assert_eq!(commands("status & commit"), vec!["status"]);
    }

    #[test]
    fn options_exclude_commands_and_positionals() {
        assert_eq!(options("diff --stat HEAD -- -weird"), vec!["--stat", "--"]);
    }

    #[test]
    fn bare_double_dash_is_an_option() {
        assert_eq!(options("diff --"), vec!["--"]);
        assert_eq!(options("diff -- --"), vec!["--"]);
    }

    #[test]
    fn end_of_options_is_scoped_to_statement() {
        assert_eq!(
            options("diff -- --cached ; diff --cached"),
            vec!["--", "--cached"]
        );
    }

    #[test]
    fn quoted_double_dash_does_not_end_options() {
        assert_eq!(options("commit -m '--' --amend"), vec!["-m", "--", "--amend"]);
    }

    #[test]
    fn reverse_find_locates_owning_command() {
        let line = "status && diff --stat --cached";
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        let owner = zipper.last().unwrap().reverse_find(Cursor::is_command).unwrap();
        assert_eq!(owner.token().content, "diff");
        assert!(owner.is_valid_git_command());
    }

    #[test]
    fn reverse_find_is_inclusive_and_may_fail() {
        let line = "-x -y";
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        let last = zipper.last().unwrap();
        assert_eq!(last.reverse_find(|_| true).unwrap().index(), 1);
        assert!(last.reverse_find(|c| c.token().content == "nope").is_none());
    }

    #[test]
    fn gaps_between_tokens() {
        let line = "status  &&\tpush";
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        let gaps: Vec<usize> = zipper.iter().map(|c| c.gap_to_next()).collect();
        assert_eq!(gaps, vec![2, 1, 0]);
        assert_eq!(zipper.at(1).unwrap().gap_text(), "\t");
    }

    #[test]
    fn option_suffix_after_comment() {
        let line = "status #later";
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        assert_eq!(zipper.last().unwrap().option_suffix(), Some(" #later"));
        assert_eq!(zipper.first().unwrap().option_suffix(), Some(" #later"));
    }

    #[test]
    fn option_suffix_absent_for_trailing_whitespace() {
        let line = "status ";
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        assert_eq!(zipper.last().unwrap().option_suffix(), None);
        assert_eq!(zipper.trailing(), " ");
    }

    #[test]
    fn option_suffix_absent_when_line_ends_at_token() {
        let line = "diff --sta";
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        assert_eq!(zipper.last().unwrap().option_suffix(), None);
    }

    #[test]
    fn malformed_tokens_are_classified() {
        let line = "status | commit -m \"open";
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        let cursors: Vec<Cursor> = zipper.iter().collect();
        assert!(cursors[1].is_partial_action_token());
        assert!(!cursors[2].is_command());
        assert!(cursors[4].is_unterminated_string_token());
        assert!(!cursors[4].is_string_token());
        assert!(cursors[0].is_string_token());
    }

    #[test]
    fn catalog_membership() {
        let line = ":exit && bogus";
        let catalog = catalog();
        let tokens = tokenize(line);
        let zipper = Zipper::new(line, &tokens, &catalog);
        let first = zipper.first().unwrap();
        assert!(first.is_valid_command());
        assert!(first.is_valid_internal_command());
        assert!(!first.is_valid_git_command());
        assert!(!zipper.last().unwrap().is_valid_command());
    }
}

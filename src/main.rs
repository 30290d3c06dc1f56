//! gitsh: interactive shell for git.
//!
//! With no arguments, reads lines from stdin and runs each one; a prompt
//! showing the branch and change counts is printed when stdin is a
//! terminal. Flags expose the individual stages for scripting and
//! debugging.

use std::io::{self, BufRead, IsTerminal, Write};

use gitsh::config::Config;
use gitsh::exec::Outcome;
use gitsh::{git, highlight, parse, Shell};

const USAGE: &str = "\
usage: gitsh                     read and run lines from stdin
       gitsh -c <line>           run one line
       gitsh --tokens <line>     print the tokens of a line as JSON
       gitsh --highlight <line>  print the highlight style of each segment
       gitsh --complete <line>   print completions for the end of a line
       gitsh --dump-config       print the merged configuration";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let code = match args.as_slice() {
        [] => repl(&Shell::load()),
        [flag, line] if flag == "-c" => run_line(&Shell::load(), line).exit_code,
        [flag, line] if flag == "--tokens" => print_tokens(line),
        [flag, line] if flag == "--highlight" => print_highlight(&Shell::load(), line),
        [flag, line] if flag == "--complete" => print_completions(&Shell::load(), line),
        [flag] if flag == "--dump-config" => dump_config(&Config::load()),
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{USAGE}");
            0
        }
        _ => {
            eprintln!("{USAGE}");
            2
        }
    };

    std::process::exit(code);
}

/// Run lines until EOF or `:exit`; returns the last exit code.
fn repl(shell: &Shell) -> i32 {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();
    let mut last_code = 0;

    loop {
        if interactive {
            print!("{}", prompt(shell));
            let _ = io::stdout().flush();
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("gitsh: failed to read input: {e}");
                return 1;
            }
            None => break,
        };

        let outcome = run_line(shell, &line);
        last_code = outcome.exit_code;
        if outcome.is_exit() {
            break;
        }
    }

    last_code
}

fn run_line(shell: &Shell, line: &str) -> Outcome {
    let (mut out, mut err) = (io::stdout(), io::stderr());
    let outcome = shell.executor(&mut out, &mut err).run_line(line);
    if outcome.is_rejected()
        && let Some(e) = &outcome.error
    {
        eprintln!("gitsh: {e}\n{}", e.context(line, 40));
    }
    outcome
}

/// `gitsh main +1 ~2> `, or `gitsh> ` outside a repository.
fn prompt(shell: &Shell) -> String {
    let git = shell.git();
    if !git::is_repo(git) {
        return "gitsh> ".into();
    }
    let branch = git::current_branch(git).unwrap_or_else(|| "?".into());
    let changes = git::uncommitted_changes(git);
    let mut prompt = format!("gitsh {branch}");
    if changes.staged > 0 {
        prompt.push_str(&format!(" +{}", changes.staged));
    }
    if changes.unstaged > 0 {
        prompt.push_str(&format!(" ~{}", changes.unstaged));
    }
    prompt.push_str("> ");
    prompt
}

fn print_tokens(line: &str) -> i32 {
    let tokens = parse::tokenize(line);
    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            eprintln!("gitsh: failed to serialize tokens: {e}");
            1
        }
    }
}

fn print_highlight(shell: &Shell, line: &str) -> i32 {
    for segment in highlight::highlight(line, &shell.catalog).segments() {
        println!("{:?}\t{:?}", segment.style, segment.text);
    }
    0
}

fn print_completions(shell: &Shell, line: &str) -> i32 {
    match shell.completer().complete(line) {
        Some(candidates) => {
            for candidate in candidates {
                println!("{candidate}");
            }
            0
        }
        None => 1,
    }
}

fn dump_config(config: &Config) -> i32 {
    match config.to_toml() {
        Ok(toml) => {
            print!("{toml}");
            0
        }
        Err(e) => {
            eprintln!("gitsh: failed to serialize config: {e}");
            1
        }
    }
}

//! Line-oriented command language of the terminal host.
//!
//! Verbs are case-insensitive. A line that does not start with a known verb
//! is a task title, so typing `Buy milk` adds a task.

use anyhow::{Result, anyhow};

/// One parsed input line. Row numbers are 1-based positions in the list
/// the user last saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Theme,
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add <title>      add a task (any other text also adds a task)
  toggle <n>       mark row n done / not done (alias: done)
  delete <n>       delete row n after confirmation (alias: rm)
  theme            switch between light and dark
  list             show the list again
  help             show this help
  quit             leave (alias: exit)";

pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "add" => Ok(Command::Add(rest.to_string())),
        "toggle" | "done" => parse_row(verb, rest).map(Command::Toggle),
        "delete" | "rm" => parse_row(verb, rest).map(Command::Delete),
        "theme" if rest.is_empty() => Ok(Command::Theme),
        "list" if rest.is_empty() => Ok(Command::List),
        "help" if rest.is_empty() => Ok(Command::Help),
        "quit" | "exit" if rest.is_empty() => Ok(Command::Quit),
        _ => Ok(Command::Add(trimmed.to_string())),
    }
}

fn parse_row(verb: &str, rest: &str) -> Result<usize> {
    if rest.is_empty() {
        return Err(anyhow!("{} needs a row number", verb));
    }
    rest.parse::<usize>()
        .map_err(|_| anyhow!("{}: '{}' is not a row number", verb, rest))
}

//! Command parsing for the interactive prompt.

use crate::error::BookError;
use std::fmt;
use std::str::FromStr;

/// The fixed set of commands the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }
}

impl FromStr for Command {
    type Err = BookError;

    /// Parse an already lower-cased command word.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(BookError::UnrecognizedCommand),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a line into a lower-cased command word and its arguments.
///
/// An empty or blank line yields an empty command word and no arguments.
pub fn parse_input(line: &str) -> (String, Vec<&str>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(command) => (command.to_lowercase(), parts.collect()),
        None => (String::new(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_lowercases_command_only() {
        let (command, args) = parse_input("  ADD   Alice  0123456789 ");
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice", "0123456789"]);
    }

    #[test]
    fn test_parse_input_blank() {
        let (command, args) = parse_input("   \t ");
        assert_eq!(command, "");
        assert!(args.is_empty());
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!("hello".parse::<Command>(), Ok(Command::Hello));
        assert_eq!("add-birthday".parse::<Command>(), Ok(Command::AddBirthday));
        assert_eq!("close".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
        assert_eq!(
            "remove".parse::<Command>(),
            Err(BookError::UnrecognizedCommand)
        );
        assert_eq!("".parse::<Command>(), Err(BookError::UnrecognizedCommand));
    }

    #[test]
    fn test_command_display_round_trips() {
        for command in [
            Command::Hello,
            Command::Add,
            Command::Change,
            Command::Phone,
            Command::All,
            Command::AddBirthday,
            Command::ShowBirthday,
            Command::Birthdays,
            Command::Exit,
        ] {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }
}

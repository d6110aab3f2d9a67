//! Console command parsing

use std::str::FromStr;

use crate::{error::ParseError, state::Timer};

/// A line typed on the console
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Timer),
    Start,
    Stop,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "add" => parse_add(rest).map(Command::Add),
            "start" | "resume" => Ok(Command::Start),
            "stop" | "pause" => Ok(Command::Stop),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseError::UnknownCommand {
                command: keyword.to_string(),
            }),
        }
    }
}

/// Accept `NAME=SECONDS` or `NAME SECONDS` (the name may contain spaces)
fn parse_add(args: &str) -> Result<Timer, ParseError> {
    if args.contains('=') {
        return args.parse();
    }
    match args.rsplit_once(char::is_whitespace) {
        Some((name, seconds)) => format!("{}={}", name, seconds).parse(),
        None if args.is_empty() => Err(ParseError::EmptyName),
        None => Err(ParseError::MissingDuration {
            input: args.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start));
        assert_eq!("  STOP ".parse::<Command>(), Ok(Command::Stop));
        assert_eq!("pause".parse::<Command>(), Ok(Command::Stop));
        assert_eq!("Status".parse::<Command>(), Ok(Command::Status));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_add_forms() {
        assert_eq!(
            "add Tea=180".parse::<Command>(),
            Ok(Command::Add(Timer::new("Tea", 180.0)))
        );
        assert_eq!(
            "add Green tea 90".parse::<Command>(),
            Ok(Command::Add(Timer::new("Green tea", 90.0)))
        );
    }

    #[test]
    fn test_add_errors() {
        assert_eq!("add".parse::<Command>(), Err(ParseError::EmptyName));
        assert!(matches!("add Tea".parse::<Command>(), Err(ParseError::MissingDuration { .. })));
        assert!(matches!("add Tea=-1".parse::<Command>(), Err(ParseError::NonPositiveDuration { .. })));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "reset all".parse::<Command>(),
            Err(ParseError::UnknownCommand { command: "reset".into() })
        );
    }
}

//! Line handling for the interactive shell.
//!
//! A line is either `quit`, a `:name=value` assignment, `:vars`, or an expression. Assignments
//! only ever touch the session's variable table; the expression pipeline just reads it.

use log::info;
use thiserror::Error;

use crate::{
    config::Config,
    display_error, evaluate_expression_with,
    lexer::tokens::RESERVED_LOOKUP,
    variables::{is_identifier, VariableTable},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Empty,
    Quit,
    Variables,
    Assign { name: String, value: f64 },
    Evaluate(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("expected an assignment of the form `:name=value`")]
    MalformedAssignment,
    #[error("invalid variable name {0:?}, names may only contain letters")]
    InvalidName(String),
    #[error("{0:?} is a function and cannot be used as a variable name")]
    ReservedName(String),
    #[error("invalid value {0:?}, expected a number")]
    InvalidValue(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();

        if line.is_empty() {
            return Ok(Command::Empty);
        }
        if line == "quit" {
            return Ok(Command::Quit);
        }
        if line == ":vars" {
            return Ok(Command::Variables);
        }

        let Some(assignment) = line.strip_prefix(':') else {
            return Ok(Command::Evaluate(String::from(line)));
        };

        let (name, value) = assignment
            .split_once('=')
            .ok_or(CommandError::MalformedAssignment)?;
        let (name, value) = (name.trim(), value.trim());

        if !is_identifier(name) {
            return Err(CommandError::InvalidName(String::from(name)));
        }
        if RESERVED_LOOKUP.contains_key(name) {
            return Err(CommandError::ReservedName(String::from(name)));
        }
        let value = value
            .parse::<f64>()
            .map_err(|_| CommandError::InvalidValue(String::from(value)))?;

        Ok(Command::Assign {
            name: String::from(name),
            value,
        })
    }
}

/// What the shell should do after a line was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Silent,
    Quit,
    Print(String),
    Error(String),
}

pub struct Session {
    variables: VariableTable,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            variables: VariableTable::new(),
            config,
        }
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => return Reply::Error(format!("Error: {}", e)),
        };

        match command {
            Command::Empty => Reply::Silent,
            Command::Quit => Reply::Quit,
            Command::Variables => {
                if self.variables.is_empty() {
                    return Reply::Print(String::from("No variables defined"));
                }
                let listing = self
                    .variables
                    .iter()
                    .map(|variable| format!("{} = {}", variable.name, variable.value))
                    .collect::<Vec<String>>();
                Reply::Print(listing.join("\n"))
            }
            Command::Assign { name, value } => {
                info!("assigning {} = {}", name, value);
                self.variables.assign(&name, value);
                Reply::Silent
            }
            Command::Evaluate(source) => {
                match evaluate_expression_with(&source, &self.variables, &self.config) {
                    Ok(result) => Reply::Print(format!("Result: {:.6}", result)),
                    Err(e) => Reply::Error(display_error(&e, &source)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    use super::{Command, CommandError, Reply, Session};

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   "), Ok(Command::Empty));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse(" :vars "), Ok(Command::Variables));
        assert_eq!(
            Command::parse("1 + 2"),
            Ok(Command::Evaluate(String::from("1 + 2")))
        );
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            Command::parse(":rate=0.25"),
            Ok(Command::Assign {
                name: String::from("rate"),
                value: 0.25
            })
        );
        assert_eq!(
            Command::parse(":x = -9.23"),
            Ok(Command::Assign {
                name: String::from("x"),
                value: -9.23
            })
        );
    }

    #[test]
    fn test_parse_bad_assignment() {
        assert_eq!(Command::parse(":x"), Err(CommandError::MalformedAssignment));
        assert_eq!(
            Command::parse(":x1=2"),
            Err(CommandError::InvalidName(String::from("x1")))
        );
        assert_eq!(
            Command::parse(":=2"),
            Err(CommandError::InvalidName(String::new()))
        );
        assert_eq!(
            Command::parse(":x=two"),
            Err(CommandError::InvalidValue(String::from("two")))
        );
    }

    #[test]
    fn test_session_assign_and_evaluate() {
        let mut session = Session::new(Config::default());

        assert_eq!(session.handle(":a=3"), Reply::Silent);
        assert_eq!(session.handle(":b=4"), Reply::Silent);
        assert_eq!(
            session.handle("a * b + 1"),
            Reply::Print(String::from("Result: 13.000000"))
        );

        assert_eq!(session.handle(":a=5"), Reply::Silent);
        assert_eq!(
            session.handle("a * b"),
            Reply::Print(String::from("Result: 20.000000"))
        );
        assert_eq!(session.variables().len(), 2);
    }

    #[test]
    fn test_session_lists_variables() {
        let mut session = Session::new(Config::default());
        assert_eq!(
            session.handle(":vars"),
            Reply::Print(String::from("No variables defined"))
        );

        session.handle(":a=1.5");
        session.handle(":b=2");
        assert_eq!(
            session.handle(":vars"),
            Reply::Print(String::from("a = 1.5\nb = 2"))
        );
    }

    #[test]
    fn test_session_reports_errors() {
        let mut session = Session::new(Config::default());

        match session.handle("(2 + 3") {
            Reply::Error(message) => {
                assert!(message.starts_with("Error: UnbalancedParentheses"))
            }
            reply => panic!("unexpected reply {:?}", reply),
        }

        match session.handle("a + 1") {
            Reply::Error(message) => assert!(message.starts_with("Error: UnresolvedIdentifier")),
            reply => panic!("unexpected reply {:?}", reply),
        }

        match session.handle(":1=2") {
            Reply::Error(message) => assert!(message.starts_with("Error: invalid variable name")),
            reply => panic!("unexpected reply {:?}", reply),
        }
    }

    #[test]
    fn test_function_names_are_not_variables() {
        assert_eq!(
            Command::parse(":floor=3"),
            Err(CommandError::ReservedName(String::from("floor")))
        );
        assert!(Command::parse(":Floor=3").is_ok());

        let mut session = Session::new(Config::default());
        match session.handle(":ceil = 1") {
            Reply::Error(message) => assert!(message.contains("is a function")),
            reply => panic!("unexpected reply {:?}", reply),
        }
        assert!(session.variables().is_empty());
    }

    #[test]
    fn test_session_quit() {
        let mut session = Session::new(Config::default());

        assert_eq!(session.handle("quit"), Reply::Quit);
        assert_eq!(session.handle(""), Reply::Silent);
    }

    #[test]
    fn test_session_prints_non_finite_results() {
        let mut session = Session::new(Config::default());

        assert_eq!(
            session.handle("1 / 0"),
            Reply::Print(String::from("Result: inf"))
        );
        assert_eq!(
            session.handle("0 / 0"),
            Reply::Print(String::from("Result: NaN"))
        );
    }
}

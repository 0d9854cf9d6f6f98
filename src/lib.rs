#![allow(clippy::module_inception)]

use log::debug;

use crate::{
    config::Config,
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::evaluate,
    lexer::lexer::{tokenize, tokenize_strict},
    parser::parser::parse_source,
    variables::VariableTable,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;
pub mod variables;

extern crate regex;

/// Byte offset into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes, parses and evaluates `source` with the default [`Config`].
///
/// Identifiers are substituted from `variables` during tokenization; the table is only read.
pub fn evaluate_expression(source: &str, variables: &VariableTable) -> Result<f64, Error> {
    evaluate_expression_with(source, variables, &Config::default())
}

/// Same as [`evaluate_expression`], with explicit options.
pub fn evaluate_expression_with(
    source: &str,
    variables: &VariableTable,
    config: &Config,
) -> Result<f64, Error> {
    let tokens = if config.strict_identifiers {
        tokenize_strict(source, variables)?
    } else {
        tokenize(source, variables)
    };

    let ast = parse_source(tokens, config.associativity, source)?;
    let result = evaluate(&ast);

    debug!("{} => {}", ast, result);
    Ok(result)
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text and the column inside that line. Positions at
/// or past the end of `source` resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last_line = line;
        start = end;
        line_number += 1;
    }

    let trimmed = last_line.trim_end_matches('\n');
    (
        (line_number - 1).max(1),
        trimmed.to_string(),
        trimmed.len(),
    )
}


/// Renders `error` against the source it was raised for.
///
/// ```text
/// Error: UnbalancedParentheses (Expected `)` but found end of input)
///   |
/// 1 | (2 + 3
///   | ------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut output = Vec::new();

    if let ErrorTip::None = error.get_tip() {
        output.push(format!("Error: {}", error.get_error_name()));
    } else {
        output.push(format!(
            "Error: {} ({})",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    output.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    output.join("\n")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

//! Lexical analysis.
//!
//! Converts an expression into a flat token stream in a single pass. It handles:
//!
//! - Numeric literals (digits with at most one embedded dot)
//! - The `floor` and `ceil` keywords
//! - Variable substitution from a caller supplied table
//! - The single character operators `+ - * / ( )`

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

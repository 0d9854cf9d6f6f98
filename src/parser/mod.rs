//! Parser module for building the expression tree.
//!
//! This module contains the parser that transforms a stream of tokens into an `Expr`. It uses a
//! Pratt parser with NUD (null denotation) and LED (left denotation) handlers and binding powers
//! for precedence:
//!
//! - Additive operators bind loosest
//! - Multiplicative operators bind tighter
//! - Signs and `floor`/`ceil` apply to a single factor
//! - Parentheses group a full expression

pub mod expr;
pub mod lookups;
pub mod parser;

//! Error types shared by the lexer and parser.
//!
//! Every error carries the byte position it was raised at so the REPL can point at the
//! offending part of the input. Evaluation itself never fails.

pub mod errors;

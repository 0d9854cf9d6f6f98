use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("floor", TokenKind::Floor);
        map.insert("ceil", TokenKind::Ceil);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,

    Add,
    Sub,
    Mul,
    Div,

    LeftParen,
    RightParen,

    // Reserved
    Floor,
    Ceil,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::Number => "number",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Floor => "floor",
            TokenKind::Ceil => "ceil",
        };
        write!(f, "{}", text)
    }
}

/// A lexical unit.
///
/// `value` is only meaningful for `TokenKind::Number`. Identifiers never survive tokenization:
/// a variable reference becomes a `Number` token carrying the variable's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: f64,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "{}", self.value),
            kind => write!(f, "{}", kind),
        }
    }
}

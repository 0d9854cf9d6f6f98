use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Unary,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Add, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Sub, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Mul, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Div, BindingPower::Multiplicative, parse_binary_expr);

    // Literals, signs and functions
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::LeftParen, parse_grouping_expr);
    parser.nud(TokenKind::Add, parse_prefix_expr);
    parser.nud(TokenKind::Sub, parse_prefix_expr);
    parser.nud(TokenKind::Floor, parse_prefix_expr);
    parser.nud(TokenKind::Ceil, parse_prefix_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

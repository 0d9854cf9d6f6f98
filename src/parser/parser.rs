//! Parser implementation for building the expression tree.
//!
//! The parser walks the token stream with a single forward cursor. Prefix forms (numbers,
//! groups, signs and functions) are handled by NUD handlers, infix operators by LED handlers
//! whose binding power encodes precedence. This accepts exactly the grammar
//!
//! ```text
//! expr   := term (("+"|"-") term)*
//! term   := factor (("*"|"/") factor)*
//! factor := NUMBER | "(" expr ")" | ("+"|"-") factor | ("floor"|"ceil") factor
//! ```

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Expr,
    config::Associativity,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
};

/// Deepest nesting of groups, signs and functions, and deepest expression tree, accepted.
pub const MAX_DEPTH: usize = 512;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the current token; never moves backwards
    pos: usize,
    /// Grouping applied to chains of equal precedence
    associativity: Associativity,
    /// Text the tokens were read from, used to quote tokens in errors
    source: Option<String>,
    /// Number of `parse_expr` calls currently active
    nesting: usize,
    /// Depth of the tree returned by the last completed `parse_expr` or NUD handler
    depth: usize,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, associativity: Associativity) -> Self {
        Parser {
            tokens,
            pos: 0,
            associativity,
            source: None,
            nesting: 0,
            depth: 0,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Quotes tokens in errors as they were written instead of by their value.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(String::from(source));
        self
    }

    /// Returns the current token without advancing, or `None` at end of input.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes a token of `expected_kind`, or fails with the error built by `error` without
    /// advancing.
    pub fn expect_error<F>(&mut self, expected_kind: TokenKind, error: F) -> Result<Token, Error>
    where
        F: FnOnce(&Parser) -> Error,
    {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => {
                let token = *token;
                self.pos += 1;
                Ok(token)
            }
            _ => Err(error(self)),
        }
    }

    /// Error describing the current token as unexpected.
    pub fn unexpected(&self) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.describe(token),
                },
                token.span.start,
            ),
            None => Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_position()),
        }
    }

    /// The source text of `token`, or its value when the source is unknown. A variable is quoted
    /// by name rather than by the value it was replaced with.
    pub fn describe(&self, token: &Token) -> String {
        let (start, end) = (token.span.start.0 as usize, token.span.end.0 as usize);

        match self.source.as_deref().and_then(|source| source.get(start..end)) {
            Some(text) => String::from(text),
            None => token.to_string(),
        }
    }

    /// Enters one more level of `parse_expr`.
    pub fn enter(&mut self) -> Result<(), Error> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok(())
    }

    pub fn leave(&mut self) {
        self.nesting -= 1;
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Records the depth of the expression just built.
    pub fn set_depth(&mut self, depth: usize) -> Result<(), Error> {
        if depth > MAX_DEPTH {
            return Err(self.too_deep());
        }
        self.depth = depth;
        Ok(())
    }

    fn too_deep(&self) -> Error {
        Error::new(
            ErrorImpl::NestingTooDeep { limit: MAX_DEPTH },
            self.get_position(),
        )
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Binding power used for the right operand of an infix operator with binding power `bp`.
    ///
    /// Parsing the operand at the operator's own power stops before the next operator of the same
    /// level, which groups to the left. Parsing it one level lower lets the operand swallow the
    /// rest of the chain, which groups to the right.
    pub fn right_binding_power(&self, bp: BindingPower) -> BindingPower {
        match (self.associativity, bp) {
            (Associativity::RightMultiplicative, BindingPower::Multiplicative) => {
                BindingPower::Additive
            }
            _ => bp,
        }
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Position of the current token, or the end of the last token once input is exhausted.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start,
            None => self
                .tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or(Position::null()),
        }
    }
}

/// Parses a token stream into a single expression, grouping chains to the left.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, Error> {
    parse_with(tokens, Associativity::Left)
}

/// Parses a token stream into a single expression.
///
/// The whole stream must form one expression: leftover tokens are an error. A leftover `)` is
/// reported as unbalanced parentheses.
pub fn parse_with(tokens: Vec<Token>, associativity: Associativity) -> Result<Expr, Error> {
    parse_tokens(Parser::new(tokens, associativity))
}

/// Like [`parse_with`], quoting tokens in errors as they appear in `source`.
pub fn parse_source(
    tokens: Vec<Token>,
    associativity: Associativity,
    source: &str,
) -> Result<Expr, Error> {
    parse_tokens(Parser::new(tokens, associativity).with_source(source))
}

fn parse_tokens(mut parser: Parser) -> Result<Expr, Error> {
    create_token_lookups(&mut parser);

    let expr = parse_expr(&mut parser, BindingPower::Default)?;

    if let Some(token) = parser.current_token() {
        let error = match token.kind {
            TokenKind::RightParen => ErrorImpl::UnbalancedParentheses {
                token: parser.describe(token),
            },
            _ => ErrorImpl::UnexpectedToken {
                token: parser.describe(token),
            },
        };
        return Err(Error::new(error, token.span.start));
    }

    debug!("parsed {}", expr);
    Ok(expr)
}

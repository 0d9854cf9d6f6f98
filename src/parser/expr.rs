use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter()?;

    // First parse NUD
    let nud_fn = match parser.current_token_kind() {
        Some(kind) => parser.get_nud_lookup().get(&kind).copied(),
        None => None,
    };
    let Some(nud_fn) = nud_fn else {
        return Err(parser.unexpected());
    };

    let mut left = nud_fn(parser)?;
    let mut depth = parser.depth();

    // While the current token binds tighter than `bp`, keep extending the left hand side
    while let Some(kind) = parser.current_token_kind() {
        let token_bp = *parser
            .get_bp_lookup()
            .get(&kind)
            .unwrap_or(&BindingPower::Default);
        if token_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&kind).copied() else {
            return Err(parser.unexpected());
        };

        left = led_fn(parser, left, token_bp)?;

        // The right operand's depth is left behind by its own `parse_expr`
        depth = 1 + depth.max(parser.depth());
        parser.set_depth(depth)?;
    }

    parser.leave();
    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token() {
        Some(token) if token.kind == TokenKind::Number => {
            let value = token.value;
            parser.advance();
            parser.set_depth(1)?;
            Ok(Expr::Number(value))
        }
        _ => Err(parser.unexpected()),
    }
}

fn misplaced(parser: &Parser, token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: parser.describe(token),
        },
        token.span.start,
    )
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let Some(operator_token) = parser.advance() else {
        return Err(parser.unexpected());
    };

    let right_bp = parser.right_binding_power(bp);
    let right = parse_expr(parser, right_bp)?;

    let (left, right) = (Box::new(left), Box::new(right));
    match operator_token.kind {
        TokenKind::Add => Ok(Expr::Add(left, right)),
        TokenKind::Sub => Ok(Expr::Sub(left, right)),
        TokenKind::Mul => Ok(Expr::Mul(left, right)),
        TokenKind::Div => Ok(Expr::Div(left, right)),
        _ => Err(misplaced(parser, &operator_token)),
    }
}

/// Signs and functions apply to the single factor that follows them, so `-2 * 3` is
/// `(-2) * 3` and `floor 2.5 + 1` is `floor(2.5) + 1`.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator_token) = parser.advance() else {
        return Err(parser.unexpected());
    };

    let operand = Box::new(parse_expr(parser, BindingPower::Unary)?);
    parser.set_depth(parser.depth() + 1)?;

    match operator_token.kind {
        TokenKind::Sub => Ok(Expr::Negate(operand)),
        TokenKind::Add => Ok(Expr::Identity(operand)),
        TokenKind::Floor => Ok(Expr::Floor(operand)),
        TokenKind::Ceil => Ok(Expr::Ceil(operand)),
        _ => Err(misplaced(parser, &operator_token)),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect_error(TokenKind::RightParen, |parser| {
        let found = match parser.current_token() {
            Some(token) => format!("`{}`", parser.describe(token)),
            None => String::from("end of input"),
        };
        Error::new(
            ErrorImpl::UnbalancedParentheses { token: found },
            parser.get_position(),
        )
    })?;

    Ok(expr)
}

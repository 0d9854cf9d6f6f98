use crate::ast::ast::Expr;

use super::builtins::{ceil, floor};

/// Reduces an expression tree to a single value.
///
/// Arithmetic follows IEEE-754, so dividing by zero yields an infinity or NaN rather than an
/// error. Unary `+` yields the magnitude of its operand.
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(value) => *value,
        Expr::Add(left, right) => evaluate(left) + evaluate(right),
        Expr::Sub(left, right) => evaluate(left) - evaluate(right),
        Expr::Mul(left, right) => evaluate(left) * evaluate(right),
        Expr::Div(left, right) => evaluate(left) / evaluate(right),
        Expr::Negate(operand) => -evaluate(operand),
        Expr::Identity(operand) => evaluate(operand).abs(),
        Expr::Floor(operand) => floor(evaluate(operand)),
        Expr::Ceil(operand) => ceil(evaluate(operand)),
    }
}

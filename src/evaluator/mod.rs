//! Tree-walking evaluator.
//!
//! - `evaluator` - post-order reduction of an `Expr` to an `f64`
//! - `builtins` - the `floor` and `ceil` functions

pub mod builtins;
pub mod evaluator;

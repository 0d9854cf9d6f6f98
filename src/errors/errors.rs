use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at position {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnresolvedIdentifier { .. } => "UnresolvedIdentifier",
            ErrorImpl::UnbalancedParentheses { .. } => "UnbalancedParentheses",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnresolvedIdentifier { identifier } => ErrorTip::Suggestion(format!(
                "`{}` is not a defined variable, assign it with `:{}=<value>`",
                identifier, identifier
            )),
            ErrorImpl::UnbalancedParentheses { token } if token == ")" => {
                ErrorTip::Suggestion(String::from("Found `)` without a matching `(`"))
            }
            ErrorImpl::UnbalancedParentheses { token } => {
                ErrorTip::Suggestion(format!("Expected `)` but found {}", token))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, `(`, a sign or a function",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl std::fmt::Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unresolved identifier: {identifier:?}")]
    UnresolvedIdentifier { identifier: String },
    #[error("unbalanced parentheses near {token}")]
    UnbalancedParentheses { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

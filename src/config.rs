//! Evaluation options.

/// How chains of operators with equal precedence are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c` and `a / b / c` is `(a / b) / c`.
    #[default]
    Left,
    /// Additive chains group to the left, multiplicative chains to the right:
    /// `a / b / c` is `a / (b / c)`. Matches results produced by earlier releases.
    RightMultiplicative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Report identifiers that are neither a function nor a variable instead of dropping them.
    pub strict_identifiers: bool,
    pub associativity: Associativity,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict_identifiers: true,
            associativity: Associativity::Left,
        }
    }
}

impl Config {
    /// Unknown identifiers are dropped and multiplicative chains group to the right.
    pub fn legacy() -> Self {
        Config {
            strict_identifiers: false,
            associativity: Associativity::RightMultiplicative,
        }
    }
}

use lazy_static::lazy_static;
use log::{debug, trace, warn};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    variables::VariableTable,
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text matched at the lexer's current position. The tokenizer loop advances
/// past the match once the handler returns.
pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order at every position. All patterns are anchored.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Add) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Sub) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Div) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Mul) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen) },
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    unresolved: Vec<(String, Position)>,
    source: &'a str,
    variables: &'a VariableTable,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, variables: &'a VariableTable) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            unresolved: vec![],
            source,
            variables,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span of `matched` starting at the current position.
    pub fn span_of(&self, matched: &str) -> Span {
        Span {
            start: Position(self.pos as u32),
            end: Position((self.pos + matched.len()) as u32),
        }
    }

    /// Identifiers that matched neither a keyword nor a variable, in source order.
    pub fn unresolved(&self) -> &[(String, Position)] {
        &self.unresolved
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn run(&mut self) {
        while !self.at_eof() {
            let remaining = self.remainder();
            let found = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

            match found {
                Some((handler, matched)) => {
                    handler(self, matched);
                    self.advance_n(matched.len());
                }
                None => {
                    // Whitespace and unknown symbols are skipped.
                    let skipped = self.at().map_or(1, char::len_utf8);
                    trace!("skipping {:?} at {}", &remaining[..skipped], self.pos);
                    self.advance_n(skipped);
                }
            }
        }
    }
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) {
    let span = lexer.span_of(matched);

    match matched.parse::<f64>() {
        Ok(value) => lexer.push(MK_TOKEN!(TokenKind::Number, value, span)),
        Err(e) => warn!("dropping malformed number {:?} at {}: {}", matched, span.start, e),
    }
}

fn symbol_handler(lexer: &mut Lexer<'_>, matched: &str) {
    let span = lexer.span_of(matched);

    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(MK_TOKEN!(*kind, 0.0, span));
    } else if let Some(value) = lexer.variables.lookup(matched) {
        lexer.push(MK_TOKEN!(TokenKind::Number, value, span));
    } else {
        warn!("unresolved identifier {:?} at {}", matched, span.start);
        lexer.unresolved.push((String::from(matched), span.start));
    }
}

/// Runs the lexer over `source`, keeping the unresolved identifiers next to the tokens.
pub fn lex<'a>(source: &'a str, variables: &'a VariableTable) -> Lexer<'a> {
    let mut lex = Lexer::new(source, variables);
    lex.run();

    debug!(
        "tokenized {:?} into {} tokens ({} unresolved identifiers)",
        source,
        lex.tokens().len(),
        lex.unresolved().len()
    );
    lex
}

/// Tokenizes `source`, substituting identifiers from `variables`.
///
/// Never fails. Unknown characters are skipped and identifiers that are neither `floor`, `ceil`
/// nor a variable are dropped from the stream, which usually surfaces later as a parse error.
pub fn tokenize(source: &str, variables: &VariableTable) -> Vec<Token> {
    lex(source, variables).tokens
}

/// Like [`tokenize`], but reports the first unresolved identifier instead of dropping it.
pub fn tokenize_strict(source: &str, variables: &VariableTable) -> Result<Vec<Token>, Error> {
    let lex = lex(source, variables);

    if let Some((identifier, position)) = lex.unresolved().first() {
        return Err(Error::new(
            ErrorImpl::UnresolvedIdentifier {
                identifier: identifier.clone(),
            },
            *position,
        ));
    }

    Ok(lex.tokens)
}

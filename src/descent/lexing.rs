//! Scanner
//!
//!     This module turns source text into the token sequence the parsing engine
//!     consumes. The scanner is configured at runtime from an ordered list of
//!     [`TokenRule`]s, each pairing a regex pattern with the token kind it produces.
//!
//! Matching Discipline
//!
//!     At each position the rules are tried in declaration order and the first rule
//!     whose pattern matches at that exact position wins, consuming the matched text.
//!     Declaration order is therefore the tie-breaker: put keyword patterns before
//!     the identifier pattern, longer operators before their prefixes, and so on.
//!
//!     Every pattern is compiled anchored, so a rule can only ever match at the
//!     current scan position. A rule that matches the empty string is skipped at that
//!     position; accepting it would stall the scan without consuming input.
//!
//!     When no rule matches, scanning stops with a [`LexError`] carrying the
//!     offending character and its location. No recovery is attempted; the parse
//!     never starts.

use std::fmt;

use regex::Regex;

use super::token::{Location, Token, TokenKind};

/// One scanner rule: a regex pattern and the kind of token it produces.
#[derive(Debug, Clone)]
pub struct TokenRule {
    pattern: Regex,
    kind: TokenKind,
}

impl TokenRule {
    /// Compile a rule from a pattern string.
    ///
    /// The pattern is anchored to the scan position; callers write it unanchored.
    pub fn new(pattern: &str, kind: TokenKind) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"\A(?:{})", pattern))?;
        Ok(TokenRule { pattern, kind })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// A runtime-configured scanner over an ordered rule list.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: Vec<TokenRule>,
}

impl Tokenizer {
    pub fn new(rules: Vec<TokenRule>) -> Self {
        Tokenizer { rules }
    }

    /// Build a scanner from `(pattern, kind)` pairs, compiling each pattern.
    pub fn from_rules(specs: &[(&str, TokenKind)]) -> Result<Self, regex::Error> {
        let rules = specs
            .iter()
            .map(|(pattern, kind)| TokenRule::new(pattern, *kind))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Tokenizer::new(rules))
    }

    /// Scan `input` into a token sequence.
    ///
    /// `locator` maps a byte offset and length to a [`Location`], letting callers
    /// substitute their own position scheme (line/column, file ids) for the raw
    /// byte offsets.
    pub fn tokenize<L>(&self, input: &str, locator: L) -> Result<Vec<Token>, LexError>
    where
        L: Fn(usize, usize) -> Location,
    {
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < input.len() {
            let rest = &input[offset..];
            let hit = self.rules.iter().find_map(|rule| {
                rule.pattern
                    .find(rest)
                    .filter(|m| !m.as_str().is_empty())
                    .map(|m| (rule.kind, m.as_str()))
            });

            match hit {
                Some((kind, text)) => {
                    tokens.push(Token::new(kind, text, locator(offset, text.len())));
                    offset += text.len();
                }
                None => {
                    // rest is non-empty here, so there is always a next character
                    let character = rest.chars().next().unwrap_or('\0');
                    return Err(LexError {
                        character,
                        location: locator(offset, 0),
                    });
                }
            }
        }

        Ok(tokens)
    }
}

/// Scanning failed: no rule matched at `location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The character at the position where scanning stopped.
    pub character: char,

    /// Where scanning stopped.
    pub location: Location,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) Error: Unexpected character {:?}",
            self.location, self.character
        )
    }
}

impl std::error::Error for LexError {}

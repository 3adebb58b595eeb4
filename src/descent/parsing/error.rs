//! Structured expected/got parse diagnostics.
//!
//!     A parse failure always records three things: what the failing combinator was
//!     looking for, what it found instead, and where. The `Expected`/`Got` split
//!     keeps diagnostics mechanical: no message formatting happens on the failure
//!     path, only data capture; rendering is deferred to `Display` or to
//!     [`ParseError::describe`] when the caller can name token kinds.

use std::collections::HashMap;
use std::fmt;

use crate::descent::token::{Location, Token, TokenKind};

/// What the failing combinator was looking for.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Expected {
    /// End of input.
    Eof,

    /// A token of this kind.
    Token(TokenKind),

    /// Any of these alternatives, by description.
    OneOf(Vec<String>),
}

/// What was found instead.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Got {
    /// Input ran out.
    Eof,

    /// This token was next.
    Token(Token),

    /// No single token describes the failure (alternative exhaustion at EOF).
    None,
}

/// A parse failure: expected vs got, at a location.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseError {
    pub expected: Expected,
    pub got: Got,
    pub location: Location,
}

impl ParseError {
    /// Render with human-readable token kind names.
    ///
    /// Kinds missing from `names` fall back to their numeric tag.
    pub fn describe(&self, names: &HashMap<TokenKind, String>) -> String {
        let name = |kind: TokenKind| {
            names
                .get(&kind)
                .cloned()
                .unwrap_or_else(|| format!("token {}", kind))
        };
        let expected = match &self.expected {
            Expected::Eof => "end of input".to_string(),
            Expected::Token(kind) => name(*kind),
            Expected::OneOf(descriptions) => join_alternatives(descriptions),
        };
        let got = match &self.got {
            Got::Eof => "end of input".to_string(),
            Got::Token(token) => format!("{} {:?}", name(token.kind), token.text),
            Got::None => "nothing that matched".to_string(),
        };
        format!(
            "({}) Error: Expected {}, but got {}",
            self.location, expected, got
        )
    }
}

/// The "a", "a or b", "a, b, or c" alternative-list phrasing used by `Display`.
fn join_alternatives(descriptions: &[String]) -> String {
    match descriptions {
        [] => "one of nothing".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [head @ .., last] => format!("{}, or {}", head.join(", "), last),
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Eof => write!(f, "end of input"),
            Expected::Token(kind) => write!(f, "token {}", kind),
            Expected::OneOf(descriptions) => write!(f, "{}", join_alternatives(descriptions)),
        }
    }
}

impl fmt::Display for Got {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Got::Eof => write!(f, "end of input"),
            Got::Token(token) => write!(f, "token {} {:?}", token.kind, token.text),
            Got::None => write!(f, "nothing that matched"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) Error: Expected {}, but got {}",
            self.location, self.expected, self.got
        )
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descent::token::Location;

    #[test]
    fn test_display_expected_token() {
        let err = ParseError {
            expected: Expected::Token(1),
            got: Got::Token(Token::new(0, "c", Location::at(5, 1))),
            location: Location::at(5, 1),
        };
        assert_eq!(
            err.to_string(),
            "(5..6) Error: Expected token 1, but got token 0 \"c\""
        );
    }

    #[test]
    fn test_display_alternative_list_phrasing() {
        assert_eq!(join_alternatives(&["a".into()]), "a");
        assert_eq!(join_alternatives(&["a".into(), "b".into()]), "a or b");
        assert_eq!(
            join_alternatives(&["a".into(), "b".into(), "c".into()]),
            "a, b, or c"
        );
    }

    #[test]
    fn test_describe_uses_kind_names() {
        let mut names = HashMap::new();
        names.insert(1, "semicolon".to_string());
        let err = ParseError {
            expected: Expected::Token(1),
            got: Got::Eof,
            location: Location::at(9, 0),
        };
        assert_eq!(
            err.describe(&names),
            "(9..9) Error: Expected semicolon, but got end of input"
        );
    }
}

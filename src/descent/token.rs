//! Core token types shared across the scanner, the parser, and tooling.
//!
//!     A token is an opaque positioned lexical unit: an integer kind tag, the matched
//!     text, and a source location. The parsing engine never looks inside the text; it
//!     only compares kind tags. This keeps the engine agnostic to how tokens were
//!     produced, so any scanner that emits this shape can feed it.
//!
//!     Locations are byte offsets plus a length. The scanner computes them through a
//!     caller-supplied locator closure, so callers that want line/column positions can
//!     layer their own mapping on top without the engine knowing about it.

use std::fmt;

/// Integer tag identifying a token's lexical category.
///
/// Tags are assigned by the caller when building the token rules; the engine
/// only ever compares them for equality.
pub type TokenKind = i32;

/// A byte-offset source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// Byte offset of the first character.
    pub offset: usize,

    /// Length of the region in bytes.
    pub length: usize,
}

impl Location {
    pub fn at(offset: usize, length: usize) -> Self {
        Location { offset, length }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.offset + self.length)
    }
}

/// A positioned lexical unit produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// The lexical category of this token.
    pub kind: TokenKind,

    /// The matched source text.
    pub text: String,

    /// Where in the source the text was matched.
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {:?}, {})", self.kind, self.text, self.location)
    }
}

//! The combinator set.
//!
//!     Rules are written as plain functions `ParseState -> ParseState`, built by
//!     chaining the methods below and finishing with [`ParseState::complete`] to
//!     tag the rule in the trace:
//!
//!         fn increment(state: ParseState) -> ParseState {
//!             state.expect(ID).expect(PLUS_PLUS).complete(R_INCREMENT)
//!         }
//!
//!     Every method short-circuits on an already-failed state, so a rule body
//!     reads as a straight-line pipeline. Ordered choice is the single point of
//!     local recovery: it clones the pre-choice state, tries each alternative in
//!     listed order, and commits to the first success. There is no longest-match
//!     or furthest-failure merging, so diagnostics after exhaustion list the
//!     alternatives, not per-alternative failure depth.

use crate::descent::grammar::{RuleId, EPSILON};
use crate::descent::token::TokenKind;

use super::error::{Expected, Got, ParseError};
use super::state::{LogEvent, ParseState};

/// One ordered-choice alternative: a rule and its diagnostic description.
pub struct Alternative<'a> {
    pub rule: &'a dyn Fn(ParseState) -> ParseState,
    pub description: &'a str,
}

impl<'a> Alternative<'a> {
    pub fn new(rule: &'a dyn Fn(ParseState) -> ParseState, description: &'a str) -> Self {
        Alternative { rule, description }
    }
}

impl ParseState {
    /// Consume one token of the given kind.
    ///
    /// On a kind mismatch the error points at the offending token; at end of
    /// input it points at the last matched token.
    pub fn expect(self, kind: TokenKind) -> ParseState {
        let mut progress = match self {
            ParseState::Parsing(progress) => progress,
            failed => return failed,
        };
        match progress.remaining().first() {
            Some(token) if token.kind == kind => {
                let token = token.clone();
                progress.advance();
                progress.record(LogEvent::Terminal(token));
                ParseState::Parsing(progress)
            }
            Some(token) => ParseState::Failed(ParseError {
                expected: Expected::Token(kind),
                got: Got::Token(token.clone()),
                location: token.location,
            }),
            None => {
                let location = progress.last_location();
                ParseState::Failed(ParseError {
                    expected: Expected::Token(kind),
                    got: Got::Eof,
                    location,
                })
            }
        }
    }

    /// Apply a sub-rule; pass an already-failed state through unchanged.
    pub fn then<F>(self, rule: F) -> ParseState
    where
        F: FnOnce(ParseState) -> ParseState,
    {
        match self {
            ParseState::Parsing(_) => rule(self),
            failed => failed,
        }
    }

    /// Try each alternative against the pre-choice state, in listed order, and
    /// commit to the first success.
    ///
    /// On exhaustion the error lists every alternative's description; `got` is
    /// the current lookahead token, or [`Got::None`] when input already ran out.
    pub fn one_of(self, alternatives: &[Alternative<'_>]) -> ParseState {
        let progress = match self {
            ParseState::Parsing(progress) => progress,
            failed => return failed,
        };

        for alternative in alternatives {
            let attempt = (alternative.rule)(ParseState::Parsing(progress.clone()));
            if attempt.is_parsing() {
                return attempt;
            }
        }

        let descriptions = alternatives
            .iter()
            .map(|alternative| alternative.description.to_string())
            .collect();
        let (got, location) = match progress.remaining().first() {
            Some(token) => (Got::Token(token.clone()), token.location),
            None => (Got::None, progress.last_location()),
        };
        ParseState::Failed(ParseError {
            expected: Expected::OneOf(descriptions),
            got,
            location,
        })
    }

    /// Zero-or-more repetition of `body`, bracketed in the trace by a
    /// [`LogEvent::LoopOpened`]/[`LogEvent::LoopClosed`] pair.
    ///
    /// A failed iteration is discarded and the last successful state is kept,
    /// so repetition itself never fails. `rule` names the production the body
    /// completes with; replay uses it to size each repetition.
    pub fn repeat<F>(self, rule: RuleId, body: F) -> ParseState
    where
        F: Fn(ParseState) -> ParseState,
    {
        let mut current = match self {
            ParseState::Parsing(progress) => progress,
            failed => return failed,
        };
        current.record(LogEvent::LoopOpened(rule));

        loop {
            match body(ParseState::Parsing(current.clone())) {
                ParseState::Parsing(next) => current = next,
                ParseState::Failed(_) => break,
            }
        }

        current.record(LogEvent::LoopClosed);
        ParseState::Parsing(current)
    }

    /// Tag the enclosing rule as completed, without touching the token cursor.
    /// Every rule body ends with this.
    pub fn complete(self, rule: RuleId) -> ParseState {
        match self {
            ParseState::Parsing(mut progress) => {
                progress.record(LogEvent::Rule(rule));
                ParseState::Parsing(progress)
            }
            failed => failed,
        }
    }

    /// A successful empty match: completes the reserved empty production.
    pub fn epsilon(self) -> ParseState {
        self.complete(EPSILON)
    }
}

/// The empty-match rule, usable directly as a choice alternative.
pub fn epsilon(state: ParseState) -> ParseState {
    state.epsilon()
}

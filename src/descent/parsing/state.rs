//! Parse state and the event log.
//!
//!     The engine's whole working state is the triple (matched, remaining, log),
//!     plus a success/failure tag. Combinators never mutate a state another branch
//!     can still see: they consume their input state and return a new one, and the
//!     only combinator that retries, ordered choice, clones the pre-choice state
//!     for each attempt.
//!
//!     Matched and remaining are two views over one shared token sequence split at
//!     a cursor, so cloning a state is a reference-count bump plus a log copy
//!     rather than a copy of the tokens themselves.
//!
//!     The log is the engine's real output: a flat, append-only trace of terminal
//!     consumptions, rule completions, and loop brackets, recorded in completion
//!     order. After a successful parse it is the sole input (together with the
//!     grammar table) to derivation tree reconstruction.

use std::rc::Rc;

use crate::descent::grammar::RuleId;
use crate::descent::token::Token;

use super::error::ParseError;

/// One entry of the parse trace.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LogEvent {
    /// A terminal was consumed.
    Terminal(Token),

    /// A rule's body finished; the completion is logged after the body's events.
    Rule(RuleId),

    /// A repetition session started.
    LoopOpened(RuleId),

    /// The matching repetition session ended.
    LoopClosed,
}

/// The live side of a parse: token cursor plus event log.
#[derive(Debug, Clone)]
pub struct Progress {
    tokens: Rc<[Token]>,
    cursor: usize,
    log: Vec<LogEvent>,
}

impl Progress {
    fn new(tokens: Vec<Token>) -> Self {
        Progress {
            tokens: Rc::from(tokens),
            cursor: 0,
            log: Vec::new(),
        }
    }

    /// The tokens consumed so far, in input order.
    pub fn matched(&self) -> &[Token] {
        &self.tokens[..self.cursor]
    }

    /// The tokens not yet consumed, in input order.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.cursor..]
    }

    /// The trace recorded so far.
    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub(super) fn advance(&mut self) {
        self.cursor += 1;
    }

    pub(super) fn record(&mut self, event: LogEvent) {
        self.log.push(event);
    }

    /// Location of the most recently matched token, for EOF diagnostics.
    /// Falls back to the zero location when nothing has matched yet.
    pub(super) fn last_location(&self) -> crate::descent::token::Location {
        self.matched()
            .last()
            .map(|token| token.location)
            .unwrap_or_default()
    }

    pub(super) fn into_log(self) -> Vec<LogEvent> {
        self.log
    }
}

/// A parse in flight: still matching, or failed with a diagnostic.
///
/// Failure is absorbing for every combinator except ordered choice, which
/// retries alternatives from its saved pre-choice state.
#[derive(Debug, Clone)]
pub enum ParseState {
    Parsing(Progress),
    Failed(ParseError),
}

impl ParseState {
    /// Seed a parse over a token sequence.
    pub fn start(tokens: Vec<Token>) -> Self {
        ParseState::Parsing(Progress::new(tokens))
    }

    pub fn is_parsing(&self) -> bool {
        matches!(self, ParseState::Parsing(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ParseState::Failed(_))
    }

    /// The live progress, if the parse has not failed.
    pub fn progress(&self) -> Option<&Progress> {
        match self {
            ParseState::Parsing(progress) => Some(progress),
            ParseState::Failed(_) => None,
        }
    }

    /// The failure diagnostic, if the parse has failed.
    pub fn error(&self) -> Option<&ParseError> {
        match self {
            ParseState::Parsing(_) => None,
            ParseState::Failed(error) => Some(error),
        }
    }
}

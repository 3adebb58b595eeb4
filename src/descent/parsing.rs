//! Parsing module: the backtracking engine.
//!
//!     This module provides the state model and combinator set the engine is built
//!     from, plus the driver that runs a start rule end to end:
//!
//!         1. State: the immutable (matched, remaining, log) triple with a
//!            success/failure tag. See [state](state).
//!         2. Combinators: token consumption, sequencing, ordered choice,
//!            repetition, and rule tagging, written as consuming methods on
//!            [`ParseState`]. See [combinators](combinators).
//!         3. Diagnostics: structured expected/got errors with locations. See
//!            [error](error).
//!         4. Driver: seed, run, check for trailing input, hand the trace to the
//!            tree builder. See [driver](driver).
//!
//! Backtracking Model
//!
//!     Failure is absorbing: once a state has failed, every combinator passes it
//!     through untouched. The single point of local recovery is ordered choice,
//!     which retries alternatives against a clone of the pre-choice state and
//!     commits to the first success. Because states are never mutated in place, a
//!     failed branch cannot leak partial progress into its siblings; discarding
//!     the failed state is the whole undo mechanism.

pub mod combinators;
pub mod driver;
pub mod error;
pub mod state;

pub use combinators::{epsilon, Alternative};
pub use driver::parse;
pub use error::{Expected, Got, ParseError};
pub use state::{LogEvent, ParseState, Progress};

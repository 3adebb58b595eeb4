//! # descent-parser
//!
//! A grammar-driven recursive-descent parsing engine with backtracking
//! combinators and trace-replay tree reconstruction.
//!
//! Rules are plain functions chaining combinators over an immutable
//! [ParseState](descent::parsing::ParseState); a successful run leaves a flat
//! event trace which, together with the [grammar
//! table](descent::grammar::GrammarTable), is replayed into the concrete
//! derivation tree. See the [parsing](descent::parsing) and
//! [building](descent::building) modules for the two halves of that story.

pub mod descent;

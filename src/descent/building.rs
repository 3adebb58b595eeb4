//! Building module: derivation tree reconstruction.
//!
//!     A successful parse leaves behind only a flat trace of events. This module
//!     turns that trace back into the concrete derivation tree, using the grammar
//!     table as the oracle for how many children each completed rule contributes.
//!
//!     The trace is recorded bottom-up: an inner rule's completion lands in the
//!     log before the completion of the rule containing it. The builder therefore walks
//!     it in reverse. Read backwards, the trace is exactly an expansion script:
//!     the root rule first, then, working right to left through the tree, the
//!     resolution of every placeholder the expansions created. See
//!     [replay](replay) for the algorithm and [ast](ast) for the finished tree
//!     shape.

pub mod ast;
pub mod replay;

pub use ast::{render, terminals, Ast, AstValue};
pub use replay::replay;

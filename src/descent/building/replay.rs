//! Trace replay.
//!
//!     Replay reverses the parse trace and treats it as an expansion script for
//!     one mutable working tree. The first (reversed) event names the root rule;
//!     expanding a rule turns each right-hand-side symbol into a placeholder
//!     child, and every later event resolves the rightmost placeholder eligible
//!     for its kind, so the tree fills in right to left, mirroring the reversed
//!     trace.
//!
//! Loop Sessions
//!
//!     Read in reverse, a repetition session arrives as: `LoopClosed` first, then
//!     one rule completion per repetition (last repetition first), then
//!     `LoopOpened`. A loop placeholder therefore moves through three phases:
//!
//!         - pending: created by the parent's expansion; waits for `LoopClosed`,
//!           which appends the end sentinel child and opens the session.
//!         - accepting: each completion of the repeated rule prepends one
//!           repetition child ahead of the sentinel, so repetitions end up in
//!           input order.
//!         - done: `LoopOpened` bounds the session; the node takes no further
//!           events.
//!
//! Consistency
//!
//!     Because the token stream already parsed against the same table, exactly
//!     one eligible node exists for every event. An event with no eligible node
//!     means the grammar table disagrees with the rules that actually ran; that
//!     is a hard invariant violation and replay panics rather than silently
//!     dropping the event and corrupting the tree.

use crate::descent::grammar::{GrammarTable, RuleId, EPSILON};
use crate::descent::parsing::LogEvent;
use crate::descent::token::{Token, TokenKind};
use crate::descent::tree::Tree;

use super::ast::{Ast, AstValue};

/// The value at one working tree node during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    /// Placeholder for a terminal of this kind, awaiting its token.
    Terminal(TokenKind),

    /// A filled terminal leaf.
    Leaf(Token),

    /// A rule node; as a leaf it is a placeholder awaiting expansion.
    Rule(RuleId),

    /// Placeholder for an ordered-alternative symbol, awaiting resolution.
    OneOf(Vec<RuleId>),

    /// A loop placeholder: pending as a leaf, accepting once the end sentinel
    /// child is present.
    Loop(RuleId),

    /// A loop whose session has been bounded; takes no further events.
    LoopDone(RuleId),

    /// The end-of-session sentinel child; stripped during normalization.
    LoopEnd,

    /// The empty production matched here.
    Epsilon,
}

fn awaiting_expansion(node: &Tree<Slot>) -> bool {
    node.is_leaf() && matches!(node.value, Slot::Rule(_) | Slot::OneOf(_))
}

fn pending_loop(node: &Tree<Slot>) -> bool {
    node.is_leaf() && matches!(node.value, Slot::Loop(_))
}

fn accepting_loop(node: &Tree<Slot>) -> bool {
    !node.is_leaf() && matches!(node.value, Slot::Loop(_))
}

/// Rebuild the derivation tree from a completed parse trace.
///
/// Panics if the trace and the table are inconsistent; after a successful parse
/// against the same table this cannot happen.
pub fn replay(log: &[LogEvent], table: &GrammarTable) -> Ast {
    let mut events = log.iter().rev();

    let root_rule = match events.next() {
        Some(LogEvent::Rule(id)) => *id,
        Some(other) => panic!("parse trace must end with a rule completion, found {:?}", other),
        None => panic!("parse trace is empty"),
    };
    let mut tree = Tree::with_children(Slot::Rule(root_rule), expand(table, root_rule));

    for event in events {
        step(&mut tree, event, table);
    }

    finish(tree)
}

/// Placeholder children for one rule's right-hand side.
fn expand(table: &GrammarTable, rule: RuleId) -> Vec<Tree<Slot>> {
    use crate::descent::grammar::Symbol;

    let symbols = table
        .symbols(rule)
        .unwrap_or_else(|| panic!("rule {} completed but has no grammar table entry", rule));
    symbols
        .iter()
        .map(|symbol| match symbol {
            Symbol::Terminal(kind) => Tree::leaf(Slot::Terminal(*kind)),
            Symbol::Rule(id) => Tree::leaf(Slot::Rule(*id)),
            Symbol::OneOf(ids) => Tree::leaf(Slot::OneOf(ids.clone())),
            Symbol::Loop(id) => Tree::leaf(Slot::Loop(*id)),
        })
        .collect()
}

fn step(tree: &mut Tree<Slot>, event: &LogEvent, table: &GrammarTable) {
    match event {
        LogEvent::Rule(nt) => {
            let path = tree
                .rightmost_where(|n| awaiting_expansion(n) || accepting_loop(n))
                .unwrap_or_else(|| no_target(event));
            let node = tree.navigate_mut(&path).unwrap_or_else(|| no_target(event));
            if *nt == EPSILON {
                node.value = Slot::Epsilon;
                node.children.clear();
            } else if matches!(node.value, Slot::Loop(_)) {
                // One repetition; prepending keeps repetitions in input order.
                node.children
                    .insert(0, Tree::with_children(Slot::Rule(*nt), expand(table, *nt)));
            } else {
                node.value = Slot::Rule(*nt);
                node.children = expand(table, *nt);
            }
        }
        LogEvent::Terminal(token) => {
            let path = tree
                .rightmost_where(|n| n.is_leaf() && matches!(n.value, Slot::Terminal(_)))
                .unwrap_or_else(|| no_target(event));
            let node = tree.navigate_mut(&path).unwrap_or_else(|| no_target(event));
            node.value = Slot::Leaf(token.clone());
        }
        LogEvent::LoopOpened(_) => {
            let path = tree
                .rightmost_where(accepting_loop)
                .unwrap_or_else(|| no_target(event));
            let node = tree.navigate_mut(&path).unwrap_or_else(|| no_target(event));
            if let Slot::Loop(rule) = node.value {
                node.value = Slot::LoopDone(rule);
            }
        }
        LogEvent::LoopClosed => {
            let path = tree
                .rightmost_where(pending_loop)
                .unwrap_or_else(|| no_target(event));
            let node = tree.navigate_mut(&path).unwrap_or_else(|| no_target(event));
            node.children.push(Tree::leaf(Slot::LoopEnd));
        }
    }
}

fn no_target(event: &LogEvent) -> ! {
    panic!(
        "replay event {:?} has no eligible placeholder; grammar table is inconsistent with the rules that ran",
        event
    )
}

/// Normalize the fully replayed working tree into the final derivation tree.
fn finish(node: Tree<Slot>) -> Ast {
    match node.value {
        Slot::Leaf(token) => Tree::leaf(AstValue::Terminal(token)),
        Slot::Epsilon => Tree::leaf(AstValue::Epsilon),
        Slot::Rule(id) => Tree::with_children(
            AstValue::Rule(id),
            node.children.into_iter().map(finish).collect(),
        ),
        Slot::LoopDone(id) => Tree::with_children(
            AstValue::Rule(id),
            node.children
                .into_iter()
                .filter(|child| child.value != Slot::LoopEnd)
                .map(finish)
                .collect(),
        ),
        Slot::Terminal(kind) => panic!("terminal placeholder for kind {} was never filled", kind),
        Slot::OneOf(ids) => panic!("alternative placeholder {:?} was never resolved", ids),
        Slot::Loop(id) => panic!("loop over rule {} was never closed", id),
        Slot::LoopEnd => panic!("stray loop sentinel survived normalization"),
    }
}

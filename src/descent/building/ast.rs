//! The finished derivation tree.
//!
//!     The tree is plain data: a [`Tree`] of [`AstValue`]s, built once by replay
//!     and immutable from the caller's point of view thereafter. Terminal leaves
//!     carry their tokens, interior nodes carry the rule id they derive, and
//!     epsilon leaves mark where the empty production matched.

use crate::descent::grammar::{GrammarTable, RuleId};
use crate::descent::token::Token;
use crate::descent::tree::Tree;

/// The value at one derivation tree node.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AstValue {
    /// A consumed token; always a leaf.
    Terminal(Token),

    /// A completed production; children follow its right-hand side.
    Rule(RuleId),

    /// The empty production matched here; always a leaf.
    Epsilon,
}

/// A derivation tree.
pub type Ast = Tree<AstValue>;

/// The terminal tokens of the tree, in left-to-right leaf order.
///
/// For any accepted input this spells the original token sequence exactly.
pub fn terminals(ast: &Ast) -> Vec<&Token> {
    let mut out = Vec::new();
    collect_terminals(ast, &mut out);
    out
}

fn collect_terminals<'a>(node: &'a Ast, out: &mut Vec<&'a Token>) {
    if let AstValue::Terminal(token) = &node.value {
        out.push(token);
    }
    for child in &node.children {
        collect_terminals(child, out);
    }
}

/// Render the tree as a box-drawing listing, naming rules through the table.
///
/// Terminals print as their quoted text, rules as their table name (or
/// `rule <id>` when unnamed), epsilon leaves as `epsilon`.
pub fn render(ast: &Ast, table: &GrammarTable) -> String {
    let mut out = String::new();
    render_node(ast, table, "", true, &mut out);
    out
}

fn render_node(node: &Ast, table: &GrammarTable, indent: &str, last: bool, out: &mut String) {
    out.push_str(indent);
    let child_indent = if last {
        out.push_str("└─");
        format!("{}  ", indent)
    } else {
        out.push_str("├─");
        format!("{}│ ", indent)
    };
    out.push_str(&label(node, table));
    out.push('\n');
    for (index, child) in node.children.iter().enumerate() {
        render_node(
            child,
            table,
            &child_indent,
            index == node.children.len() - 1,
            out,
        );
    }
}

fn label(node: &Ast, table: &GrammarTable) -> String {
    match &node.value {
        AstValue::Terminal(token) => format!("{:?}", token.text),
        AstValue::Rule(id) => table
            .rule_name(*id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("rule {}", id)),
        AstValue::Epsilon => "epsilon".to_string(),
    }
}

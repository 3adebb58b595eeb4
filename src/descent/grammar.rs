//! Grammar Table
//!
//!     This module defines the declarative side of the engine: productions are keyed
//!     by integer rule ids, and each production's right-hand side is an ordered list
//!     of [`Symbol`]s. The table is built once, validated, and then only read. The
//!     combinators consult it indirectly through the rule functions the caller
//!     writes, and the tree builder consults it directly as the arity oracle during
//!     trace replay.
//!
//!     Rule id `-1` is reserved for the empty production and is installed by
//!     [`GrammarTable::new`]; every table carries it so that epsilon completions can
//!     always be resolved.
//!
//!     Rule ids are globally unique keys. Redefinition is rejected at `define` time
//!     rather than resolved by lookup order, since two productions sharing an id
//!     would make replay ambiguous.

use std::collections::HashMap;
use std::fmt;

use super::token::TokenKind;

/// Integer id naming a grammar production.
pub type RuleId = i32;

/// The reserved id of the empty production.
pub const EPSILON: RuleId = -1;

/// One element of a production's right-hand side.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Symbol {
    /// A token of the given kind.
    Terminal(TokenKind),

    /// A reference to another production.
    Rule(RuleId),

    /// Ordered alternatives; each alternative is itself a production.
    OneOf(Vec<RuleId>),

    /// Zero-or-more repetition of a production.
    Loop(RuleId),
}

impl Symbol {
    /// The rule ids this symbol references, if any.
    fn referenced(&self) -> &[RuleId] {
        match self {
            Symbol::Terminal(_) => &[],
            Symbol::Rule(id) | Symbol::Loop(id) => std::slice::from_ref(id),
            Symbol::OneOf(ids) => ids,
        }
    }
}

/// The mapping from rule id to right-hand-side symbols, plus display names.
#[derive(Debug, Clone)]
pub struct GrammarTable {
    rules: HashMap<RuleId, Vec<Symbol>>,
    names: HashMap<RuleId, String>,
}

impl GrammarTable {
    /// Create a table holding only the reserved empty production.
    pub fn new() -> Self {
        let mut table = GrammarTable {
            rules: HashMap::new(),
            names: HashMap::new(),
        };
        table.rules.insert(EPSILON, Vec::new());
        table.names.insert(EPSILON, "epsilon".to_string());
        table
    }

    /// Add a production. Fails if `id` is already defined.
    pub fn define(
        &mut self,
        id: RuleId,
        name: &str,
        symbols: Vec<Symbol>,
    ) -> Result<(), GrammarError> {
        if self.rules.contains_key(&id) {
            return Err(GrammarError::DuplicateRule(id));
        }
        self.rules.insert(id, symbols);
        self.names.insert(id, name.to_string());
        Ok(())
    }

    /// The right-hand side of `id`, if defined.
    pub fn symbols(&self, id: RuleId) -> Option<&[Symbol]> {
        self.rules.get(&id).map(Vec::as_slice)
    }

    /// The display name of `id`, if defined.
    pub fn rule_name(&self, id: RuleId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Check that every rule id referenced by any symbol has an entry.
    pub fn validate(&self) -> Result<(), GrammarError> {
        for (&id, symbols) in &self.rules {
            for symbol in symbols {
                for &referenced in symbol.referenced() {
                    if !self.rules.contains_key(&referenced) {
                        return Err(GrammarError::UnknownRule { referenced, by: id });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for GrammarTable {
    fn default() -> Self {
        GrammarTable::new()
    }
}

/// Errors raised while building or validating a grammar table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A rule id was defined twice.
    DuplicateRule(RuleId),

    /// A symbol references a rule id with no entry.
    UnknownRule { referenced: RuleId, by: RuleId },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DuplicateRule(id) => {
                write!(f, "Grammar error: rule {} is defined twice", id)
            }
            GrammarError::UnknownRule { referenced, by } => write!(
                f,
                "Grammar error: rule {} references undefined rule {}",
                by, referenced
            ),
        }
    }
}

impl std::error::Error for GrammarError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_carries_the_empty_production() {
        let table = GrammarTable::new();
        assert_eq!(table.symbols(EPSILON), Some(&[][..]));
        assert_eq!(table.rule_name(EPSILON), Some("epsilon"));
    }

    #[test]
    fn test_duplicate_rule_id_rejected() {
        let mut table = GrammarTable::new();
        table.define(0, "start", vec![Symbol::Terminal(0)]).unwrap();
        assert_eq!(
            table.define(0, "other", vec![]),
            Err(GrammarError::DuplicateRule(0))
        );
    }

    #[test]
    fn test_validate_catches_dangling_references() {
        let mut table = GrammarTable::new();
        table.define(0, "start", vec![Symbol::Rule(1)]).unwrap();
        assert_eq!(
            table.validate(),
            Err(GrammarError::UnknownRule {
                referenced: 1,
                by: 0
            })
        );

        table.define(1, "inner", vec![Symbol::Terminal(0)]).unwrap();
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_validate_inspects_alternatives_and_loops() {
        let mut table = GrammarTable::new();
        table.define(0, "start", vec![Symbol::OneOf(vec![1, 2])]).unwrap();
        table.define(1, "a", vec![Symbol::Loop(3)]).unwrap();
        table.define(2, "b", vec![]).unwrap();
        assert_eq!(
            table.validate(),
            Err(GrammarError::UnknownRule {
                referenced: 3,
                by: 1
            })
        );
    }
}

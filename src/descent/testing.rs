//! Shared fixtures for tests.
//!
//!     Token factories plus the [statements](statements) demo language, a small
//!     imperative grammar exercising every combinator: repetition at the top
//!     level, ordered choice among statement forms, and epsilon-free sequencing
//!     below. Integration tests and property tests build on these instead of
//!     re-declaring grammars inline.

use super::token::{Location, Token, TokenKind};

/// A token at a synthetic location, for tests that never touch source text.
pub fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text, Location::at(0, text.len()))
}

/// A token sequence with consecutive synthetic locations.
pub fn toks(specs: &[(TokenKind, &str)]) -> Vec<Token> {
    let mut offset = 0;
    specs
        .iter()
        .map(|&(kind, text)| {
            let token = Token::new(kind, text, Location::at(offset, text.len()));
            offset += text.len();
            token
        })
        .collect()
}

/// The statement demo language.
///
///     program    := statement*
///     statement  := (increment | decrement | assignment) ";"
///     increment  := ID "++"
///     decrement  := ID "--"
///     assignment := ID "=" (value_id | int_literal | str_literal)
pub mod statements {
    use once_cell::sync::Lazy;

    use crate::descent::building::Ast;
    use crate::descent::grammar::{GrammarTable, RuleId, Symbol};
    use crate::descent::lexing::{LexError, Tokenizer};
    use crate::descent::parsing::{parse, Alternative, ParseError, ParseState};
    use crate::descent::token::{Location, Token, TokenKind};

    pub const SEMICOLON: TokenKind = 0;
    pub const INCREMENT: TokenKind = 1;
    pub const DECREMENT: TokenKind = 2;
    pub const EQUALS: TokenKind = 3;
    pub const ID: TokenKind = 4;
    pub const INTEGER_LITERAL: TokenKind = 5;
    pub const STRING_LITERAL: TokenKind = 6;

    pub const R_PROGRAM: RuleId = 0;
    pub const R_STATEMENT: RuleId = 1;
    pub const R_INCREMENT: RuleId = 2;
    pub const R_DECREMENT: RuleId = 3;
    pub const R_ASSIGNMENT: RuleId = 4;
    pub const R_VALUE_ID: RuleId = 5;
    pub const R_INT_LITERAL: RuleId = 6;
    pub const R_STR_LITERAL: RuleId = 7;

    pub static GRAMMAR: Lazy<GrammarTable> = Lazy::new(|| {
        let mut table = GrammarTable::new();
        let mut define = |id, name, symbols| {
            table
                .define(id, name, symbols)
                .unwrap_or_else(|e| panic!("demo grammar: {}", e))
        };
        define(R_PROGRAM, "program", vec![Symbol::Loop(R_STATEMENT)]);
        define(
            R_STATEMENT,
            "statement",
            vec![
                Symbol::OneOf(vec![R_INCREMENT, R_DECREMENT, R_ASSIGNMENT]),
                Symbol::Terminal(SEMICOLON),
            ],
        );
        define(
            R_INCREMENT,
            "increment",
            vec![Symbol::Terminal(ID), Symbol::Terminal(INCREMENT)],
        );
        define(
            R_DECREMENT,
            "decrement",
            vec![Symbol::Terminal(ID), Symbol::Terminal(DECREMENT)],
        );
        define(
            R_ASSIGNMENT,
            "assignment",
            vec![
                Symbol::Terminal(ID),
                Symbol::Terminal(EQUALS),
                Symbol::OneOf(vec![R_VALUE_ID, R_INT_LITERAL, R_STR_LITERAL]),
            ],
        );
        define(R_VALUE_ID, "value_id", vec![Symbol::Terminal(ID)]);
        define(
            R_INT_LITERAL,
            "int_literal",
            vec![Symbol::Terminal(INTEGER_LITERAL)],
        );
        define(
            R_STR_LITERAL,
            "str_literal",
            vec![Symbol::Terminal(STRING_LITERAL)],
        );
        table.validate().unwrap_or_else(|e| panic!("demo grammar: {}", e));
        table
    });

    pub static TOKENIZER: Lazy<Tokenizer> = Lazy::new(|| {
        Tokenizer::from_rules(&[
            (";", SEMICOLON),
            (r"\+\+", INCREMENT),
            ("--", DECREMENT),
            ("=", EQUALS),
            ("[a-zA-Z_][a-zA-Z0-9_]*", ID),
            ("[0-9]+", INTEGER_LITERAL),
            ("\"[^\"]*\"", STRING_LITERAL),
        ])
        .unwrap_or_else(|e| panic!("demo token rules: {}", e))
    });

    pub fn increment(state: ParseState) -> ParseState {
        state.expect(ID).expect(INCREMENT).complete(R_INCREMENT)
    }

    pub fn decrement(state: ParseState) -> ParseState {
        state.expect(ID).expect(DECREMENT).complete(R_DECREMENT)
    }

    pub fn value_id(state: ParseState) -> ParseState {
        state.expect(ID).complete(R_VALUE_ID)
    }

    pub fn int_literal(state: ParseState) -> ParseState {
        state.expect(INTEGER_LITERAL).complete(R_INT_LITERAL)
    }

    pub fn str_literal(state: ParseState) -> ParseState {
        state.expect(STRING_LITERAL).complete(R_STR_LITERAL)
    }

    pub fn assignment(state: ParseState) -> ParseState {
        state
            .expect(ID)
            .expect(EQUALS)
            .one_of(&[
                Alternative::new(&value_id, "an identifier"),
                Alternative::new(&int_literal, "an integer"),
                Alternative::new(&str_literal, "a string"),
            ])
            .complete(R_ASSIGNMENT)
    }

    pub fn statement(state: ParseState) -> ParseState {
        state
            .one_of(&[
                Alternative::new(&increment, "an increment"),
                Alternative::new(&decrement, "a decrement"),
                Alternative::new(&assignment, "an assignment"),
            ])
            .expect(SEMICOLON)
            .complete(R_STATEMENT)
    }

    pub fn program(state: ParseState) -> ParseState {
        state.repeat(R_STATEMENT, statement).complete(R_PROGRAM)
    }

    /// Scan demo-language source text.
    pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
        TOKENIZER.tokenize(input, Location::at)
    }

    /// Parse a token sequence as a whole program.
    pub fn parse_program(tokens: Vec<Token>) -> Result<Ast, ParseError> {
        parse(program, tokens, &GRAMMAR)
    }
}

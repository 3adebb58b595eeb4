//! Serde round-trips for the public data model.

use descent_parser::descent::building::Ast;
use descent_parser::descent::grammar::Symbol;
use descent_parser::descent::parsing::LogEvent;
use descent_parser::descent::testing::statements;
use descent_parser::descent::token::{Location, Token};

#[test]
fn test_token_roundtrips_through_json() {
    let token = Token::new(statements::ID, "abcd", Location::at(0, 4));
    let json = serde_json::to_string(&token).expect("serializes");
    let back: Token = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, token);
}

#[test]
fn test_symbols_roundtrip_through_json() {
    let symbols = vec![
        Symbol::Terminal(statements::ID),
        Symbol::Rule(statements::R_STATEMENT),
        Symbol::OneOf(vec![statements::R_INCREMENT, statements::R_DECREMENT]),
        Symbol::Loop(statements::R_STATEMENT),
    ];
    let json = serde_json::to_string(&symbols).expect("serializes");
    let back: Vec<Symbol> = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, symbols);
}

#[test]
fn test_parse_trace_roundtrips_through_json() {
    let events = vec![
        LogEvent::LoopOpened(statements::R_STATEMENT),
        LogEvent::Terminal(Token::new(statements::ID, "x", Location::at(0, 1))),
        LogEvent::Rule(statements::R_INCREMENT),
        LogEvent::LoopClosed,
    ];
    let json = serde_json::to_string(&events).expect("serializes");
    let back: Vec<LogEvent> = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, events);
}

#[test]
fn test_derivation_tree_roundtrips_through_json() {
    let tokens = statements::lex("x=42;y++;").expect("scans");
    let ast = statements::parse_program(tokens).expect("parses");

    let json = serde_json::to_string(&ast).expect("serializes");
    let back: Ast = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, ast);
}

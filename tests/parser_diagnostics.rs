//! Diagnostic shape and phrasing for parse failures in the demo language.

use std::collections::HashMap;

use rstest::rstest;

use descent_parser::descent::parsing::{Expected, Got, ParseState};
use descent_parser::descent::testing::{statements, toks};
use descent_parser::descent::token::Location;

#[test]
fn test_missing_semicolon_points_past_the_last_match() {
    let state = ParseState::start(toks(&[(statements::ID, "x"), (statements::INCREMENT, "++")]));
    let err = statements::statement(state).error().cloned().expect("fails");

    assert_eq!(err.expected, Expected::Token(statements::SEMICOLON));
    assert_eq!(err.got, Got::Eof);
    assert_eq!(err.location, Location::at(1, 2));
}

#[test]
fn test_statement_exhaustion_lists_the_alternatives() {
    let state = ParseState::start(toks(&[(statements::SEMICOLON, ";")]));
    let err = statements::statement(state).error().cloned().expect("fails");

    assert_eq!(
        err.expected,
        Expected::OneOf(vec![
            "an increment".to_string(),
            "a decrement".to_string(),
            "an assignment".to_string(),
        ])
    );
    assert!(matches!(&err.got, Got::Token(t) if t.text == ";"));
    assert_eq!(err.location, Location::at(0, 1));
}

#[test]
fn test_bad_assignment_value_reports_the_value_alternatives() {
    let state = ParseState::start(toks(&[
        (statements::ID, "x"),
        (statements::EQUALS, "="),
        (statements::SEMICOLON, ";"),
    ]));
    let err = statements::assignment(state).error().cloned().expect("fails");

    assert_eq!(
        err.expected,
        Expected::OneOf(vec![
            "an identifier".to_string(),
            "an integer".to_string(),
            "a string".to_string(),
        ])
    );
    assert_eq!(err.location, Location::at(2, 1));
}

#[rstest]
#[case::choice_exhaustion(
    &[(statements::SEMICOLON, ";")],
    "(0..1) Error: Expected an increment, a decrement, or an assignment, but got token 0 \";\""
)]
#[case::missing_semicolon(
    &[(statements::ID, "x"), (statements::INCREMENT, "++")],
    "(1..3) Error: Expected token 0, but got end of input"
)]
#[case::inner_failure_stays_local(
    // The assignment fails deep inside, but choice reports its own exhaustion
    // at the pre-choice position; alternative failures are not merged.
    &[(statements::ID, "x"), (statements::EQUALS, "="), (statements::SEMICOLON, ";")],
    "(0..1) Error: Expected an increment, a decrement, or an assignment, but got token 4 \"x\""
)]
fn test_display_phrasing(#[case] tokens: &[(i32, &str)], #[case] expected: &str) {
    let state = ParseState::start(toks(tokens));
    let err = statements::statement(state).error().cloned().expect("fails");
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_describe_substitutes_kind_names() {
    let mut names = HashMap::new();
    names.insert(statements::SEMICOLON, "a semicolon".to_string());

    let state = ParseState::start(toks(&[(statements::ID, "x"), (statements::INCREMENT, "++")]));
    let err = statements::statement(state).error().cloned().expect("fails");

    assert_eq!(
        err.describe(&names),
        "(1..3) Error: Expected a semicolon, but got end of input"
    );
}

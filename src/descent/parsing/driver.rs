//! Driver
//!
//!     The driver seeds a fresh state from the input tokens, runs the start rule,
//!     and insists the whole input was consumed. On success the accumulated trace
//!     is handed to the tree builder; on failure the most specific diagnostic seen
//!     along the single surviving path is returned verbatim: no recovery, no
//!     resynchronization, no merging of failures across abandoned alternatives.

use crate::descent::building::{replay, Ast};
use crate::descent::grammar::GrammarTable;
use crate::descent::token::Token;

use super::error::{Expected, Got, ParseError};
use super::state::ParseState;

/// Run `start` over `tokens` and rebuild the derivation tree from the trace.
///
/// `start` must be a rule built from the combinators, ending in
/// [`ParseState::complete`]. Trailing input after a successful start rule is an
/// error: the parse must consume everything.
pub fn parse<F>(start: F, tokens: Vec<Token>, table: &GrammarTable) -> Result<Ast, ParseError>
where
    F: FnOnce(ParseState) -> ParseState,
{
    let outcome = start(ParseState::start(tokens));
    match outcome {
        ParseState::Failed(error) => Err(error),
        ParseState::Parsing(progress) => {
            if let Some(extra) = progress.remaining().first() {
                return Err(ParseError {
                    expected: Expected::Eof,
                    got: Got::Token(extra.clone()),
                    location: extra.location,
                });
            }
            Ok(replay(&progress.into_log(), table))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descent::grammar::Symbol;
    use crate::descent::token::Location;

    fn single_token_table() -> GrammarTable {
        let mut table = GrammarTable::new();
        table
            .define(0, "start", vec![Symbol::Terminal(0)])
            .unwrap();
        table
    }

    fn two_token_table() -> GrammarTable {
        let mut table = GrammarTable::new();
        table
            .define(0, "start", vec![Symbol::Terminal(0), Symbol::Terminal(1)])
            .unwrap();
        table
    }

    #[test]
    fn test_sequence_parses_into_an_ordered_tree() {
        let tokens = vec![
            Token::new(0, "a", Location::at(0, 1)),
            Token::new(1, "b", Location::at(1, 1)),
        ];
        let ast = parse(
            |s: ParseState| s.expect(0).expect(1).complete(0),
            tokens,
            &two_token_table(),
        )
        .expect("parses");

        use crate::descent::building::AstValue;
        assert_eq!(ast.value, AstValue::Rule(0));
        let texts: Vec<_> = ast
            .children
            .iter()
            .map(|child| match &child.value {
                AstValue::Terminal(token) => token.text.as_str(),
                other => panic!("expected a terminal leaf, found {:?}", other),
            })
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_sequence_mismatch_reports_the_second_position() {
        let tokens = vec![
            Token::new(0, "a", Location::at(0, 1)),
            Token::new(0, "c", Location::at(1, 1)),
        ];
        let error = parse(
            |s: ParseState| s.expect(0).expect(1).complete(0),
            tokens,
            &two_token_table(),
        )
        .unwrap_err();
        assert_eq!(error.expected, Expected::Token(1));
        assert!(matches!(&error.got, Got::Token(t) if t.kind == 0 && t.text == "c"));
        assert_eq!(error.location, Location::at(1, 1));
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        let tokens = vec![
            Token::new(0, "a", Location::at(0, 1)),
            Token::new(0, "b", Location::at(1, 1)),
        ];
        let result = parse(
            |s: ParseState| s.expect(0).complete(0),
            tokens,
            &single_token_table(),
        );
        let error = result.unwrap_err();
        assert_eq!(error.expected, Expected::Eof);
        assert!(matches!(&error.got, Got::Token(t) if t.text == "b"));
        assert_eq!(error.location, Location::at(1, 1));
    }

    #[test]
    fn test_failure_propagates_verbatim() {
        let tokens = vec![Token::new(1, "x", Location::at(0, 1))];
        let error = parse(
            |s: ParseState| s.expect(0).complete(0),
            tokens,
            &single_token_table(),
        )
        .unwrap_err();
        assert_eq!(error.expected, Expected::Token(0));
        assert!(matches!(&error.got, Got::Token(t) if t.kind == 1));
    }
}

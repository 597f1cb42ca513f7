#![allow(dead_code)]

use std::collections::HashMap;

use shellquote_rs::{Resolver, Token, VarValue, join, parse, parse_with};

/// Tokenize with no variables defined, panicking on error.
pub fn tokens(input: &str) -> Vec<Token> {
    parse(input).expect("parse failed")
}

/// Tokenize against a static variable table, panicking on error.
pub fn tokens_with(input: &str, vars: &[(&str, &str)]) -> Vec<Token> {
    let table = var_table(vars);
    parse_with(input, Resolver::Static(&table)).expect("parse failed")
}

/// Build a variable table from string pairs.
pub fn var_table(vars: &[(&str, &str)]) -> HashMap<String, VarValue> {
    vars.iter()
        .map(|(name, value)| ((*name).to_string(), VarValue::from(*value)))
        .collect()
}

pub fn word(text: &str) -> Token {
    Token::Word(text.to_string())
}

pub fn glob(pattern: &str) -> Token {
    Token::Glob {
        pattern: pattern.to_string(),
    }
}

pub fn comment(text: &str) -> Token {
    Token::Comment(text.to_string())
}

/// Join the tokens into a line, parse it back, and assert the sequence
/// survives unchanged.
pub fn assert_join_roundtrip(tokens: &[Token]) {
    let line = join(tokens);
    let reparsed = parse(&line).expect("joined line failed to parse");
    assert_eq!(
        reparsed, tokens,
        "join round-trip mismatch:\n--- line ---\n{line}"
    );
}

//! Tokenize a command line and describe each token.

use shellquote_rs::{Token, join};

fn main() {
    let input = "tar -czf 'site backup.tar.gz' /srv/www && echo done # nightly job";

    let tokens = shellquote_rs::parse(input).expect("parse failed");

    println!("Input: {input}");
    println!("Tokens: {}", tokens.len());
    for token in &tokens {
        match token {
            Token::Word(word) => println!("  Word:     {word:?}"),
            Token::Operator(op) => println!("  Operator: {op}"),
            Token::Glob { pattern } => println!("  Glob:     {pattern:?}"),
            Token::Comment(text) => println!("  Comment:  {text:?}"),
            Token::Embedded(value) => println!("  Embedded: {value}"),
        }
    }

    println!("\nRe-joined: {}", join(&tokens));
}

//! Shell command-line tokenizer with POSIX-style quoting and variable
//! substitution.
//!
//! Splits a command line into words, control operators, glob patterns, and
//! a trailing comment without executing anything. Quoting follows the
//! familiar rules: single quotes are fully literal, double quotes keep
//! substitution alive, and a backslash escapes the next character.
//! Variables resolve through a caller-supplied [`Resolver`]; structured
//! values surface as standalone [`Token::Embedded`] entries. The inverse
//! direction, [`quote_word`] and [`join`], renders tokens back into a line
//! that parses to the same sequence.
//!
//! # Quick start
//!
//! ## Tokenize a command line
//!
//! ```
//! use shellquote_rs::{parse, Operator, Token};
//!
//! let tokens = parse("ls -la && echo done").unwrap();
//! assert_eq!(tokens[0], Token::Word("ls".to_string()));
//! assert_eq!(tokens[2], Token::Operator(Operator::AndIf));
//! ```
//!
//! ## Substitute variables
//!
//! ```
//! use std::collections::HashMap;
//! use shellquote_rs::{parse_with, Resolver, Token, VarValue};
//!
//! let vars = HashMap::from([("USER".to_string(), VarValue::from("ada"))]);
//! let tokens = parse_with("echo $USER", Resolver::Static(&vars)).unwrap();
//! assert_eq!(tokens[1], Token::Word("ada".to_string()));
//! ```
//!
//! ## Quote arguments into a line
//!
//! ```
//! use shellquote_rs::{join, Token};
//!
//! let tokens = vec![
//!     Token::Word("mv".to_string()),
//!     Token::Word("my file".to_string()),
//!     Token::Word("dest".to_string()),
//! ];
//! assert_eq!(join(&tokens), "mv 'my file' dest");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod chunker;
pub mod quote;
pub mod resolver;
pub mod scanner;
pub mod token;

pub use chunker::{ChunkKind, RawChunk, chunk};
pub use quote::{join, quote_word};
pub use resolver::{Resolver, VarValue};
pub use scanner::{ParseError, ParseErrorKind, ParseOptions, parse_with_options};
pub use token::{Operator, Token};

/// Tokenize a command line with no variables defined. Every `$name`
/// reference substitutes the empty string.
///
/// # Errors
///
/// Returns a [`ParseError`] on a malformed `${...}` substitution.
pub fn parse(input: &str) -> Result<Vec<Token>, ParseError> {
    parse_with_options(input, Resolver::Empty, &ParseOptions::default())
}

/// Tokenize a command line, resolving variables through `resolver`.
///
/// # Errors
///
/// Returns a [`ParseError`] on a malformed `${...}` substitution.
pub fn parse_with(input: &str, resolver: Resolver<'_>) -> Result<Vec<Token>, ParseError> {
    parse_with_options(input, resolver, &ParseOptions::default())
}

use std::fmt;

use serde::{Serialize, Serializer};

/// A control operator recognized between words.
///
/// Operators are opaque to the tokenizer: they are classified by spelling
/// and carried through untouched. Two-character spellings win over their
/// one-character prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `&&`
    AndIf,
    /// `||`
    OrIf,
    /// `;;`
    DoubleSemicolon,
    /// `|&`
    PipeAmpersand,
    /// `&`
    Ampersand,
    /// `;`
    Semicolon,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `|`
    Pipe,
    /// `<`
    RedirectIn,
    /// `>`
    RedirectOut,
}

impl Operator {
    /// The operator's spelling in the source line.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::AndIf => "&&",
            Self::OrIf => "||",
            Self::DoubleSemicolon => ";;",
            Self::PipeAmpersand => "|&",
            Self::Ampersand => "&",
            Self::Semicolon => ";",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Pipe => "|",
            Self::RedirectIn => "<",
            Self::RedirectOut => ">",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// A single token produced by parsing a command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// A word with all quoting and escaping already applied.
    Word(String),
    /// A control operator.
    Operator(Operator),
    /// A word that contained an unquoted `*` or `?`. The pattern is kept
    /// literal; no filesystem expansion happens here.
    Glob { pattern: String },
    /// Everything after an unquoted `#`, through the end of the line.
    Comment(String),
    /// A structured resolver value, inlined at its reference site.
    Embedded(serde_json::Value),
}

impl Token {
    /// The textual payload of a word-like token, regardless of how it was
    /// classified. Operators and embedded values have none.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Word(text) | Self::Comment(text) => Some(text),
            Self::Glob { pattern } => Some(pattern),
            Self::Operator(_) | Self::Embedded(_) => None,
        }
    }
}

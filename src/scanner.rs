//! Second pass: scan each word-candidate chunk into finished tokens.
//!
//! The scanner applies the quoting state machine. Single-quoted text is
//! copied verbatim, double-quoted text honors a small escape set and
//! variable substitution, and unquoted text honors the escape character,
//! substitution, comments, and glob detection. Operator chunks pass through
//! unchanged.

use std::fmt;

use crate::chunker::{chunk, ChunkKind, RawChunk};
use crate::resolver::{Resolver, VarValue};
use crate::token::Token;

/// Classifies a substitution failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `${}` with nothing between the braces.
    EmptySubstitution,
    /// `${name` with no closing brace before the end of the chunk. The
    /// fragment carries the unterminated reference as written.
    UnterminatedSubstitution { fragment: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySubstitution => f.write_str("bad substitution: ${}"),
            Self::UnterminatedSubstitution { fragment } => {
                write!(f, "bad substitution: {fragment}")
            }
        }
    }
}

/// Error raised by a malformed `${...}` substitution. All other inputs
/// tokenize without error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset of the offending `$` in the input.
    pub offset: usize,
}

/// Options accepted by [`parse_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// The escape character honored while scanning unquoted and
    /// double-quoted text. Chunk boundaries always pair on `\`.
    pub escape: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { escape: '\\' }
    }
}

/// Tokenize a command line, resolving variables through `resolver`.
///
/// # Errors
///
/// Returns [`ParseError`] when the line contains a malformed `${...}`
/// substitution. Unbalanced quotes are not an error: an open quote consumes
/// the rest of the input literally.
pub fn parse_with_options(
    input: &str,
    mut resolver: Resolver<'_>,
    options: &ParseOptions,
) -> Result<Vec<Token>, ParseError> {
    let chunks = chunk(input);
    let mut tokens = Vec::new();

    for (i, raw) in chunks.iter().enumerate() {
        match raw.kind {
            ChunkKind::Operator(op) => tokens.push(Token::Operator(op)),
            ChunkKind::Word => {
                let scanner = WordScanner::new(*raw, &mut resolver, options);
                match scanner.scan()? {
                    Scan::Words(mut words) => tokens.append(&mut words),
                    Scan::Comment { mut before, tail } => {
                        tokens.append(&mut before);
                        tokens.push(Token::Comment(comment_text(tail, &chunks[i + 1..])));
                        return Ok(tokens);
                    }
                }
            }
        }
    }

    Ok(tokens)
}

/// A comment swallows the rest of the line: its text is the tail of the
/// chunk it started in, joined with every following chunk by single spaces.
fn comment_text(tail: &str, rest: &[RawChunk<'_>]) -> String {
    let mut text = tail.to_string();
    for chunk in rest {
        text.push(' ');
        text.push_str(chunk.text);
    }
    text
}

/// Outcome of scanning one word chunk.
enum Scan<'a> {
    /// The chunk's finished tokens, in order.
    Words(Vec<Token>),
    /// The chunk hit an unquoted `#`. `before` holds tokens finished ahead
    /// of it; `tail` is the chunk text after the `#`.
    Comment { before: Vec<Token>, tail: &'a str },
}

/// Quote context while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// One fragment of a scanned chunk. Most chunks collapse to a single text
/// fragment; structured substitutions split them.
enum Part {
    Text(String),
    Value(serde_json::Value),
}

impl Part {
    fn into_token(self) -> Token {
        match self {
            Self::Text(text) => Token::Word(text),
            Self::Value(value) => Token::Embedded(value),
        }
    }
}

struct WordScanner<'a, 'r, 'v> {
    text: &'a str,
    /// Byte offset of the chunk within the original input.
    base: usize,
    pos: usize,
    escape: char,
    resolver: &'r mut Resolver<'v>,
    quote: Quote,
    saw_glob: bool,
    buf: String,
    parts: Vec<Part>,
}

impl<'a, 'r, 'v> WordScanner<'a, 'r, 'v> {
    fn new(raw: RawChunk<'a>, resolver: &'r mut Resolver<'v>, options: &ParseOptions) -> Self {
        Self {
            text: raw.text,
            base: raw.offset,
            pos: 0,
            escape: options.escape,
            resolver,
            quote: Quote::None,
            saw_glob: false,
            buf: String::new(),
            parts: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn scan(mut self) -> Result<Scan<'a>, ParseError> {
        let mut escaped = false;
        while let Some(c) = self.peek() {
            // The glob flag reacts to unquoted wildcards even when they are
            // escaped; only quoting suppresses it.
            if self.quote == Quote::None && (c == '*' || c == '?') {
                self.saw_glob = true;
            }
            if escaped {
                self.bump();
                self.buf.push(c);
                escaped = false;
                continue;
            }
            match self.quote {
                Quote::Single => {
                    self.bump();
                    if c == '\'' {
                        self.quote = Quote::None;
                    } else {
                        self.buf.push(c);
                    }
                }
                Quote::Double => {
                    if c == '"' {
                        self.bump();
                        self.quote = Quote::None;
                    } else if c == self.escape {
                        self.bump();
                        self.scan_double_quote_escape();
                    } else if c == '$' {
                        let at = self.pos;
                        self.bump();
                        self.substitute(at)?;
                    } else {
                        self.bump();
                        self.buf.push(c);
                    }
                }
                Quote::None => {
                    if c == self.escape {
                        self.bump();
                        escaped = true;
                    } else if c == '\'' {
                        self.bump();
                        self.quote = Quote::Single;
                    } else if c == '"' {
                        self.bump();
                        self.quote = Quote::Double;
                    } else if c == '$' {
                        let at = self.pos;
                        self.bump();
                        self.substitute(at)?;
                    } else if c == '#' {
                        self.bump();
                        let tail = self.rest();
                        let before = self.finish_before_comment();
                        return Ok(Scan::Comment { before, tail });
                    } else {
                        self.bump();
                        self.buf.push(c);
                    }
                }
            }
        }
        Ok(Scan::Words(self.finish()))
    }

    /// Inside double quotes the escape character unescapes only `"`, the
    /// escape character itself, and `$`. Before anything else both
    /// characters are kept.
    fn scan_double_quote_escape(&mut self) {
        match self.bump() {
            Some(next) if next == '"' || next == '$' || next == self.escape => {
                self.buf.push(next);
            }
            Some(next) => {
                self.buf.push(self.escape);
                self.buf.push(next);
            }
            None => self.buf.push(self.escape),
        }
    }

    /// Resolve one variable reference; the cursor sits just past the `$`.
    fn substitute(&mut self, dollar: usize) -> Result<(), ParseError> {
        let name = self.variable_name(dollar)?;
        match self.resolver.resolve(&name) {
            None => {}
            Some(VarValue::Text(text)) => self.buf.push_str(&text),
            Some(VarValue::Structured(value)) => {
                self.flush_text();
                self.parts.push(Part::Value(value));
            }
        }
        Ok(())
    }

    /// Extract the variable name after `$`: a braced name, a special
    /// single-character name, or the longest run of word characters
    /// (possibly empty).
    fn variable_name(&mut self, dollar: usize) -> Result<String, ParseError> {
        match self.peek() {
            Some('{') => {
                self.bump();
                if self.peek() == Some('}') {
                    return Err(self.error(ParseErrorKind::EmptySubstitution, dollar));
                }
                match self.rest().find('}') {
                    Some(end) => {
                        let name = self.rest()[..end].to_string();
                        self.pos += end + 1;
                        Ok(name)
                    }
                    None => {
                        let mut fragment = String::from("${");
                        fragment.push_str(self.rest());
                        let kind = ParseErrorKind::UnterminatedSubstitution { fragment };
                        Err(self.error(kind, dollar))
                    }
                }
            }
            Some(c) if is_special_name(c) => {
                self.bump();
                Ok(c.to_string())
            }
            _ => {
                let start = self.pos;
                while self
                    .peek()
                    .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    self.bump();
                }
                Ok(self.text[start..self.pos].to_string())
            }
        }
    }

    const fn error(&self, kind: ParseErrorKind, at: usize) -> ParseError {
        ParseError {
            kind,
            offset: self.base + at,
        }
    }

    fn flush_text(&mut self) {
        if !self.buf.is_empty() {
            self.parts.push(Part::Text(std::mem::take(&mut self.buf)));
        }
    }

    /// Finished tokens for a chunk scanned to its end.
    fn finish(mut self) -> Vec<Token> {
        if self.parts.is_empty() {
            // The common case: the whole chunk is one literal. An empty
            // literal is still a word; quoted empty strings produce one.
            let literal = std::mem::take(&mut self.buf);
            let token = if self.saw_glob {
                Token::Glob { pattern: literal }
            } else {
                Token::Word(literal)
            };
            return vec![token];
        }
        // A chunk split by structured substitutions: empty text fragments
        // drop out and the glob flag does not apply.
        self.flush_text();
        self.parts.into_iter().map(Part::into_token).collect()
    }

    /// Finished tokens for the part of a chunk ahead of a `#`. The pending
    /// literal becomes a plain word even when the glob flag was set, and
    /// nothing is emitted when it is empty.
    fn finish_before_comment(&mut self) -> Vec<Token> {
        self.flush_text();
        std::mem::take(&mut self.parts)
            .into_iter()
            .map(Part::into_token)
            .collect()
    }
}

/// Names resolved from exactly one character after `$`, ahead of the
/// word-character scan. `$_foo` references `_`, not `_foo`.
const fn is_special_name(c: char) -> bool {
    matches!(c, '*' | '@' | '#' | '?' | '$' | '!' | '_' | '-')
}

//! First pass over the input: split a command line into operator chunks and
//! word-candidate chunks.
//!
//! The chunker only finds boundaries. It understands just enough about
//! quoting to keep whitespace and metacharacters inside quoted spans, and
//! just enough about backslash to keep an escaped character inside its word
//! run. Everything else (escape processing, substitution, comments, globs)
//! is the scanner's job, which re-reads each chunk's text.

use crate::token::Operator;

/// Classification attached to each chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// A control operator, already identified by spelling.
    Operator(Operator),
    /// A word candidate: bareword text, quoted spans, and escape pairs with
    /// no intervening whitespace.
    Word,
}

/// A maximal substring of the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    pub kind: ChunkKind,
    /// The chunk's text, borrowed from the input. Word chunks keep their
    /// quote and escape characters; later passes strip them.
    pub text: &'a str,
    /// Byte offset of the chunk within the input.
    pub offset: usize,
}

/// Split an input line into operator and word-candidate chunks.
///
/// Whitespace between chunks separates them and is discarded. This pass is
/// total: every input, including one with unbalanced quotes, produces a
/// chunk list. An unterminated quote span extends to the end of the input.
#[must_use]
pub fn chunk(input: &str) -> Vec<RawChunk<'_>> {
    Chunker::new(input).run()
}

struct Chunker<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Chunker<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn run(mut self) -> Vec<RawChunk<'a>> {
        let mut chunks = Vec::new();
        loop {
            self.skip_whitespace();
            if self.pos >= self.bytes.len() {
                break;
            }
            let start = self.pos;
            let kind = match self.read_operator() {
                Some(op) => ChunkKind::Operator(op),
                None => {
                    self.read_word_run();
                    ChunkKind::Word
                }
            };
            chunks.push(RawChunk {
                kind,
                text: &self.input[start..self.pos],
                offset: start,
            });
        }
        chunks
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Recognize an operator at the cursor, longest spelling first.
    fn read_operator(&mut self) -> Option<Operator> {
        let (op, len) = match (self.peek()?, self.peek_at(1)) {
            (b'&', Some(b'&')) => (Operator::AndIf, 2),
            (b'|', Some(b'|')) => (Operator::OrIf, 2),
            (b';', Some(b';')) => (Operator::DoubleSemicolon, 2),
            (b'|', Some(b'&')) => (Operator::PipeAmpersand, 2),
            (b'&', _) => (Operator::Ampersand, 1),
            (b';', _) => (Operator::Semicolon, 1),
            (b'(', _) => (Operator::OpenParen, 1),
            (b')', _) => (Operator::CloseParen, 1),
            (b'|', _) => (Operator::Pipe, 1),
            (b'<', _) => (Operator::RedirectIn, 1),
            (b'>', _) => (Operator::RedirectOut, 1),
            _ => return None,
        };
        self.pos += len;
        Some(op)
    }

    /// Consume a maximal word-candidate run. The run ends at whitespace or
    /// an operator character; escape pairs and quote spans carry both over.
    fn read_word_run(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b if is_whitespace(b) || is_operator_byte(b) => break,
                b'\\' => {
                    // The pair stays in the run. A trailing backslash is
                    // consumed alone.
                    self.pos += 1;
                    if self.pos < self.bytes.len() {
                        self.pos += 1;
                    }
                }
                b'\'' | b'"' => self.read_quote_span(b),
                _ => self.pos += 1,
            }
        }
    }

    /// Consume a quote span: everything up to and including the next
    /// matching quote character. Backslashes inside the span are ordinary
    /// content. An unterminated span runs to the end of the input.
    fn read_quote_span(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(b) = self.peek() {
            self.pos += 1;
            if b == quote {
                return;
            }
        }
    }
}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

const fn is_operator_byte(b: u8) -> bool {
    matches!(b, b'&' | b';' | b'(' | b')' | b'|' | b'<' | b'>')
}

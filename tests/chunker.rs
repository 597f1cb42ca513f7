//! Chunk boundary tests: where word runs end and operators begin.

use shellquote_rs::{ChunkKind, Operator, chunk};

fn texts(input: &str) -> Vec<&str> {
    chunk(input).into_iter().map(|c| c.text).collect()
}

fn kinds(input: &str) -> Vec<ChunkKind> {
    chunk(input).into_iter().map(|c| c.kind).collect()
}

// -----------------------------------------------------------
// Whitespace handling.
// -----------------------------------------------------------

#[test]
fn chunk_empty_input() {
    assert!(chunk("").is_empty());
}

#[test]
fn chunk_mixed_whitespace_separators() {
    assert_eq!(texts("a \t b\r\nc\u{b}\u{c}d"), vec!["a", "b", "c", "d"]);
}

#[test]
fn chunk_leading_and_trailing_whitespace() {
    assert_eq!(texts("  ls  "), vec!["ls"]);
}

// -----------------------------------------------------------
// Operator recognition.
// -----------------------------------------------------------

#[test]
fn chunk_every_operator_spelling() {
    for (input, op) in [
        ("&&", Operator::AndIf),
        ("||", Operator::OrIf),
        (";;", Operator::DoubleSemicolon),
        ("|&", Operator::PipeAmpersand),
        ("&", Operator::Ampersand),
        (";", Operator::Semicolon),
        ("(", Operator::OpenParen),
        (")", Operator::CloseParen),
        ("|", Operator::Pipe),
        ("<", Operator::RedirectIn),
        (">", Operator::RedirectOut),
    ] {
        assert_eq!(kinds(input), vec![ChunkKind::Operator(op)], "input: {input}");
        assert_eq!(op.symbol(), input);
    }
}

#[test]
fn chunk_operators_bind_tighter_than_words() {
    assert_eq!(texts("a&&b|c"), vec!["a", "&&", "b", "|", "c"]);
}

#[test]
fn chunk_pipe_ampersand_then_ampersand() {
    // Longest match first: `|&` wins, the remaining `&` stands alone.
    assert_eq!(
        kinds("a|&&b"),
        vec![
            ChunkKind::Word,
            ChunkKind::Operator(Operator::PipeAmpersand),
            ChunkKind::Operator(Operator::Ampersand),
            ChunkKind::Word,
        ]
    );
}

#[test]
fn chunk_triple_ampersand() {
    assert_eq!(
        kinds("&&&"),
        vec![
            ChunkKind::Operator(Operator::AndIf),
            ChunkKind::Operator(Operator::Ampersand),
        ]
    );
}

#[test]
fn chunk_double_redirect_is_two_operators() {
    assert_eq!(
        kinds(">>out"),
        vec![
            ChunkKind::Operator(Operator::RedirectOut),
            ChunkKind::Operator(Operator::RedirectOut),
            ChunkKind::Word,
        ]
    );
}

#[test]
fn chunk_redirect_pair() {
    assert_eq!(
        kinds("<>"),
        vec![
            ChunkKind::Operator(Operator::RedirectIn),
            ChunkKind::Operator(Operator::RedirectOut),
        ]
    );
}

#[test]
fn chunk_empty_subshell() {
    assert_eq!(
        kinds("()"),
        vec![
            ChunkKind::Operator(Operator::OpenParen),
            ChunkKind::Operator(Operator::CloseParen),
        ]
    );
}

#[test]
fn chunk_operator_between_quoted_words() {
    assert_eq!(texts("'a'&&\"b\""), vec!["'a'", "&&", "\"b\""]);
}

#[test]
fn chunk_redirect_inside_word_splits_it() {
    assert_eq!(texts("ls>out"), vec!["ls", ">", "out"]);
}

// -----------------------------------------------------------
// Quote spans.
// -----------------------------------------------------------

#[test]
fn chunk_quotes_protect_operators_and_whitespace() {
    assert_eq!(texts("'a && b' \"c | d\""), vec!["'a && b'", "\"c | d\""]);
}

#[test]
fn chunk_abutting_quoted_segments() {
    assert_eq!(texts("'it'\"s\"fine"), vec!["'it'\"s\"fine"]);
}

#[test]
fn chunk_adjacent_empty_quotes() {
    assert_eq!(texts("''\"\""), vec!["''\"\""]);
}

#[test]
fn chunk_span_closes_at_first_matching_quote() {
    // A backslash inside a span is plain content, never a pair.
    assert_eq!(texts(r"'a\' b"), vec![r"'a\'", "b"]);
    assert_eq!(texts(r#""a\" b"#), vec![r#""a\""#, "b"]);
}

#[test]
fn chunk_other_quote_kind_is_plain_content() {
    assert_eq!(texts(r#"'say "hi"'"#), vec![r#"'say "hi"'"#]);
    assert_eq!(texts(r#""it's""#), vec![r#""it's""#]);
}

#[test]
fn chunk_unterminated_span_reaches_end_of_input() {
    assert_eq!(texts("\"a b c"), vec!["\"a b c"]);
    assert_eq!(texts("x 'y | z"), vec!["x", "'y | z"]);
}

// -----------------------------------------------------------
// Escape pairs.
// -----------------------------------------------------------

#[test]
fn chunk_escaped_whitespace_stays_in_run() {
    assert_eq!(texts(r"a\ b c"), vec![r"a\ b", "c"]);
}

#[test]
fn chunk_escaped_operator_stays_in_run() {
    assert_eq!(texts(r"a\|b \&"), vec![r"a\|b", r"\&"]);
}

#[test]
fn chunk_escaped_quote_does_not_open_a_span() {
    assert_eq!(texts(r"don\'t stop"), vec![r"don\'t", "stop"]);
}

#[test]
fn chunk_escaped_newline_stays_in_run() {
    assert_eq!(texts("a\\\nb"), vec!["a\\\nb"]);
}

#[test]
fn chunk_trailing_backslash() {
    assert_eq!(texts("x \\"), vec!["x", "\\"]);
}

// -----------------------------------------------------------
// Offsets.
// -----------------------------------------------------------

#[test]
fn chunk_offsets_count_bytes() {
    let chunks = chunk("héllo wörld");
    assert_eq!(chunks[0].offset, 0);
    // `é` is two bytes in UTF-8.
    assert_eq!(chunks[1].offset, 7);
    assert_eq!(chunks[1].text, "wörld");
}

#[test]
fn chunk_offsets_after_operators() {
    let chunks = chunk("ab|cd");
    let offsets: Vec<usize> = chunks.iter().map(|c| c.offset).collect();
    assert_eq!(offsets, vec![0, 2, 3]);
}

//! Render tokens back into a parseable command line.
//!
//! [`quote_word`] picks the lightest quoting that survives a round trip
//! through [`crate::parse`] with default options; [`join`] renders a whole
//! token sequence. Embedded values have no source form, so joining them is
//! lossy.

use crate::token::Token;

/// Characters that never need quoting.
const fn is_bare_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '.' | ',' | '_' | '-' | '/' | '=' | '+' | '%' | ':' | '@' | '^' | '~'
        )
}

/// Quote a single word so that parsing the result yields the word back.
///
/// Safe words pass through bare. Words without a single quote are wrapped
/// in single quotes, where everything is literal. Words containing a single
/// quote are wrapped in double quotes with `"`, `\` and `$` escaped.
#[must_use]
pub fn quote_word(word: &str) -> String {
    if word.is_empty() {
        return "''".to_string();
    }
    if word.chars().all(is_bare_safe) {
        return word.to_string();
    }
    if word.contains('\'') {
        let mut out = String::with_capacity(word.len() + 2);
        out.push('"');
        for c in word.chars() {
            if matches!(c, '"' | '\\' | '$') {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('"');
        return out;
    }
    format!("'{word}'")
}

/// Render a glob pattern with its wildcards left bare so the result parses
/// back to a glob. Everything else unsafe is backslash-escaped; quoting is
/// unusable here because it would demote the wildcards to literals.
fn quote_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if !(is_bare_safe(c) || c == '*' || c == '?') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render a token sequence into one command line, separated by single
/// spaces.
///
/// Words are quoted as needed, operators appear bare, glob patterns keep
/// their wildcards unquoted, comments render as `#` plus their text, and
/// embedded values render as their quoted JSON serialization. For token
/// sequences produced by [`crate::parse`], everything except embedded
/// values parses back to an equal sequence (a comment must be last, as
/// parsing guarantees).
#[must_use]
pub fn join(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if !out.is_empty() {
            out.push(' ');
        }
        match token {
            Token::Word(word) => out.push_str(&quote_word(word)),
            Token::Operator(op) => out.push_str(op.symbol()),
            Token::Glob { pattern } => out.push_str(&quote_glob(pattern)),
            Token::Comment(text) => {
                out.push('#');
                out.push_str(text);
            }
            Token::Embedded(value) => out.push_str(&quote_word(&value.to_string())),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Operator;

    #[test]
    fn safe_words_stay_bare() {
        assert_eq!(quote_word("abc"), "abc");
        assert_eq!(quote_word("-rf"), "-rf");
        assert_eq!(quote_word("a/b.c_d=e"), "a/b.c_d=e");
    }

    #[test]
    fn empty_word_is_quoted() {
        assert_eq!(quote_word(""), "''");
    }

    #[test]
    fn unsafe_words_get_single_quotes() {
        assert_eq!(quote_word("a b"), "'a b'");
        assert_eq!(quote_word("$HOME"), "'$HOME'");
        assert_eq!(quote_word("a\\b"), "'a\\b'");
        assert_eq!(quote_word("a#b"), "'a#b'");
    }

    #[test]
    fn words_with_single_quotes_get_double_quotes() {
        assert_eq!(quote_word("don't"), "\"don't\"");
        assert_eq!(quote_word("it's $x"), "\"it's \\$x\"");
        assert_eq!(quote_word("a\"'b"), "\"a\\\"'b\"");
    }

    #[test]
    fn join_separates_with_single_spaces() {
        let tokens = vec![
            Token::Word("echo".to_string()),
            Token::Word("a b".to_string()),
            Token::Operator(Operator::AndIf),
            Token::Word("done".to_string()),
        ];
        assert_eq!(join(&tokens), "echo 'a b' && done");
    }

    #[test]
    fn join_keeps_glob_wildcards_bare() {
        let tokens = vec![
            Token::Word("ls".to_string()),
            Token::Glob {
                pattern: "my docs/*.txt".to_string(),
            },
        ];
        assert_eq!(join(&tokens), r"ls my\ docs/*.txt");
    }

    #[test]
    fn join_renders_comments_last() {
        let tokens = vec![
            Token::Word("make".to_string()),
            Token::Comment(" build everything".to_string()),
        ];
        assert_eq!(join(&tokens), "make # build everything");
    }
}

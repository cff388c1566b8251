//! Text transforms used by the string walkthrough.
//!
//! Case conversion, whitespace trimming, and the quoted rendering that
//! [`crate::sequence::TokenList`] uses when it prints its tokens.

use std::fmt::Write as _;

/// Title-case every word.
///
/// A word is a run of alphabetic characters: the first letter of the run is
/// uppercased and the remaining letters are lowercased. Anything that is not
/// alphabetic (spaces, digits, punctuation) ends the current word.
///
/// ```
/// assert_eq!(listwalk::text::title_case("kyle david"), "Kyle David");
/// assert_eq!(listwalk::text::title_case("o'NEIL"), "O'Neil");
/// ```
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

pub fn upper(input: &str) -> String {
    input.to_uppercase()
}

pub fn lower(input: &str) -> String {
    input.to_lowercase()
}

/// Remove leading and trailing whitespace.
pub fn strip(input: &str) -> &str {
    input.trim()
}

/// Remove leading whitespace only.
pub fn lstrip(input: &str) -> &str {
    input.trim_start()
}

/// Remove trailing whitespace only.
pub fn rstrip(input: &str) -> &str {
    input.trim_end()
}

/// Render a token as a quoted literal.
///
/// Single quotes are used unless the token contains a single quote and no
/// double quote. Backslashes, the chosen quote, and control characters are
/// escaped so the rendering always fits on one line.
pub fn repr(input: &str) -> String {
    let quote = if input.contains('\'') && !input.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(input.len() + 2);
    out.push(quote);
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = c as u32;
                // Writing to a String cannot fail
                let _ = if code <= 0xff {
                    write!(out, "\\x{code:02x}")
                } else if code <= 0xffff {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

//! Value and parameter escaping.
//!
//! Raw values are first reduced to a stream of characters and line breaks:
//! CRLF, a lone CR and LF each count as one break, and control characters
//! other than tab are dropped. Each output context then decides how a break
//! and the special characters are written.

use crate::rfc::vcard::core::VCardVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Break,
    Char(char),
}

fn tokens(s: &str) -> impl Iterator<Item = Token> + '_ {
    let mut chars = s.chars().peekable();
    std::iter::from_fn(move || {
        loop {
            let c = chars.next()?;
            match c {
                '\r' => {
                    chars.next_if_eq(&'\n');
                    return Some(Token::Break);
                }
                '\n' => return Some(Token::Break),
                '\t' => return Some(Token::Char(c)),
                _ if c.is_control() => {}
                _ => return Some(Token::Char(c)),
            }
        }
    })
}

/// Escapes a text value for `version`.
///
/// 2.1 has no backslash escapes: separators pass through and each break
/// becomes a bare `\n`, to be quoted-printable encoded by the caller.
#[must_use]
pub fn escape(raw: &str, version: VCardVersion) -> String {
    if version.is_legacy() {
        tokens(raw)
            .map(|token| match token {
                Token::Break => '\n',
                Token::Char(c) => c,
            })
            .collect()
    } else {
        escape_text(raw)
    }
}

/// Backslash-escapes `\`, `,`, `;` and line breaks (3.0, 4.0).
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for token in tokens(s) {
        match token {
            Token::Break => out.push_str("\\n"),
            Token::Char(c @ ('\\' | ',' | ';')) => {
                out.push('\\');
                out.push(c);
            }
            Token::Char(c) => out.push(c),
        }
    }
    out
}

/// Escapes a parameter value with RFC 6868 carets.
///
/// Returns the escaped text and whether it must be written inside double
/// quotes (it holds `:`, `;`, `,` or an escaped `"`).
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut out = String::with_capacity(s.len());
    let mut quote = false;
    for token in tokens(s) {
        match token {
            Token::Break => out.push_str("^n"),
            Token::Char('^') => out.push_str("^^"),
            Token::Char('"') => {
                out.push_str("^'");
                quote = true;
            }
            Token::Char(c) => {
                quote |= matches!(c, ':' | ';' | ',');
                out.push(c);
            }
        }
    }
    (out, quote)
}

/// URIs are written verbatim apart from control characters, which cannot
/// appear in a URI and are dropped.
#[must_use]
pub fn escape_uri(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

#[must_use]
pub fn has_line_break(s: &str) -> bool {
    s.contains(['\r', '\n'])
}

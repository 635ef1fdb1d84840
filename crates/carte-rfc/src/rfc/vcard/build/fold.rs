//! vCard line folding.
//!
//! A logical line is cut into physical lines of at most `limit` octets.
//! Every continuation line starts with one space, which counts toward the
//! limit. Cuts only fall between atomic units: a UTF-8 character, a
//! backslash escape pair, a quoted-printable `=XX` triplet, or a 4-character
//! base64 quantum.

/// Prefix of a continuation line.
const CONTINUATION: char = ' ';

/// Line separator between physical lines.
pub const CRLF: &str = "\r\n";

/// Folds a logical line into physical lines (without line terminators).
#[must_use]
pub fn fold(line: &str, limit: usize) -> Vec<String> {
    fold_units(text_units(line), limit)
}

/// Folds a property head (name, parameters and `:`) followed by a base64
/// payload. The payload is cut only between 4-character quanta.
#[must_use]
pub fn fold_base64(head: &str, payload: &str, limit: usize) -> Vec<String> {
    fold_units(text_units(head).chain(base64_quanta(payload)), limit)
}

/// Folds a quoted-printable line. A literal space or tab stays attached to
/// the unit after it, so no physical line ends in whitespace that a reader
/// could strip.
#[must_use]
pub fn fold_quoted_printable(line: &str, limit: usize) -> Vec<String> {
    fold_units(qp_units(line), limit)
}

/// Folds a logical line and joins the physical lines with CRLF.
#[must_use]
pub fn fold_line(line: &str, limit: usize) -> String {
    fold(line, limit).join(CRLF)
}

fn fold_units<'a>(units: impl Iterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::with_capacity(limit);

    for unit in units {
        let fresh = if lines.is_empty() {
            current.is_empty()
        } else {
            current.len() == CONTINUATION.len_utf8()
        };

        // An oversized unit still goes on a line of its own
        if !fresh && current.len() + unit.len() > limit {
            lines.push(std::mem::take(&mut current));
            current.push(CONTINUATION);
        }
        current.push_str(unit);
    }

    lines.push(current);
    lines
}

/// Splits text into units that must not be separated by a fold.
fn text_units(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let mut chars = rest.chars();
        let first = chars.next()?;
        let mut len = first.len_utf8();

        match first {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    len += escaped.len_utf8();
                }
            }
            '=' => {
                let bytes = rest.as_bytes();
                if bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
                {
                    len = 3;
                }
            }
            _ => {}
        }

        let (unit, tail) = rest.split_at(len);
        rest = tail;
        Some(unit)
    })
}

/// Quoted-printable units: an `=XX` triplet or one character, with any run
/// of spaces and tabs before it merged in. Backslashes are literal here.
fn qp_units(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let lead = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        let atom = &rest[lead..];
        let bytes = atom.as_bytes();
        let len = match atom.chars().next() {
            None => 0,
            Some('=')
                if bytes.len() >= 3
                    && bytes[1].is_ascii_hexdigit()
                    && bytes[2].is_ascii_hexdigit() =>
            {
                3
            }
            Some(c) => c.len_utf8(),
        };
        if lead + len == 0 {
            return None;
        }
        let (unit, tail) = rest.split_at(lead + len);
        rest = tail;
        Some(unit)
    })
}

/// Splits a base64 payload into 4-character quanta. The alphabet is ASCII,
/// so every quantum is exactly four octets (the last may be shorter only if
/// the payload is malformed).
fn base64_quanta(payload: &str) -> impl Iterator<Item = &str> {
    let mut rest = payload;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let mut end = rest.len().min(4);
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        let (quantum, tail) = rest.split_at(end);
        rest = tail;
        Some(quantum)
    })
}

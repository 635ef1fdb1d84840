//! Quoted-printable encoding for vCard 2.1 values (RFC 2045 §6.7).
//!
//! 2.1 has no `\n` escape, so multi-line values are carried as
//! quoted-printable with the line breaks encoded as `=0D=0A`.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encodes a value as quoted-printable.
///
/// Line breaks (`\n`) become `=0D=0A`. `=`, control characters and every
/// non-ASCII byte become `=XX`. Whitespace that would end up at the end of
/// a line is encoded too, since readers may strip it.
///
/// No soft line breaks are produced; folding happens afterwards and keeps
/// each `=XX` triplet whole.
#[must_use]
pub fn qp_encode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(bytes.len() * 3 / 2);

    for (i, &b) in bytes.iter().enumerate() {
        let at_line_end = bytes.get(i + 1).is_none_or(|&next| next == b'\n');
        match b {
            b'\n' => out.push_str("=0D=0A"),
            b' ' | b'\t' if at_line_end => push_hex(&mut out, b),
            b' ' | b'\t' => out.push(char::from(b)),
            b'=' => push_hex(&mut out, b),
            0x21..=0x7e => out.push(char::from(b)),
            _ => push_hex(&mut out, b),
        }
    }

    out
}

fn push_hex(out: &mut String, b: u8) {
    out.push('=');
    out.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
    out.push(char::from(HEX_DIGITS[usize::from(b & 0x0f)]));
}

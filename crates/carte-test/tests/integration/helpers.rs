//! Helpers for inspecting rendered cards.

/// Joins continuation lines back onto their logical line.
pub fn unfold(card: &str) -> String {
    card.replace("\r\n ", "")
}

/// Physical lines without the trailing empty element after the last CRLF.
pub fn physical_lines(card: &str) -> Vec<&str> {
    card.strip_suffix("\r\n").unwrap_or(card).split("\r\n").collect()
}

/// Logical lines after unfolding.
pub fn logical_lines(card: &str) -> Vec<String> {
    physical_lines(&unfold(card))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The first logical line whose property name matches `name`.
pub fn find_property(card: &str, name: &str) -> Option<String> {
    logical_lines(card).into_iter().find(|line| {
        line.strip_prefix(name)
            .is_some_and(|rest| rest.starts_with(':') || rest.starts_with(';'))
    })
}

/// The value part of a logical line (after the first unquoted colon).
pub fn value_of(line: &str) -> &str {
    let mut quoted = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ':' if !quoted => return &line[i + 1..],
            _ => {}
        }
    }
    ""
}

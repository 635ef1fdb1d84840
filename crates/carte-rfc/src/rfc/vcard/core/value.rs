//! vCard value types.

use chrono::{DateTime, NaiveDate, Utc};

/// A vCard property value, before escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Text value, escaped on output.
    Text(String),

    /// Structured value (N, ADR, ORG). Components are escaped one by one and
    /// joined with `;`.
    Structured(Vec<String>),

    /// URI value. Not escaped; control characters are dropped.
    Uri(String),

    /// Calendar date (BDAY, ANNIVERSARY).
    Date(NaiveDate),

    /// UTC timestamp (REV).
    Timestamp(DateTime<Utc>),

    /// Base64 payload of an inline attachment. Never escaped.
    Binary(String),
}

impl VCardValue {
    /// Creates a structured value from optional components, empty ones
    /// becoming empty strings.
    #[must_use]
    pub fn structured<'a>(components: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self::Structured(
            components
                .into_iter()
                .map(|c| c.unwrap_or_default().to_string())
                .collect(),
        )
    }
}

//! Text field coercion.

use std::borrow::Cow;

/// A value accepted by any text field of the record.
///
/// Strings pass through unchanged; numbers are converted to their decimal
/// string form at assignment time, so a postal code set to `12345` and one set
/// to `"12345"` are indistinguishable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldText(String);

impl FieldText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns whether the value has no visible content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !has_content(&self.0)
    }
}

impl From<String> for FieldText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for FieldText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for FieldText {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<Cow<'_, str>> for FieldText {
    fn from(value: Cow<'_, str>) -> Self {
        Self(value.into_owned())
    }
}

impl From<char> for FieldText {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

macro_rules! numeric_field_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldText {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

numeric_field_text!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl AsRef<str> for FieldText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates chaining setters that coerce through [`FieldText`].
macro_rules! text_setters {
    ($($(#[$meta:meta])* $setter:ident => $field:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $setter(&mut self, value: impl Into<$crate::rfc::vcard::core::FieldText>) -> &mut Self {
                self.$field = Some(value.into().into_string());
                self
            }
        )*
    };
}

pub(crate) use text_setters;

/// Whether anything survives escaping: whitespace and control characters
/// alone render as nothing.
pub(crate) fn has_content(s: &str) -> bool {
    s.chars().any(|c| !c.is_whitespace() && !c.is_control())
}

/// Returns the field's text when it is present and not blank.
pub(crate) fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| has_content(s))
}

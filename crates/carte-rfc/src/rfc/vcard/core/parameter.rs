//! Property parameters.

/// Parameter names the serializer writes.
pub mod param_names {
    pub const TYPE: &str = "TYPE";
    pub const VALUE: &str = "VALUE";
    pub const ENCODING: &str = "ENCODING";
    pub const CHARSET: &str = "CHARSET";
    pub const LABEL: &str = "LABEL";
    pub const MEDIATYPE: &str = "MEDIATYPE";
}

/// One parameter of a property line.
///
/// `TYPE=home,work` is a single parameter with two values. 2.1 writes types
/// as nameless flags (`TEL;HOME;VOICE`); each flag is a parameter with
/// `name: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    pub name: Option<&'static str>,
    /// Unescaped; quoting and caret escaping happen on output.
    pub values: Vec<String>,
}

impl VCardParameter {
    fn named(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name: Some(name),
            values: vec![value.into()],
        }
    }

    /// `name=v1,v2,...`
    #[must_use]
    pub fn multi(name: &'static str, values: Vec<String>) -> Self {
        Self {
            name: Some(name),
            values,
        }
    }

    /// A nameless 2.1 flag such as `HOME` or `INTERNET`.
    #[must_use]
    pub fn bare(flag: impl Into<String>) -> Self {
        Self {
            name: None,
            values: vec![flag.into()],
        }
    }

    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::named(param_names::TYPE, value)
    }

    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::named(param_names::VALUE, type_name)
    }

    #[must_use]
    pub fn encoding(value: impl Into<String>) -> Self {
        Self::named(param_names::ENCODING, value)
    }

    #[must_use]
    pub fn charset(value: impl Into<String>) -> Self {
        Self::named(param_names::CHARSET, value)
    }

    /// The 4.0 `LABEL` parameter of ADR, holding the formatted address.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::named(param_names::LABEL, text)
    }

    #[must_use]
    pub fn mediatype(essence: impl Into<String>) -> Self {
        Self::named(param_names::MEDIATYPE, essence)
    }

    /// Case-insensitive name match. Flags never match.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.is_some_and(|n| n.eq_ignore_ascii_case(name))
    }
}

/// Parameter values shared across dialects.
pub mod types {
    pub const HOME: &str = "home";
    pub const WORK: &str = "work";
    pub const INTERNET: &str = "internet";

    pub const VOICE: &str = "voice";
    pub const FAX: &str = "fax";
    pub const CELL: &str = "cell";
    pub const PAGER: &str = "pager";

    pub const BASE64_LEGACY: &str = "BASE64";
    pub const BASE64: &str = "b";
    pub const QUOTED_PRINTABLE: &str = "QUOTED-PRINTABLE";
    pub const UTF_8: &str = "UTF-8";
}

//! A property line before escaping and folding.

use super::parameter::VCardParameter;
use super::value::VCardValue;

/// Name, parameters in output order, and the raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    pub name: &'static str,
    pub params: Vec<VCardParameter>,
    pub value: VCardValue,
}

impl VCardProperty {
    #[must_use]
    pub fn new(name: &'static str, params: Vec<VCardParameter>, value: VCardValue) -> Self {
        Self {
            name,
            params,
            value,
        }
    }

    /// The first parameter called `name`, ignoring case.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.is_named(name))
    }

    /// Appends `param` unless a parameter of that name is already set.
    /// Flags are always appended.
    pub fn ensure_param(&mut self, param: VCardParameter) {
        if param.name.is_some_and(|name| self.param(name).is_some()) {
            return;
        }
        self.params.push(param);
    }
}

/// Property names emitted by the serializer.
pub mod names {
    // Structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
    pub const VCARD: &str = "VCARD";

    // Identification
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const GENDER: &str = "GENDER";

    // Delivery addressing
    pub const ADR: &str = "ADR";
    pub const LABEL: &str = "LABEL";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";

    // Organizational
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const LOGO: &str = "LOGO";
    pub const ORG: &str = "ORG";

    // Explanatory
    pub const NOTE: &str = "NOTE";
    pub const REV: &str = "REV";
    pub const UID: &str = "UID";
    pub const URL: &str = "URL";
    pub const SOURCE: &str = "SOURCE";

    // Extensions
    pub const X_GENDER: &str = "X-GENDER";
    pub const X_ANNIVERSARY: &str = "X-ANNIVERSARY";
    pub const X_SOCIALPROFILE: &str = "X-SOCIALPROFILE";
}

//! Per-version property spelling.
//!
//! vCard 2.1, 3.0 and 4.0 disagree on property names, on how TYPE values are
//! written (`TEL;HOME;VOICE` vs `TEL;TYPE=HOME,VOICE` vs `TEL;TYPE=voice,home`),
//! on date formats and on how inline binary is declared. Every such decision
//! lives in this module so the serializer never branches on the version.

use chrono::{DateTime, NaiveDate, Utc};

use super::attachment::AttachmentSlot;
use super::media::MediaType;
use super::parameter::{VCardParameter, param_names, types};
use super::property::{VCardProperty, names};
use super::value::VCardValue;
use super::version::VCardVersion;

/// A logical property of the record, independent of version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    FormattedName,
    Name,
    Nickname,
    Gender,
    Uid,
    Birthday,
    Anniversary,
    HomeEmail,
    WorkEmail,
    OtherEmail,
    CellPhone,
    PagerPhone,
    HomePhone,
    WorkPhone,
    HomeFax,
    WorkFax,
    OtherPhone,
    HomeLabel,
    HomeAddress,
    WorkLabel,
    WorkAddress,
    Title,
    Role,
    Organization,
    Url,
    WorkUrl,
    Note,
    SocialProfile,
    Source,
    Revision,
}

/// Name and fixed parameters of a property in one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTemplate {
    pub name: &'static str,
    pub params: Vec<VCardParameter>,
}

impl PropertyTemplate {
    fn plain(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
        }
    }

    fn with(name: &'static str, params: Vec<VCardParameter>) -> Self {
        Self { name, params }
    }

    /// Builds a property carrying `value`.
    #[must_use]
    pub fn property(self, value: VCardValue) -> VCardProperty {
        VCardProperty::new(self.name, self.params, value)
    }
}

/// How an attachment appears in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentEncoding {
    /// Base64 payload inline.
    Inline,
    /// URI reference to remote content.
    Reference,
}

/// The property table of one vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    version: VCardVersion,
}

impl Dialect {
    #[must_use]
    pub const fn new(version: VCardVersion) -> Self {
        Self { version }
    }

    #[must_use]
    pub const fn version(self) -> VCardVersion {
        self.version
    }

    /// Returns the template for a property, or `None` when the dialect has
    /// no separate line for it (4.0 moves address labels into ADR).
    #[must_use]
    pub fn template(self, kind: PropertyKind) -> Option<PropertyTemplate> {
        match self.version {
            VCardVersion::V2_1 => Some(legacy_template(kind)),
            VCardVersion::V3 => Some(v3_template(kind)),
            VCardVersion::V4 => v4_template(kind),
        }
    }

    /// Returns the ADR template for a block, with the 4.0 LABEL parameter
    /// attached when a label is given.
    #[must_use]
    pub fn address_template(self, work: bool, label: Option<&str>) -> Option<PropertyTemplate> {
        let kind = if work {
            PropertyKind::WorkAddress
        } else {
            PropertyKind::HomeAddress
        };
        let mut template = self.template(kind)?;
        if self.version == VCardVersion::V4
            && let Some(label) = label
        {
            template.params.push(VCardParameter::label(label));
        }
        Some(template)
    }

    /// Returns the template for an X-SOCIALPROFILE line of the given type.
    #[must_use]
    pub fn social_template(self, type_name: &str) -> Option<PropertyTemplate> {
        let mut template = self.template(PropertyKind::SocialProfile)?;
        template.params.push(VCardParameter::type_param(type_name));
        Some(template)
    }

    /// Returns the PHOTO/LOGO template.
    ///
    /// | version | inline                            | reference              |
    /// |---------|-----------------------------------|------------------------|
    /// | 2.1     | `ENCODING=BASE64;TYPE=PNG`        | `VALUE=URL;TYPE=PNG`   |
    /// | 3.0     | `ENCODING=b;TYPE=PNG`             | `VALUE=uri;TYPE=PNG`   |
    /// | 4.0     | `ENCODING=b;MEDIATYPE=image/png`  | `MEDIATYPE=image/png`  |
    #[must_use]
    pub fn attachment_template(
        self,
        slot: AttachmentSlot,
        encoding: AttachmentEncoding,
        media_type: Option<&MediaType>,
    ) -> PropertyTemplate {
        let mut params = Vec::new();
        match (self.version, encoding) {
            (VCardVersion::V2_1, AttachmentEncoding::Inline) => {
                params.push(VCardParameter::encoding(types::BASE64_LEGACY));
            }
            (VCardVersion::V3, AttachmentEncoding::Inline)
            | (VCardVersion::V4, AttachmentEncoding::Inline) => {
                params.push(VCardParameter::encoding(types::BASE64));
            }
            (VCardVersion::V2_1, AttachmentEncoding::Reference) => {
                params.push(VCardParameter::value_type("URL"));
            }
            (VCardVersion::V3, AttachmentEncoding::Reference) => {
                params.push(VCardParameter::value_type("uri"));
            }
            (VCardVersion::V4, AttachmentEncoding::Reference) => {}
        }

        if let Some(media_type) = media_type {
            params.push(match self.version {
                VCardVersion::V4 => VCardParameter::mediatype(media_type.essence()),
                VCardVersion::V2_1 | VCardVersion::V3 => {
                    VCardParameter::type_param(media_type.short_name())
                }
            });
        }

        PropertyTemplate::with(slot.property_name(), params)
    }

    /// Returns the value of a telephone property. 4.0 writes numbers as
    /// `tel:` URIs; older versions as plain text.
    #[must_use]
    pub fn telephone_value(self, number: &str) -> VCardValue {
        match self.version {
            VCardVersion::V4 => VCardValue::Uri(format!("tel:{number}")),
            VCardVersion::V2_1 | VCardVersion::V3 => VCardValue::Text(number.to_string()),
        }
    }

    /// Formats a calendar date.
    #[must_use]
    pub fn format_date(self, date: NaiveDate) -> String {
        match self.version {
            VCardVersion::V3 => date.format("%Y-%m-%d").to_string(),
            VCardVersion::V2_1 | VCardVersion::V4 => date.format("%Y%m%d").to_string(),
        }
    }

    /// Formats a UTC timestamp.
    #[must_use]
    pub fn format_timestamp(self, at: DateTime<Utc>) -> String {
        match self.version {
            VCardVersion::V3 => at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            VCardVersion::V2_1 | VCardVersion::V4 => at.format("%Y%m%dT%H%M%SZ").to_string(),
        }
    }
}

/// `TEL;HOME;VOICE` style: one bare uppercase parameter per type.
fn bare(name: &'static str, type_values: &[&str]) -> PropertyTemplate {
    PropertyTemplate::with(
        name,
        type_values
            .iter()
            .map(|t| VCardParameter::bare(t.to_ascii_uppercase()))
            .collect(),
    )
}

/// `TEL;TYPE=HOME,VOICE` style.
fn typed_upper(name: &'static str, type_values: &[&str]) -> PropertyTemplate {
    PropertyTemplate::with(
        name,
        vec![VCardParameter::multi(
            param_names::TYPE,
            type_values.iter().map(|t| t.to_ascii_uppercase()).collect(),
        )],
    )
}

/// `TEL;TYPE=voice,home` style.
fn typed_lower(name: &'static str, type_values: &[&str]) -> PropertyTemplate {
    PropertyTemplate::with(
        name,
        vec![VCardParameter::multi(
            param_names::TYPE,
            type_values.iter().map(|t| (*t).to_string()).collect(),
        )],
    )
}

fn legacy_template(kind: PropertyKind) -> PropertyTemplate {
    use PropertyKind as K;
    use types::{CELL, FAX, HOME, INTERNET, PAGER, VOICE, WORK};

    match kind {
        K::FormattedName => PropertyTemplate::with(
            names::FN,
            vec![VCardParameter::charset(types::UTF_8)],
        ),
        K::Name => PropertyTemplate::with(names::N, vec![VCardParameter::charset(types::UTF_8)]),
        K::Gender => PropertyTemplate::plain(names::X_GENDER),
        K::Anniversary => PropertyTemplate::plain(names::X_ANNIVERSARY),
        K::HomeEmail => bare(names::EMAIL, &[HOME, INTERNET]),
        K::WorkEmail => bare(names::EMAIL, &[WORK, INTERNET]),
        K::OtherEmail => bare(names::EMAIL, &[INTERNET]),
        K::CellPhone => bare(names::TEL, &[CELL]),
        K::PagerPhone => bare(names::TEL, &[PAGER]),
        K::HomePhone => bare(names::TEL, &[HOME, VOICE]),
        K::WorkPhone => bare(names::TEL, &[WORK, VOICE]),
        K::HomeFax => bare(names::TEL, &[HOME, FAX]),
        K::WorkFax => bare(names::TEL, &[WORK, FAX]),
        K::OtherPhone => bare(names::TEL, &[VOICE]),
        K::HomeLabel => bare(names::LABEL, &[HOME]),
        K::HomeAddress => bare(names::ADR, &[HOME]),
        K::WorkLabel => bare(names::LABEL, &[WORK]),
        K::WorkAddress => bare(names::ADR, &[WORK]),
        K::WorkUrl => bare(names::URL, &[WORK]),
        other => shared_template(other),
    }
}

fn v3_template(kind: PropertyKind) -> PropertyTemplate {
    use PropertyKind as K;
    use types::{CELL, FAX, HOME, INTERNET, PAGER, VOICE, WORK};

    match kind {
        K::Gender => PropertyTemplate::plain(names::X_GENDER),
        K::Anniversary => PropertyTemplate::plain(names::X_ANNIVERSARY),
        K::HomeEmail => typed_upper(names::EMAIL, &[HOME, INTERNET]),
        K::WorkEmail => typed_upper(names::EMAIL, &[WORK, INTERNET]),
        K::OtherEmail => typed_upper(names::EMAIL, &[INTERNET]),
        K::CellPhone => typed_upper(names::TEL, &[CELL]),
        K::PagerPhone => typed_upper(names::TEL, &[PAGER]),
        K::HomePhone => typed_upper(names::TEL, &[HOME, VOICE]),
        K::WorkPhone => typed_upper(names::TEL, &[WORK, VOICE]),
        K::HomeFax => typed_upper(names::TEL, &[HOME, FAX]),
        K::WorkFax => typed_upper(names::TEL, &[WORK, FAX]),
        K::OtherPhone => typed_upper(names::TEL, &[VOICE]),
        K::HomeLabel => typed_upper(names::LABEL, &[HOME]),
        K::HomeAddress => typed_upper(names::ADR, &[HOME]),
        K::WorkLabel => typed_upper(names::LABEL, &[WORK]),
        K::WorkAddress => typed_upper(names::ADR, &[WORK]),
        K::WorkUrl => typed_upper(names::URL, &[WORK]),
        other => shared_template(other),
    }
}

fn v4_template(kind: PropertyKind) -> Option<PropertyTemplate> {
    use PropertyKind as K;
    use types::{CELL, FAX, HOME, PAGER, VOICE, WORK};

    let uri_tel = |type_values: &[&str]| {
        let mut template = typed_lower(names::TEL, type_values);
        template.params.insert(0, VCardParameter::value_type("uri"));
        template
    };

    Some(match kind {
        K::Gender => PropertyTemplate::plain(names::GENDER),
        K::Anniversary => PropertyTemplate::plain(names::ANNIVERSARY),
        K::HomeEmail => typed_lower(names::EMAIL, &[HOME]),
        K::WorkEmail => typed_lower(names::EMAIL, &[WORK]),
        K::OtherEmail => PropertyTemplate::plain(names::EMAIL),
        K::CellPhone => uri_tel(&[VOICE, CELL]),
        K::PagerPhone => uri_tel(&[PAGER]),
        K::HomePhone => uri_tel(&[VOICE, HOME]),
        K::WorkPhone => uri_tel(&[VOICE, WORK]),
        K::HomeFax => uri_tel(&[FAX, HOME]),
        K::WorkFax => uri_tel(&[FAX, WORK]),
        K::OtherPhone => uri_tel(&[VOICE]),
        K::HomeLabel | K::WorkLabel => return None,
        K::HomeAddress => typed_lower(names::ADR, &[HOME]),
        K::WorkAddress => typed_lower(names::ADR, &[WORK]),
        K::WorkUrl => typed_lower(names::URL, &[WORK]),
        other => shared_template(other),
    })
}

/// Properties spelled the same in every version.
fn shared_template(kind: PropertyKind) -> PropertyTemplate {
    use PropertyKind as K;

    PropertyTemplate::plain(match kind {
        K::FormattedName => names::FN,
        K::Name => names::N,
        K::Nickname => names::NICKNAME,
        K::Gender => names::X_GENDER,
        K::Uid => names::UID,
        K::Birthday => names::BDAY,
        K::Anniversary => names::X_ANNIVERSARY,
        K::HomeEmail | K::WorkEmail | K::OtherEmail => names::EMAIL,
        K::CellPhone
        | K::PagerPhone
        | K::HomePhone
        | K::WorkPhone
        | K::HomeFax
        | K::WorkFax
        | K::OtherPhone => names::TEL,
        K::HomeLabel | K::WorkLabel => names::LABEL,
        K::HomeAddress | K::WorkAddress => names::ADR,
        K::Title => names::TITLE,
        K::Role => names::ROLE,
        K::Organization => names::ORG,
        K::Url | K::WorkUrl => names::URL,
        K::Note => names::NOTE,
        K::SocialProfile => names::X_SOCIALPROFILE,
        K::Source => names::SOURCE,
        K::Revision => names::REV,
    })
}

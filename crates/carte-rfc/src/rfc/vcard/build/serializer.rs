//! vCard serialization.

use carte_core::config::RenderConfig;
use carte_core::constants::DEFAULT_LINE_WIDTH;

use super::escape::{escape, escape_param_value, escape_uri, has_line_break};
use super::fold::{CRLF, fold, fold_base64, fold_quoted_printable};
use super::quoted_printable::qp_encode;
use crate::error::RfcResult;
use crate::rfc::vcard::attach::{AttachmentFetcher, AttachmentOutput, MaterializedAttachments};
use crate::rfc::vcard::core::{
    AddressBlock, AttachmentEncoding, AttachmentSlot, ContactRecord, Dialect, PropertyKind,
    VCardParameter, VCardProperty, VCardValue, VCardVersion, names, present, types,
};

/// Output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Folding limit in octets, continuation space included.
    pub line_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            line_width: config.line_width,
        }
    }
}

/// Renders a record, fetching remote attachments through `fetcher`.
///
/// ## Errors
/// Fails if an attachment cannot be fetched or its media type cannot be
/// resolved. Nothing is produced in that case.
pub async fn render<F: AttachmentFetcher>(
    record: &ContactRecord,
    fetcher: &F,
) -> RfcResult<String> {
    render_with_options(record, fetcher, RenderOptions::default()).await
}

/// Renders a record with explicit options.
///
/// ## Errors
/// As [`render`].
#[tracing::instrument(skip(record, fetcher), fields(version = %record.version))]
pub async fn render_with_options<F: AttachmentFetcher>(
    record: &ContactRecord,
    fetcher: &F,
    options: RenderOptions,
) -> RfcResult<String> {
    let attachments = MaterializedAttachments::fetched(record, fetcher).await?;
    Ok(compose(record, &attachments, options))
}

/// Renders a record whose attachments are embedded (or unset).
///
/// ## Errors
/// Returns `RfcError::FetchFailure` if an attachment still references
/// remote content, and `RfcError::UnknownMediaType` if embedded content
/// has no resolvable type.
#[tracing::instrument(skip(record), fields(version = %record.version))]
pub fn render_embedded(record: &ContactRecord) -> RfcResult<String> {
    let attachments = MaterializedAttachments::embedded(record)?;
    Ok(compose(record, &attachments, RenderOptions::default()))
}

/// Renders a record, writing remote attachments as URI references instead
/// of fetching them.
///
/// ## Errors
/// Returns `RfcError::UnknownMediaType` if embedded content has no
/// resolvable type. Remote attachments never fail.
#[tracing::instrument(skip(record), fields(version = %record.version))]
pub fn render_linked(record: &ContactRecord) -> RfcResult<String> {
    let attachments = MaterializedAttachments::linked(record)?;
    Ok(compose(record, &attachments, RenderOptions::default()))
}

/// Composes the card from a record and its resolved attachments.
///
/// Pure: the same inputs always produce the same text.
#[must_use]
pub fn compose(
    record: &ContactRecord,
    attachments: &MaterializedAttachments,
    options: RenderOptions,
) -> String {
    let mut card = CardWriter::new(record.version, options.line_width);

    card.raw(names::BEGIN, names::VCARD);
    card.raw(names::VERSION, record.version.as_str());

    card.text(PropertyKind::FormattedName, record.formatted_name.as_ref());
    write_name(&mut card, record);
    card.text(PropertyKind::Nickname, record.nickname.as_ref());
    card.text(PropertyKind::Gender, record.gender.as_ref());
    card.text(PropertyKind::Uid, record.uid.as_ref());
    if let Some(date) = record.birthday {
        card.value(PropertyKind::Birthday, VCardValue::Date(date));
    }
    if let Some(date) = record.anniversary {
        card.value(PropertyKind::Anniversary, VCardValue::Date(date));
    }

    card.text(PropertyKind::HomeEmail, record.email.as_ref());
    card.text(PropertyKind::WorkEmail, record.work_email.as_ref());
    card.text(PropertyKind::OtherEmail, record.other_email.as_ref());

    card.attachment(AttachmentSlot::Logo, attachments.logo.as_ref());
    card.attachment(AttachmentSlot::Photo, attachments.photo.as_ref());

    for (kind, number) in [
        (PropertyKind::CellPhone, &record.cell_phone),
        (PropertyKind::PagerPhone, &record.pager_phone),
        (PropertyKind::HomePhone, &record.home_phone),
        (PropertyKind::WorkPhone, &record.work_phone),
        (PropertyKind::HomeFax, &record.home_fax),
        (PropertyKind::WorkFax, &record.work_fax),
        (PropertyKind::OtherPhone, &record.other_phone),
    ] {
        card.telephone(kind, number.as_ref());
    }

    card.address(&record.home_address, false);
    card.address(&record.work_address, true);

    card.text(PropertyKind::Title, record.title.as_ref());
    card.text(PropertyKind::Role, record.role.as_ref());
    if let Some(org) = present(record.organization.as_ref()) {
        card.value(
            PropertyKind::Organization,
            VCardValue::Structured(vec![org.to_string()]),
        );
    }

    card.uri(PropertyKind::Url, record.url.as_ref());
    card.uri(PropertyKind::WorkUrl, record.work_url.as_ref());
    card.text(PropertyKind::Note, record.note.as_ref());

    for entry in record.social.entries() {
        if let Some(template) = card.dialect.social_template(entry.type_name) {
            card.property(template.property(VCardValue::Uri(entry.url.to_string())));
        }
    }

    card.uri(PropertyKind::Source, record.source.as_ref());
    if let Some(at) = record.revision {
        card.value(PropertyKind::Revision, VCardValue::Timestamp(at));
    }

    card.raw(names::END, names::VCARD);

    tracing::debug!(
        properties = card.properties,
        bytes = card.output.len(),
        "Composed vCard"
    );
    card.output
}

fn write_name(card: &mut CardWriter, record: &ContactRecord) {
    let parts = [
        present(record.last_name.as_ref()),
        present(record.first_name.as_ref()),
        present(record.middle_name.as_ref()),
        present(record.name_prefix.as_ref()),
        present(record.name_suffix.as_ref()),
    ];
    if parts.iter().any(Option::is_some) {
        card.value(PropertyKind::Name, VCardValue::structured(parts));
    }
}

/// Accumulates folded, CRLF-terminated lines for one card.
struct CardWriter {
    dialect: Dialect,
    width: usize,
    output: String,
    properties: usize,
}

impl CardWriter {
    fn new(version: VCardVersion, width: usize) -> Self {
        Self {
            dialect: Dialect::new(version),
            width,
            output: String::new(),
            properties: 0,
        }
    }

    fn raw(&mut self, name: &str, value: &str) {
        for line in fold(&format!("{name}:{value}"), self.width) {
            self.output.push_str(&line);
            self.output.push_str(CRLF);
        }
    }

    fn text(&mut self, kind: PropertyKind, value: Option<&String>) {
        if let Some(value) = present(value) {
            self.value(kind, VCardValue::Text(value.to_string()));
        }
    }

    fn uri(&mut self, kind: PropertyKind, value: Option<&String>) {
        if let Some(value) = present(value) {
            self.value(kind, VCardValue::Uri(value.to_string()));
        }
    }

    fn telephone(&mut self, kind: PropertyKind, number: Option<&String>) {
        if let Some(number) = present(number) {
            let value = self.dialect.telephone_value(number);
            self.value(kind, value);
        }
    }

    fn value(&mut self, kind: PropertyKind, value: VCardValue) {
        if let Some(template) = self.dialect.template(kind) {
            self.property(template.property(value));
        }
    }

    /// Writes the LABEL line (before 4.0) and the ADR line of one block.
    ///
    /// 4.0 carries the label as a parameter, so a label-only block still
    /// produces an ADR line with empty components there.
    fn address(&mut self, address: &AddressBlock, work: bool) {
        let label = address.label();
        if let Some(label) = label {
            let kind = if work {
                PropertyKind::WorkLabel
            } else {
                PropertyKind::HomeLabel
            };
            self.value(kind, VCardValue::Text(label.to_string()));
        }

        let label_in_adr = self.dialect.template(PropertyKind::HomeLabel).is_none();
        if address.has_components() || (label_in_adr && label.is_some()) {
            if let Some(template) = self.dialect.address_template(work, label) {
                let value = VCardValue::structured(address.components());
                self.property(template.property(value));
            }
        }
    }

    fn attachment(&mut self, slot: AttachmentSlot, output: Option<&AttachmentOutput>) {
        match output {
            None => {}
            Some(AttachmentOutput::Inline(encoded)) => {
                let template = self.dialect.attachment_template(
                    slot,
                    AttachmentEncoding::Inline,
                    Some(&encoded.media_type),
                );
                self.property(template.property(VCardValue::Binary(encoded.payload.clone())));
            }
            Some(AttachmentOutput::Reference { url, media_type }) => {
                let template = self.dialect.attachment_template(
                    slot,
                    AttachmentEncoding::Reference,
                    media_type.as_ref(),
                );
                self.property(template.property(VCardValue::Uri(url.clone())));
            }
        }
    }

    fn property(&mut self, mut prop: VCardProperty) {
        let version = self.dialect.version();

        // 2.1 carries line breaks as quoted-printable
        let legacy_encode = |escaped: String| {
            if version.is_legacy() && has_line_break(&escaped) {
                (qp_encode(&escaped), true)
            } else {
                (escaped, false)
            }
        };

        let (value, quoted_printable) = match &prop.value {
            VCardValue::Text(text) => legacy_encode(escape(text, version)),
            VCardValue::Structured(components) => legacy_encode(
                components
                    .iter()
                    .map(|c| escape(c, version))
                    .collect::<Vec<_>>()
                    .join(";"),
            ),
            VCardValue::Uri(uri) => (escape_uri(uri), false),
            VCardValue::Date(date) => (self.dialect.format_date(*date), false),
            VCardValue::Timestamp(at) => (self.dialect.format_timestamp(*at), false),
            VCardValue::Binary(payload) => {
                let head = serialize_head(&prop);
                let lines = fold_base64(&head, payload, self.width);
                self.push_lines(lines);
                return;
            }
        };

        if value.is_empty() {
            return;
        }
        if quoted_printable {
            prop.ensure_param(VCardParameter::encoding(types::QUOTED_PRINTABLE));
            prop.ensure_param(VCardParameter::charset(types::UTF_8));
        }

        let mut line = serialize_head(&prop);
        line.push_str(&value);
        let lines = if quoted_printable {
            fold_quoted_printable(&line, self.width)
        } else {
            fold(&line, self.width)
        };
        self.push_lines(lines);
    }

    fn push_lines(&mut self, lines: Vec<String>) {
        for line in lines {
            self.output.push_str(&line);
            self.output.push_str(CRLF);
        }
        self.properties += 1;
    }
}

/// Writes `NAME;PARAM=...:`.
fn serialize_head(prop: &VCardProperty) -> String {
    let mut head = prop.name.to_string();
    for param in &prop.params {
        serialize_parameter(param, &mut head);
    }
    head.push(':');
    head
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    if let Some(name) = param.name {
        output.push_str(name);
        output.push('=');
    }

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}

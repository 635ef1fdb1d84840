//! Attachment materialization: bytes to base64 plus a resolved media type.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::fetch::{AttachmentFetcher, FetchError};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::{Attachment, AttachmentSlot, AttachmentSource, ContactRecord, MediaType};

/// An attachment ready to be written inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAttachment {
    /// Standard-alphabet base64, padded, without line breaks.
    pub payload: String,
    pub media_type: MediaType,
}

/// How an attachment ends up in the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentOutput {
    /// Base64 payload written inline.
    Inline(EncodedAttachment),
    /// Remote content left for the consumer to fetch.
    Reference {
        url: String,
        media_type: Option<MediaType>,
    },
}

/// The photo and logo of one record, resolved before composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializedAttachments {
    pub photo: Option<AttachmentOutput>,
    pub logo: Option<AttachmentOutput>,
}

impl MaterializedAttachments {
    #[must_use]
    pub fn get(&self, slot: AttachmentSlot) -> Option<&AttachmentOutput> {
        match slot {
            AttachmentSlot::Photo => self.photo.as_ref(),
            AttachmentSlot::Logo => self.logo.as_ref(),
        }
    }

    /// Resolves both attachments without any network access: embedded
    /// content is encoded, remote content becomes a URI reference.
    ///
    /// ## Errors
    /// Returns `RfcError::UnknownMediaType` if embedded content has no
    /// declared type and none can be detected.
    pub fn linked(record: &ContactRecord) -> RfcResult<Self> {
        let resolve = |slot: AttachmentSlot| -> RfcResult<Option<AttachmentOutput>> {
            Ok(match record.attachment(slot).source() {
                None => None,
                Some(AttachmentSource::Remote { url, media_type }) => {
                    Some(AttachmentOutput::Reference {
                        url: url.clone(),
                        media_type: media_type
                            .clone()
                            .or_else(|| MediaType::from_url_extension(url)),
                    })
                }
                Some(AttachmentSource::Embedded { data, media_type }) => Some(
                    AttachmentOutput::Inline(encode(slot, data, media_type.as_ref(), None, None)?),
                ),
            })
        };

        Ok(Self {
            photo: resolve(AttachmentSlot::Photo)?,
            logo: resolve(AttachmentSlot::Logo)?,
        })
    }

    /// Encodes both attachments inline without any network access.
    ///
    /// ## Errors
    /// Returns `RfcError::FetchFailure` with [`FetchError::Unavailable`] if
    /// an attachment still references remote content.
    pub fn embedded(record: &ContactRecord) -> RfcResult<Self> {
        let resolve = |slot: AttachmentSlot| {
            let attachment = record.attachment(slot);
            if attachment.is_set() {
                materialize_embedded(slot, attachment)
                    .map(AttachmentOutput::Inline)
                    .map(Some)
            } else {
                Ok(None)
            }
        };

        Ok(Self {
            photo: resolve(AttachmentSlot::Photo)?,
            logo: resolve(AttachmentSlot::Logo)?,
        })
    }

    /// Encodes both attachments inline, fetching remote content through
    /// `fetcher`. Both fetches run concurrently; the first failure wins.
    ///
    /// ## Errors
    /// Propagates the first error of either attachment.
    pub async fn fetched<F: AttachmentFetcher>(
        record: &ContactRecord,
        fetcher: &F,
    ) -> RfcResult<Self> {
        let resolve = |slot: AttachmentSlot| async move {
            let attachment = record.attachment(slot);
            if attachment.is_set() {
                materialize(slot, attachment, fetcher)
                    .await
                    .map(AttachmentOutput::Inline)
                    .map(Some)
            } else {
                Ok(None)
            }
        };

        let (photo, logo) = futures::future::try_join(
            resolve(AttachmentSlot::Photo),
            resolve(AttachmentSlot::Logo),
        )
        .await?;

        Ok(Self { photo, logo })
    }
}

/// Materializes one attachment into a base64 payload and media type.
///
/// ## Summary
/// Embedded bytes are encoded directly. Remote content is retrieved through
/// `fetcher` first. The media type is the declared one when given, else the
/// fetched `Content-Type`, else the type detected from the bytes, else the
/// URL extension.
///
/// ## Errors
/// - `RfcError::AttachmentUnset` if no source is set
/// - `RfcError::FetchFailure` if the fetch fails
/// - `RfcError::UnknownMediaType` if no media type can be resolved
#[tracing::instrument(skip(attachment, fetcher), fields(remote = attachment.is_remote()))]
pub async fn materialize<F: AttachmentFetcher>(
    slot: AttachmentSlot,
    attachment: &Attachment,
    fetcher: &F,
) -> RfcResult<EncodedAttachment> {
    let source = attachment
        .source()
        .ok_or(RfcError::AttachmentUnset { slot })?;
    let declared = source.declared_media_type();
    match source {
        AttachmentSource::Embedded { data, .. } => encode(slot, data, declared, None, None),
        AttachmentSource::Remote { url, .. } => {
            let fetched = fetcher.fetch(url, declared).await.map_err(|err| {
                tracing::warn!(%slot, %url, error = %err, "Attachment fetch failed");
                RfcError::FetchFailure {
                    slot,
                    url: url.clone(),
                    source: err,
                }
            })?;

            tracing::debug!(%slot, bytes = fetched.bytes.len(), "Fetched attachment");
            encode(
                slot,
                &fetched.bytes,
                declared,
                fetched.content_type.as_deref(),
                Some(url.as_str()),
            )
        }
    }
}

/// Materializes an attachment that needs no fetch.
///
/// ## Errors
/// As [`materialize`]; remote content fails with `RfcError::FetchFailure`
/// carrying [`FetchError::Unavailable`].
pub fn materialize_embedded(
    slot: AttachmentSlot,
    attachment: &Attachment,
) -> RfcResult<EncodedAttachment> {
    let source = attachment
        .source()
        .ok_or(RfcError::AttachmentUnset { slot })?;
    match source {
        AttachmentSource::Embedded { data, .. } => {
            encode(slot, data, source.declared_media_type(), None, None)
        }
        AttachmentSource::Remote { url, .. } => Err(RfcError::FetchFailure {
            slot,
            url: url.clone(),
            source: FetchError::Unavailable,
        }),
    }
}

fn encode(
    slot: AttachmentSlot,
    bytes: &[u8],
    declared: Option<&MediaType>,
    content_type: Option<&str>,
    url: Option<&str>,
) -> RfcResult<EncodedAttachment> {
    let media_type = declared
        .cloned()
        .or_else(|| {
            content_type
                .and_then(MediaType::parse)
                .filter(|media_type| !media_type.is_generic())
        })
        .or_else(|| MediaType::sniff(bytes))
        .or_else(|| url.and_then(MediaType::from_url_extension))
        .ok_or(RfcError::UnknownMediaType { slot })?;

    Ok(EncodedAttachment {
        payload: STANDARD.encode(bytes),
        media_type,
    })
}

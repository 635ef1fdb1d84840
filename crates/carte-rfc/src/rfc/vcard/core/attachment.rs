//! Binary attachments (PHOTO, LOGO).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::media::MediaType;
use super::property::names;
use crate::error::RfcResult;

/// Which attachment property a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    Photo,
    Logo,
}

impl AttachmentSlot {
    /// Returns the vCard property name.
    #[must_use]
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::Photo => names::PHOTO,
            Self::Logo => names::LOGO,
        }
    }
}

impl std::fmt::Display for AttachmentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.property_name())
    }
}

/// Where the attachment's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSource {
    /// Content still to be fetched from a URL.
    Remote {
        url: String,
        media_type: Option<MediaType>,
    },
    /// Raw bytes already in hand.
    Embedded {
        data: Vec<u8>,
        media_type: Option<MediaType>,
    },
}

impl AttachmentSource {
    /// Returns the declared media type, if the caller gave a usable one.
    #[must_use]
    pub fn declared_media_type(&self) -> Option<&MediaType> {
        match self {
            Self::Remote { media_type, .. } | Self::Embedded { media_type, .. } => {
                media_type.as_ref()
            }
        }
    }
}

/// A photo or logo attachment.
///
/// Holds at most one source; setting a source replaces whatever was set
/// before, so the most recent call wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    source: Option<AttachmentSource>,
}

impl Attachment {
    /// Creates an unset attachment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// References remote content to be fetched at render time.
    ///
    /// `media_type` may be a short form (`png`) or a full type
    /// (`image/png`); an empty or malformed value leaves the type to be
    /// inferred from the fetched content.
    pub fn attach_from_url(&mut self, url: impl Into<String>, media_type: &str) -> &mut Self {
        self.source = Some(AttachmentSource::Remote {
            url: url.into(),
            media_type: MediaType::parse(media_type),
        });
        self
    }

    /// Embeds raw bytes.
    pub fn embed_from_data(&mut self, data: impl Into<Vec<u8>>, media_type: &str) -> &mut Self {
        self.source = Some(AttachmentSource::Embedded {
            data: data.into(),
            media_type: MediaType::parse(media_type),
        });
        self
    }

    /// Embeds content that is already base64 encoded. Whitespace inside the
    /// payload is ignored.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidBase64` if the payload does not decode; the
    /// attachment is left unchanged in that case.
    pub fn embed_from_base64(&mut self, encoded: &str, media_type: &str) -> RfcResult<&mut Self> {
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let data = STANDARD.decode(compact)?;
        Ok(self.embed_from_data(data, media_type))
    }

    /// Removes any source.
    pub fn clear(&mut self) -> &mut Self {
        self.source = None;
        self
    }

    /// Returns the current source.
    #[must_use]
    pub fn source(&self) -> Option<&AttachmentSource> {
        self.source.as_ref()
    }

    /// Returns whether a source is set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.source.is_some()
    }

    /// Returns whether the attachment still needs a fetch.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self.source, Some(AttachmentSource::Remote { .. }))
    }
}

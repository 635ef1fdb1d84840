use thiserror::Error;

use crate::rfc::vcard::attach::FetchError;
use crate::rfc::vcard::core::AttachmentSlot;

/// vCard rendering errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("{slot} has neither embedded data nor a remote source")]
    AttachmentUnset { slot: AttachmentSlot },

    #[error("Failed to fetch {slot} from {url}: {source}")]
    FetchFailure {
        slot: AttachmentSlot,
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Unsupported vCard version: {0}")]
    UnsupportedVersion(String),

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Cannot determine the media type of {slot}")]
    UnknownMediaType { slot: AttachmentSlot },

    #[error(transparent)]
    CoreError(#[from] carte_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;

//! vCard core types.
//!
//! - [`ContactRecord`] - The mutable contact being built
//! - [`AddressBlock`], [`Attachment`], [`SocialLinks`] - Owned sub-structures
//! - [`FieldText`] - Coercion of strings and numbers into text fields
//! - [`Dialect`] - Per-version property name and parameter table
//! - [`VCardProperty`], [`VCardParameter`], [`VCardValue`] - One output line
//!   before escaping and folding

mod address;
mod attachment;
mod dialect;
mod field;
mod media;
mod parameter;
mod property;
mod record;
mod social;
mod value;
mod version;

pub use address::AddressBlock;
pub use attachment::{Attachment, AttachmentSlot, AttachmentSource};
pub use dialect::{AttachmentEncoding, Dialect, PropertyKind, PropertyTemplate};
pub use field::FieldText;
pub(crate) use field::present;
pub use media::MediaType;
pub use parameter::{VCardParameter, param_names, types};
pub use property::{VCardProperty, names};
pub use record::ContactRecord;
pub use social::{SocialEntry, SocialKind, SocialLinks};
pub use value::VCardValue;
pub use version::VCardVersion;

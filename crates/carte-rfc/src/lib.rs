//! vCard record model and serializer.
//!
//! The entry points live in [`rfc::vcard`]: build a [`ContactRecord`], then
//! hand it to [`render`] (resolving remote attachments through an
//! [`AttachmentFetcher`]) or to one of the synchronous variants.
//!
//! [`ContactRecord`]: rfc::vcard::ContactRecord
//! [`render`]: rfc::vcard::render
//! [`AttachmentFetcher`]: rfc::vcard::AttachmentFetcher

pub mod error;
pub mod rfc;

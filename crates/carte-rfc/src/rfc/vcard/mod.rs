//! vCard serialization (RFC 2425/2426 and RFC 6350).
//!
//! This module builds contact records and renders them as vCard 2.1, 3.0 or
//! 4.0 text, including photo and logo attachments embedded as base64.
//!
//! ## Usage
//!
//! ```rust
//! use carte_rfc::rfc::vcard::{ContactRecord, VCardVersion, render_embedded};
//!
//! let mut card = ContactRecord::with_version(VCardVersion::V3);
//! card.set_last_name("Doe").set_first_name("John");
//! card.home_address.set_postal_code(12345);
//!
//! let output = render_embedded(&card).unwrap();
//! assert!(output.contains("N:Doe;John;;;\r\n"));
//! assert!(output.contains(";12345;"));
//! ```
//!
//! Remote attachments are fetched through an [`AttachmentFetcher`] before any
//! line is composed:
//!
//! ```rust,no_run
//! # async fn demo() -> carte_rfc::error::RfcResult<()> {
//! use carte_rfc::rfc::vcard::{ContactRecord, HttpFetcher, render};
//! use carte_core::config::FetchConfig;
//!
//! let mut card = ContactRecord::new();
//! card.set_first_name("Jane");
//! card.photo.attach_from_url("https://example.com/jane.png", "png");
//!
//! let fetcher = HttpFetcher::new(&FetchConfig::default())?;
//! let output = render(&card, &fetcher).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Record model, dialect table and property types
//! - [`attach`] - Attachment materialization and the fetch collaborator
//! - [`build`] - Escaping, folding and serialization

pub mod attach;
pub mod build;
pub mod core;


pub use attach::{
    AttachmentFetcher, EncodedAttachment, FetchError, FetchedResource, HttpFetcher, NoFetcher,
    materialize,
};
pub use build::{RenderOptions, render, render_embedded, render_linked, render_with_options};
pub use core::{
    AddressBlock, Attachment, AttachmentSlot, AttachmentSource, ContactRecord, Dialect, FieldText,
    MediaType, SocialKind, SocialLinks, VCardVersion,
};

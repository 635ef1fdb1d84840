//! The contact record.

use chrono::{DateTime, NaiveDate, Utc};

use super::address::AddressBlock;
use super::attachment::{Attachment, AttachmentSlot};
use super::field::text_setters;
use super::social::SocialLinks;
use super::version::VCardVersion;
use crate::error::RfcResult;

/// A contact being assembled for serialization.
///
/// Starts blank and is filled field by field. Text setters accept strings
/// and numbers alike (see [`FieldText`](super::FieldText)); nested blocks are
/// owned and reached through `&mut`:
///
/// ```rust
/// use carte_rfc::rfc::vcard::ContactRecord;
///
/// let mut card = ContactRecord::new();
/// card.set_first_name("John").set_last_name("Doe");
/// card.work_address.set_city("Los Angeles").set_postal_code(54321);
/// card.social.set("twitter", "https://twitter/johndoe");
/// card.photo.embed_from_data(vec![0x89, b'P', b'N', b'G'], "png");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub version: VCardVersion,

    // Identity
    pub formatted_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub first_name: Option<String>,
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub nickname: Option<String>,
    pub gender: Option<String>,
    pub uid: Option<String>,

    // Organization
    pub organization: Option<String>,
    pub title: Option<String>,
    pub role: Option<String>,

    // Telephones
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub cell_phone: Option<String>,
    pub pager_phone: Option<String>,
    pub home_fax: Option<String>,
    pub work_fax: Option<String>,
    pub other_phone: Option<String>,

    // Dates
    pub birthday: Option<NaiveDate>,
    pub anniversary: Option<NaiveDate>,
    pub revision: Option<DateTime<Utc>>,

    // Contact points
    pub email: Option<String>,
    pub work_email: Option<String>,
    pub other_email: Option<String>,
    pub url: Option<String>,
    pub work_url: Option<String>,
    pub source: Option<String>,

    pub home_address: AddressBlock,
    pub work_address: AddressBlock,

    pub note: Option<String>,
    pub social: SocialLinks,

    pub photo: Attachment,
    pub logo: Attachment,
}

impl ContactRecord {
    /// Creates a blank card with the default version (3.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a blank card with the specified version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    /// Sets the version.
    pub fn set_version(&mut self, version: VCardVersion) -> &mut Self {
        self.version = version;
        self
    }

    /// Sets the version from its textual form (`"2.1"`, `"3.0"`, `"4.0"`).
    ///
    /// ## Errors
    /// Returns `RfcError::UnsupportedVersion` for any other value; the
    /// current version is kept.
    pub fn set_version_str(&mut self, version: &str) -> RfcResult<&mut Self> {
        self.version = version.parse()?;
        Ok(self)
    }

    text_setters! {
        /// Sets the formatted name (FN).
        set_formatted_name => formatted_name;
        /// Sets the family name.
        set_last_name => last_name;
        /// Sets the middle (additional) name.
        set_middle_name => middle_name;
        /// Sets the given name.
        set_first_name => first_name;
        /// Sets the honorific prefix.
        set_name_prefix => name_prefix;
        /// Sets the honorific suffix.
        set_name_suffix => name_suffix;
        /// Sets the nickname.
        set_nickname => nickname;
        /// Sets the gender.
        set_gender => gender;
        /// Sets the UID.
        set_uid => uid;
        /// Sets the organization name.
        set_organization => organization;
        /// Sets the job title.
        set_title => title;
        /// Sets the role.
        set_role => role;
        /// Sets the home voice number.
        set_home_phone => home_phone;
        /// Sets the work voice number.
        set_work_phone => work_phone;
        /// Sets the mobile number.
        set_cell_phone => cell_phone;
        /// Sets the pager number.
        set_pager_phone => pager_phone;
        /// Sets the home fax number.
        set_home_fax => home_fax;
        /// Sets the work fax number.
        set_work_fax => work_fax;
        /// Sets a voice number of no particular kind.
        set_other_phone => other_phone;
        /// Sets the home email address.
        set_email => email;
        /// Sets the work email address.
        set_work_email => work_email;
        /// Sets an email address of no particular kind.
        set_other_email => other_email;
        /// Sets the personal URL.
        set_url => url;
        /// Sets the work URL.
        set_work_url => work_url;
        /// Sets the SOURCE URL this card can be refreshed from.
        set_source => source;
        /// Sets the free-text note.
        set_note => note;
    }

    /// Sets the birthday.
    pub fn set_birthday(&mut self, date: NaiveDate) -> &mut Self {
        self.birthday = Some(date);
        self
    }

    /// Sets the anniversary.
    pub fn set_anniversary(&mut self, date: NaiveDate) -> &mut Self {
        self.anniversary = Some(date);
        self
    }

    /// Sets the revision timestamp (REV).
    pub fn set_revision(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.revision = Some(at);
        self
    }

    /// Assigns a random UUID as UID unless one is already set, returning the UID.
    pub fn ensure_uid(&mut self) -> &str {
        self.uid
            .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
            .as_str()
    }

    /// Fills FN from the name parts (prefix, first, middle, last, suffix)
    /// unless it is already set. Leaves FN unset when there are no parts.
    pub fn fill_formatted_name(&mut self) -> &mut Self {
        if self.formatted_name.is_none() {
            let parts = [
                &self.name_prefix,
                &self.first_name,
                &self.middle_name,
                &self.last_name,
                &self.name_suffix,
            ];
            let composed = parts
                .iter()
                .filter_map(|part| part.as_deref())
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !composed.is_empty() {
                self.formatted_name = Some(composed);
            }
        }
        self
    }

    /// Returns the attachment for a slot.
    #[must_use]
    pub fn attachment(&self, slot: AttachmentSlot) -> &Attachment {
        match slot {
            AttachmentSlot::Photo => &self.photo,
            AttachmentSlot::Logo => &self.logo,
        }
    }

    /// Returns the attachment for a slot, mutably.
    pub fn attachment_mut(&mut self, slot: AttachmentSlot) -> &mut Attachment {
        match slot {
            AttachmentSlot::Photo => &mut self.photo,
            AttachmentSlot::Logo => &mut self.logo,
        }
    }

    /// Returns whether any attachment still references remote content.
    #[must_use]
    pub fn has_remote_attachments(&self) -> bool {
        self.photo.is_remote() || self.logo.is_remote()
    }
}

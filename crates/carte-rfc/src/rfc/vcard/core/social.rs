//! Social profile links (X-SOCIALPROFILE).

use std::collections::BTreeMap;

use super::field::{FieldText, has_content, present};

/// Social networks with a first-class slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    Facebook,
    LinkedIn,
    Twitter,
    Flickr,
}

impl SocialKind {
    pub const ALL: [Self; 4] = [Self::Facebook, Self::LinkedIn, Self::Twitter, Self::Flickr];

    /// Returns the TYPE value written for this kind.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::Twitter => "twitter",
            Self::Flickr => "flickr",
        }
    }

    /// Recognizes a well-known label, ignoring case (`linkedIn`, `LinkedIn`).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name().eq_ignore_ascii_case(label.trim()))
    }
}

/// One non-empty link, as emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialEntry<'a> {
    /// TYPE parameter value.
    pub type_name: &'a str,
    /// Profile URL.
    pub url: &'a str,
}

/// Social profile URLs keyed by link kind.
///
/// The well-known kinds have fixed slots; `custom` and every other label go
/// to the open slot, keyed by the trimmed label. A blank label means
/// `custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub linked_in: Option<String>,
    pub twitter: Option<String>,
    pub flickr: Option<String>,
    /// Open slot for labels without a fixed slot.
    pub other: BTreeMap<String, String>,
}

impl SocialLinks {
    /// Label used for the generic open slot.
    pub const CUSTOM: &'static str = "custom";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL for a label.
    pub fn set(&mut self, label: &str, url: impl Into<FieldText>) -> &mut Self {
        let url = url.into().into_string();
        match SocialKind::from_label(label) {
            Some(kind) => *self.slot_mut(kind) = Some(url),
            None => {
                self.other.insert(Self::open_key(label).to_string(), url);
            }
        }
        self
    }

    /// Sets the URL for a well-known kind.
    pub fn set_kind(&mut self, kind: SocialKind, url: impl Into<FieldText>) -> &mut Self {
        *self.slot_mut(kind) = Some(url.into().into_string());
        self
    }

    /// Sets the `custom` link.
    pub fn set_custom(&mut self, url: impl Into<FieldText>) -> &mut Self {
        self.set(Self::CUSTOM, url)
    }

    /// Returns the URL stored for a label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        match SocialKind::from_label(label) {
            Some(kind) => self.slot(kind).as_deref(),
            None => self.other.get(Self::open_key(label)).map(String::as_str),
        }
    }

    /// Removes the URL stored for a label, returning it.
    pub fn remove(&mut self, label: &str) -> Option<String> {
        match SocialKind::from_label(label) {
            Some(kind) => self.slot_mut(kind).take(),
            None => self.other.remove(Self::open_key(label)),
        }
    }

    /// Returns the non-empty links: fixed slots in [`SocialKind::ALL`]
    /// order, then the open slot in label order. Open entries whose label
    /// is blank are skipped.
    pub fn entries(&self) -> impl Iterator<Item = SocialEntry<'_>> {
        let fixed = SocialKind::ALL.into_iter().filter_map(|kind| {
            present(self.slot(kind).as_ref()).map(|url| SocialEntry {
                type_name: kind.type_name(),
                url,
            })
        });
        let open = self
            .other
            .iter()
            .filter(|(label, _)| has_content(label))
            .filter_map(|(label, url)| {
                present(Some(url)).map(|url| SocialEntry {
                    type_name: label.as_str(),
                    url,
                })
            });
        fixed.chain(open)
    }

    /// Returns whether no link would be emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    fn open_key(label: &str) -> &str {
        let label = label.trim();
        if has_content(label) {
            label
        } else {
            Self::CUSTOM
        }
    }

    const fn slot(&self, kind: SocialKind) -> &Option<String> {
        match kind {
            SocialKind::Facebook => &self.facebook,
            SocialKind::LinkedIn => &self.linked_in,
            SocialKind::Twitter => &self.twitter,
            SocialKind::Flickr => &self.flickr,
        }
    }

    fn slot_mut(&mut self, kind: SocialKind) -> &mut Option<String> {
        match kind {
            SocialKind::Facebook => &mut self.facebook,
            SocialKind::LinkedIn => &mut self.linked_in,
            SocialKind::Twitter => &mut self.twitter,
            SocialKind::Flickr => &mut self.flickr,
        }
    }
}

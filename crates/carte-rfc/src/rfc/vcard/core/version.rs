//! vCard version.

use crate::error::RfcError;

/// vCard version, selecting the property-name and encoding dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (versit consortium).
    V2_1,
    /// vCard 3.0 (RFC 2426).
    #[default]
    V3,
    /// vCard 4.0 (RFC 6350).
    V4,
}

impl VCardVersion {
    pub const ALL: [Self; 3] = [Self::V2_1, Self::V3, Self::V4];

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }

    /// Returns whether this is the pre-RFC 2.1 dialect, which uses bare
    /// parameters and quoted-printable instead of backslash escapes.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::V2_1)
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.1" => Ok(Self::V2_1),
            "3.0" | "3" => Ok(Self::V3),
            "4.0" | "4" => Ok(Self::V4),
            other => Err(RfcError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl std::fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Attachment media types.

/// A normalized `type/subtype` media type.
///
/// Declared types are accepted in the loose forms callers tend to use
/// (`png`, `PNG`, `image/png`, `image/jpg`) and normalized to lowercase
/// essence form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    top: String,
    sub: String,
}

const IMAGE: &str = "image";

impl MediaType {
    /// Parses a declared media type.
    ///
    /// A bare subtype is taken to be an image subtype. Parameters after `;`
    /// are dropped. Returns `None` for empty or malformed input.
    #[must_use]
    pub fn parse(declared: &str) -> Option<Self> {
        let essence = declared.split(';').next().unwrap_or_default().trim();
        if essence.is_empty() {
            return None;
        }

        let (top, sub) = match essence.split_once('/') {
            Some((top, sub)) => (top.trim(), sub.trim()),
            None => (IMAGE, essence),
        };
        if !is_token(top) || !is_token(sub) {
            return None;
        }

        let top = top.to_ascii_lowercase();
        let sub = canonical_subtype(&top, &sub.to_ascii_lowercase());
        Some(Self { top, sub })
    }

    /// Creates an `image/<subtype>` media type.
    #[must_use]
    pub fn image(subtype: &str) -> Self {
        Self {
            top: IMAGE.to_string(),
            sub: canonical_subtype(IMAGE, &subtype.to_ascii_lowercase()),
        }
    }

    /// Returns `type/subtype`.
    #[must_use]
    pub fn essence(&self) -> String {
        format!("{}/{}", self.top, self.sub)
    }

    /// Returns the uppercase short form used by `TYPE=` in 2.1 and 3.0
    /// (`PNG`, `JPEG`, `SVG`).
    #[must_use]
    pub fn short_name(&self) -> String {
        self.sub
            .split('+')
            .next()
            .unwrap_or(&self.sub)
            .to_ascii_uppercase()
    }

    /// Returns whether this is the catch-all `application/octet-stream`.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        self.top == "application" && self.sub == "octet-stream"
    }

    /// Detects common image formats from their magic numbers.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        let subtype = if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            "png"
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            "jpeg"
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            "gif"
        } else if bytes.starts_with(b"BM") && bytes.len() > 14 {
            "bmp"
        } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            "webp"
        } else if bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*") {
            "tiff"
        } else {
            return None;
        };
        Some(Self::image(subtype))
    }

    /// Infers an image type from the extension of a URL's path.
    #[must_use]
    pub fn from_url_extension(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let file = path.rsplit('/').next().unwrap_or_default();
        let (_, extension) = file.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            ext @ ("png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "tif" | "tiff" | "svg") => {
                Some(Self::image(ext))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.top, self.sub)
    }
}

fn canonical_subtype(top: &str, sub: &str) -> String {
    if top != IMAGE {
        return sub.to_string();
    }
    match sub {
        "jpg" | "pjpeg" => "jpeg",
        "tif" => "tiff",
        "svg" => "svg+xml",
        "x-png" => "png",
        other => other,
    }
    .to_string()
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.' | '_'))
}

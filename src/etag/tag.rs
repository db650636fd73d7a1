use {
    http::header::*,
    sha1::{Digest, Sha1},
    std::fmt,
};

/// Weak validator marker.
pub const WEAK_PREFIX: &str = "W/";

/// Entity tag for empty content.
///
/// The well-known SHA-1 of the empty byte sequence (in base64, length-prefixed). Empty payloads
/// are never hashed.
pub const EMPTY_ENTITY_TAG: &str = "\"0-2jmj7l5rSw0yVb/vlWAYkK/YBwk\"";

//
// EntityTag
//

/// HTTP entity tag (`ETag`).
///
/// Always a quoted string, optionally prefixed with the weak validator marker (`W/`). The quoted
/// part is the same for the weak and strong variants of the same content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityTag(String);

impl EntityTag {
    /// Compute the entity tag for a payload using SHA-1.
    pub fn compute(payload: &str, weak: bool) -> Self {
        Self::compute_with::<Sha1>(payload, weak)
    }

    /// Compute the entity tag for a payload using the provided digest.
    ///
    /// The digest is rendered as lowercase hexadecimal. Empty payloads always get
    /// [EMPTY_ENTITY_TAG] regardless of the digest.
    pub fn compute_with<DigestT>(payload: &str, weak: bool) -> Self
    where
        DigestT: Digest,
    {
        let tag = if payload.is_empty() {
            EMPTY_ENTITY_TAG.into()
        } else {
            let digest = DigestT::digest(payload.as_bytes());
            format!("\"{}\"", hex::encode(digest))
        };

        if weak {
            Self(WEAK_PREFIX.to_string() + &tag)
        } else {
            Self(tag)
        }
    }

    /// Whether we carry the weak validator marker.
    pub fn is_weak(&self) -> bool {
        is_weak(&self.0)
    }

    /// The quoted tag without the weak validator marker.
    pub fn opaque(&self) -> &str {
        strip_weak(&self.0)
    }

    /// As string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// To [HeaderValue].
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.0)
    }
}

impl AsRef<str> for EntityTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EntityTag> for String {
    fn from(entity_tag: EntityTag) -> Self {
        entity_tag.0
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// Whether the validator starts with the weak marker.
pub fn is_weak(validator: &str) -> bool {
    validator.starts_with(WEAK_PREFIX)
}

/// Removes the leading weak marker, if there is one.
pub fn strip_weak(validator: &str) -> &str {
    validator.strip_prefix(WEAK_PREFIX).unwrap_or(validator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD_SHA1: &str = "\"0a4d55a8d778e5022fab701977c5d840bbc486d0\"";

    #[test]
    fn strong_tag_is_quoted_hex() {
        let tag = EntityTag::compute("Hello World", false);
        assert_eq!(tag.as_str(), HELLO_WORLD_SHA1);
        assert!(!tag.is_weak());
    }

    #[test]
    fn weak_tag_differs_only_by_prefix() {
        let strong = EntityTag::compute("Hello World", false);
        let weak = EntityTag::compute("Hello World", true);
        assert!(weak.is_weak());
        assert_ne!(strong, weak);
        assert_eq!(weak.as_str(), format!("W/{}", strong));
        assert_eq!(weak.opaque(), strong.as_str());
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            EntityTag::compute("{\"a\":1}", false),
            EntityTag::compute("{\"a\":1}", false)
        );
        assert_ne!(
            EntityTag::compute("{\"a\":1}", false),
            EntityTag::compute("{\"a\":2}", false)
        );
    }

    #[test]
    fn empty_payload() {
        assert_eq!(EntityTag::compute("", false).as_str(), EMPTY_ENTITY_TAG);
        assert_eq!(
            EntityTag::compute("", true).as_str(),
            "W/\"0-2jmj7l5rSw0yVb/vlWAYkK/YBwk\""
        );
    }

    #[test]
    fn fixed_width() {
        for payload in ["a", "Hello World", "<html><body>long enough</body></html>"] {
            // 40 hex digits + 2 quotes
            assert_eq!(EntityTag::compute(payload, false).as_str().len(), 42);
        }
    }

    #[test]
    fn strip() {
        assert_eq!(strip_weak("W/\"x\""), "\"x\"");
        assert_eq!(strip_weak("\"x\""), "\"x\"");
        assert!(is_weak("W/\"x\""));
        assert!(!is_weak("\"W/x\""));
    }

    #[test]
    fn header_value() {
        let tag = EntityTag::compute("Hello World", true);
        assert_eq!(tag.to_header_value().unwrap(), tag.as_str());
    }
}

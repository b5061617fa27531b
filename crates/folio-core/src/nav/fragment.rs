//! Location fragment codec
//!
//! `tab` or `tab/heading`, each component percent-encoded the way
//! `encodeURIComponent` does it. Decoding percent-decodes the whole fragment
//! first and then splits at the first `/`, so a heading id may itself contain
//! slashes while a tab id may not.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Why a fragment could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("fragment is empty")]
    Empty,

    #[error("fragment names no tab")]
    MissingTab,

    #[error("fragment is not valid UTF-8 after percent-decoding")]
    InvalidEncoding,
}

/// Decoded navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub tab_id: String,
    pub heading_id: Option<String>,
}

impl Fragment {
    pub fn new(tab_id: impl Into<String>, heading_id: Option<String>) -> Self {
        Self {
            tab_id: tab_id.into(),
            heading_id,
        }
    }

    /// Serialized form without the leading `#`
    pub fn encode(&self) -> String {
        encode(&self.tab_id, self.heading_id.as_deref())
    }
}

/// Serialize `(tab, heading)` into a fragment (no leading `#`)
pub fn encode(tab_id: &str, heading_id: Option<&str>) -> String {
    let tab = utf8_percent_encode(tab_id, COMPONENT).to_string();
    match heading_id {
        Some(heading) => format!("{}/{}", tab, utf8_percent_encode(heading, COMPONENT)),
        None => tab,
    }
}

/// Parse a fragment, with or without its leading `#`
pub fn decode(raw: &str) -> Result<Fragment, FragmentError> {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    if raw.is_empty() {
        return Err(FragmentError::Empty);
    }

    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| FragmentError::InvalidEncoding)?;

    let (tab, heading) = match decoded.split_once('/') {
        Some((tab, heading)) => (tab, Some(heading)),
        None => (decoded.as_ref(), None),
    };

    if tab.is_empty() {
        return Err(FragmentError::MissingTab);
    }

    Ok(Fragment {
        tab_id: tab.to_string(),
        heading_id: heading.filter(|h| !h.is_empty()).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_with_and_without_heading() {
        for (tab, heading) in [
            ("projects", Some("project-beta")),
            ("about", None),
            ("경력", Some("회사-소개")),
            ("skills", Some("c++ & rust")),
            ("notes", Some("a/b/c")),
            ("odd id!", Some("100%")),
        ] {
            let encoded = encode(tab, heading);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(decoded.tab_id, tab, "tab of {encoded}");
            assert_eq!(decoded.heading_id.as_deref(), heading, "heading of {encoded}");
        }
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        assert_eq!(encode("a b", Some("x/y")), "a%20b/x%2Fy");
        assert_eq!(encode("tab", None), "tab");
        assert_eq!(encode("it's-(ok)", None), "it's-(ok)");
    }

    #[test]
    fn test_decode_strips_hash() {
        let fragment = decode("#projects/project-beta").unwrap();
        assert_eq!(fragment, Fragment::new("projects", Some("project-beta".into())));
    }

    #[test]
    fn test_decode_empty_and_missing_tab() {
        assert_eq!(decode(""), Err(FragmentError::Empty));
        assert_eq!(decode("#"), Err(FragmentError::Empty));
        assert_eq!(decode("/heading"), Err(FragmentError::MissingTab));
    }

    #[test]
    fn test_trailing_slash_means_no_heading() {
        assert_eq!(decode("about/").unwrap().heading_id, None);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert_eq!(decode("%FF%FE"), Err(FragmentError::InvalidEncoding));
    }
}

//! Textual form of an encoded chart, suitable to be embedded in URLs.
//!
//! A transport string is a single character holding the format version,
//! followed by the URL-safe base64 representation of the payload, without
//! padding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::{DecodeError, Engine};

use crate::codec;
use crate::error::{Error, Result};

/// Name of the query parameter holding a chart in a share link.
pub const QUERY_PARAM: &str = "s";

/// Layout of the payload of a transport string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum FormatVersion {
    /// Big-endian year followed by a MSB-first bit-set of days.
    V0,
}

impl FormatVersion {
    pub const LATEST: Self = Self::V0;

    /// Character prefixing transport strings of this version.
    pub fn tag(self) -> char {
        match self {
            Self::V0 => '0',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '0' => Some(Self::V0),
            _ => None,
        }
    }

    /// Size of the largest payload a valid transport string of this version
    /// can hold.
    pub fn max_payload_len(self) -> usize {
        match self {
            Self::V0 => codec::MAX_LEN,
        }
    }

    /// Length of the base64 text of the largest valid payload.
    pub fn max_text_len(self) -> usize {
        self.max_payload_len().div_ceil(3) * 4
    }
}

/// Build a transport string from a payload.
///
/// ```
/// use commit_chart::transport::{wrap, FormatVersion};
///
/// assert_eq!(wrap(FormatVersion::V0, &[0x07, 0xe8, 0x81]), "0B-iB");
/// assert_eq!(wrap(FormatVersion::V0, &[0xff, 0xfb]), "0__s");
/// ```
pub fn wrap(version: FormatVersion, payload: &[u8]) -> String {
    let mut res = String::with_capacity(1 + payload.len().div_ceil(3) * 4);
    res.push(version.tag());
    URL_SAFE_NO_PAD.encode_string(payload, &mut res);
    res
}

/// Split a transport string into its format version and its payload.
///
/// The payload must be strict URL-safe base64: padding, whitespaces and
/// non-zero trailing bits are all rejected. Text longer than what the largest
/// payload of its version can take is rejected before being decoded.
///
/// ```
/// use commit_chart::transport::{unwrap, FormatVersion};
///
/// let (version, payload) = unwrap("0B-iB").unwrap();
/// assert_eq!(version, FormatVersion::V0);
/// assert_eq!(payload, [0x07, 0xe8, 0x81]);
///
/// assert!(unwrap("1B-iB").is_err());
/// assert!(unwrap("0B-iB==").is_err());
/// ```
pub fn unwrap(text: &str) -> Result<(FormatVersion, Vec<u8>)> {
    let mut chars = text.chars();
    let found = chars.next();

    let version = found
        .and_then(FormatVersion::from_tag)
        .ok_or(Error::UnsupportedVersion { found })?;

    let encoded = chars.as_str();

    if encoded.len() > version.max_text_len() {
        return Err(DecodeError::InvalidLength(encoded.len()).into());
    }

    let payload = URL_SAFE_NO_PAD.decode(encoded)?;
    Ok((version, payload))
}

/// Build a link to a page displaying a chart.
///
/// ```
/// use commit_chart::transport::share_link;
///
/// assert_eq!(share_link("https://example.com/", "0B-iB"), "https://example.com/?s=0B-iB");
/// ```
pub fn share_link(base: &str, text: &str) -> String {
    format!("{base}?{QUERY_PARAM}={text}")
}

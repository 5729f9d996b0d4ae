use std::fmt;

use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Error>;

/// Reason why a chart could not be encoded or decoded.
///
/// Decoding errors are all terminal: a chart that fails to decode should be
/// considered as an invalid link, no partial result is ever produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The transport string doesn't start with a known format version.
    UnsupportedVersion { found: Option<char> },
    /// The payload is not valid URL-safe unpadded base64.
    MalformedEncoding(base64::DecodeError),
    /// The payload is too short to hold the year header.
    Truncated { len: usize },
    /// A day past the end of the year is selected.
    DateOutOfRange { year: u16, index: usize },
    /// The payload ends with a zero byte, which an encoder never produces.
    NonCanonicalEncoding,
    /// The year can't be encoded.
    YearOutOfRange { year: u16 },
    /// A date from another year was added to a chart.
    DateNotInYear { year: u16, date: NaiveDate },
    /// The chart doesn't include any day.
    EmptyChart,
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::MalformedEncoding(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found: None } => write!(f, "missing format version"),
            Self::UnsupportedVersion { found: Some(tag) } => {
                write!(f, "unsupported format version `{tag}`")
            }
            Self::MalformedEncoding(err) => write!(f, "malformed base64 payload: {err}"),
            Self::Truncated { len } => {
                write!(f, "payload of {len} bytes is too short to hold a year")
            }
            Self::DateOutOfRange { year, index } => {
                write!(f, "day #{index} is out of range for year {year}")
            }
            Self::NonCanonicalEncoding => write!(f, "payload has trailing zero bytes"),
            Self::YearOutOfRange { year } => write!(
                f,
                "year {year} is out of range: expected {}-{}",
                crate::codec::MIN_YEAR,
                crate::codec::MAX_YEAR,
            ),
            Self::DateNotInYear { year, date } => write!(f, "{date} is not in year {year}"),
            Self::EmptyChart => write!(f, "chart doesn't include any day"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedEncoding(err) => Some(err),
            _ => None,
        }
    }
}

#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod codec;
pub mod error;
pub mod selection;
pub mod transport;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::error::{Error, Result};
pub use crate::selection::ChartSelection;
pub use crate::transport::FormatVersion;
pub use calendar_grid::{day_at, day_count, enumerate_days, index_in, index_of, CalendarDay};

/// Encode a selection into a transport string, using latest format version.
///
/// ```
/// use commit_chart::{encode, ChartSelection, Error};
///
/// assert_eq!(encode(&ChartSelection::new(2024)).unwrap(), "0B-g");
///
/// assert_eq!(
///     encode(&ChartSelection::new(999)),
///     Err(Error::YearOutOfRange { year: 999 }),
/// );
/// ```
pub fn encode(selection: &ChartSelection) -> Result<String> {
    let payload = match FormatVersion::LATEST {
        FormatVersion::V0 => codec::encode_bytes(selection)?,
    };

    Ok(transport::wrap(FormatVersion::LATEST, &payload))
}

/// Decode a selection from a transport string.
///
/// The input is expected to come from untrusted sources (links, remote
/// storage), any deviation from what [`encode`] would output is rejected.
///
/// ```
/// use commit_chart::{decode, Error};
///
/// let chart = decode("0B-iB").unwrap();
/// assert_eq!(chart.year(), 2024);
/// assert_eq!(chart.indices().collect::<Vec<_>>(), [0, 7]);
///
/// assert_eq!(decode("1B-iB"), Err(Error::UnsupportedVersion { found: Some('1') }));
/// ```
pub fn decode(text: &str) -> Result<ChartSelection> {
    let res = transport::unwrap(text).and_then(|(version, payload)| match version {
        FormatVersion::V0 => codec::decode_bytes(&payload),
    });

    #[cfg(feature = "log")]
    let res = res.inspect_err(|err| {
        log::debug!(input_len = text.len(); "rejected chart encoding: {err}");
    });

    res
}

/// Decode a chart that is about to be shared, which must include at least one
/// day.
///
/// ```
/// use commit_chart::{validate_share, Error};
///
/// assert!(validate_share("0B-iB").is_ok());
/// assert_eq!(validate_share("0B-g"), Err(Error::EmptyChart));
/// ```
pub fn validate_share(text: &str) -> Result<ChartSelection> {
    let selection = decode(text)?;

    if selection.is_empty() {
        return Err(Error::EmptyChart);
    }

    Ok(selection)
}

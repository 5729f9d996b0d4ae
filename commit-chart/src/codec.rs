//! Binary layout of a chart.
//!
//! A chart is encoded as its year, written as a big-endian `u16`, followed by
//! a bit-set of the selected days. Day `i` of the year is stored in byte
//! `i / 8` of the bit-set, starting from its most significant bit.
//!
//! The bit-set stops at the byte holding the last selected day: a buffer
//! never ends with a zero byte and an empty selection is encoded as the year
//! alone. This makes the encoding of a selection unique.

use calendar_grid::CalendarDay;

use crate::error::{Error, Result};
use crate::ChartSelection;

/// Smallest year that can be encoded.
pub const MIN_YEAR: u16 = 1000;

/// Largest year that can be encoded.
pub const MAX_YEAR: u16 = u16::MAX;

/// Size of the year header.
pub const HEADER_LEN: usize = 2;

/// Size of the largest valid encoding, reached when the last day of a year is
/// selected.
pub const MAX_LEN: usize = HEADER_LEN + 366usize.div_ceil(8);

/// Encode a selection into its canonical byte representation.
///
/// ```
/// use commit_chart::ChartSelection;
/// use commit_chart::codec::encode_bytes;
///
/// let mut chart = ChartSelection::new(2024);
/// assert_eq!(encode_bytes(&chart).unwrap(), [0x07, 0xe8]);
///
/// chart.insert(0).unwrap();
/// chart.insert(7).unwrap();
/// chart.insert(8).unwrap();
/// assert_eq!(encode_bytes(&chart).unwrap(), [0x07, 0xe8, 0x81, 0x80]);
/// ```
pub fn encode_bytes(selection: &ChartSelection) -> Result<Vec<u8>> {
    let year = selection.year();

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange { year });
    }

    let bitset_len = selection
        .last()
        .map(|last| usize::from(last) / 8 + 1)
        .unwrap_or(0);

    let mut res = Vec::with_capacity(HEADER_LEN + bitset_len);
    res.extend_from_slice(&year.to_be_bytes());
    res.resize(HEADER_LEN + bitset_len, 0);

    for index in selection.indices().map(usize::from) {
        res[HEADER_LEN + index / 8] |= 0x80 >> (index % 8);
    }

    debug_assert!(bitset_len == 0 || res.last() != Some(&0));
    Ok(res)
}

/// Decode a selection from its byte representation.
///
/// Only canonical encodings are accepted: any selected day must belong to the
/// year of the header and the buffer can't end with a zero byte.
///
/// ```
/// use commit_chart::Error;
/// use commit_chart::codec::decode_bytes;
///
/// let chart = decode_bytes(&[0x07, 0xe8, 0x81]).unwrap();
/// assert_eq!(chart.year(), 2024);
/// assert_eq!(chart.indices().collect::<Vec<_>>(), [0, 7]);
///
/// assert_eq!(decode_bytes(&[0x07]), Err(Error::Truncated { len: 1 }));
/// assert_eq!(decode_bytes(&[0x07, 0xe8, 0x81, 0x00]), Err(Error::NonCanonicalEncoding));
/// ```
pub fn decode_bytes(bytes: &[u8]) -> Result<ChartSelection> {
    let [hi, lo, bitset @ ..] = bytes else {
        return Err(Error::Truncated { len: bytes.len() });
    };

    let year = u16::from_be_bytes([*hi, *lo]);
    let mut res = ChartSelection::new(year);

    for (i, &byte) in bitset.iter().enumerate() {
        for bit in (0..8).rev() {
            if byte & (1 << bit) == 0 {
                continue;
            }

            let index = 8 * i + (7 - bit);

            let day = u16::try_from(index)
                .ok()
                .and_then(|index| CalendarDay::new(year, index))
                .ok_or(Error::DateOutOfRange { year, index })?;

            res.insert(day.index)?;
        }
    }

    if bitset.last() == Some(&0) {
        return Err(Error::NonCanonicalEncoding);
    }

    Ok(res)
}

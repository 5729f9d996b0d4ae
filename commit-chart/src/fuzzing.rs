//! Fuzzing logic, shared between unit tests and the actual fuzzing targets.

use arbitrary::{Arbitrary, Unstructured};

use crate::codec::{self, MAX_YEAR, MIN_YEAR};
use crate::transport::{self, FormatVersion};
use crate::{decode, encode, ChartSelection};

impl<'a> Arbitrary<'a> for ChartSelection {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut res = Self::new(u.int_in_range(MIN_YEAR..=MAX_YEAR)?);
        let day_count = res.day_count();

        for index in u.arbitrary_iter::<u16>()? {
            res.insert(index? % day_count)
                .expect("index reduced to the size of the year");
        }

        Ok(res)
    }
}

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub operation: Operation,
}

/// What input is fed to the decoder
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    /// Decode raw text
    DecodeText(String),
    /// Decode any payload wrapped with a valid version tag
    DecodePayload(Vec<u8>),
    /// Encode a valid chart and decode it back
    RoundTrip(ChartSelection),
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_chart(data: Data) -> bool {
    match data.operation {
        Operation::DecodeText(text) => {
            let Ok(chart) = decode(&text) else {
                return false;
            };

            // Any accepted input must be exactly what the encoder outputs
            if chart.year() >= MIN_YEAR {
                assert_eq!(encode(&chart).as_deref(), Ok(text.as_str()));
            }
        }
        Operation::DecodePayload(payload) => {
            let text = transport::wrap(FormatVersion::V0, &payload);

            let Ok(chart) = decode(&text) else {
                return false;
            };

            assert!(payload.len() <= codec::MAX_LEN);

            if chart.year() >= MIN_YEAR {
                assert_eq!(codec::encode_bytes(&chart), Ok(payload));
            }
        }
        Operation::RoundTrip(chart) => {
            let text = encode(&chart).unwrap_or_else(|err| panic!("{chart:?}: {err}"));
            assert_eq!(decode(&text), Ok(chart));
        }
    }

    true
}

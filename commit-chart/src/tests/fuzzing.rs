use arbitrary::{Arbitrary, Unstructured};

use crate::codec::MIN_YEAR;
use crate::fuzzing::{run_fuzz_chart, Data, Operation};
use crate::{chart, ChartSelection};

#[test]
fn no_fuzz_invalid_text() {
    let data = Data { operation: Operation::DecodeText("1B-iB".to_string()) };
    assert!(!run_fuzz_chart(data));

    let data = Data { operation: Operation::DecodeText("0B-iB==".to_string()) };
    assert!(!run_fuzz_chart(data));
}

#[test]
fn no_fuzz_non_canonical_payload() {
    let data = Data { operation: Operation::DecodePayload(vec![0x07, 0xe8, 0x81, 0x00]) };
    assert!(!run_fuzz_chart(data));
}

#[test]
fn fuzz_valid_inputs() {
    let data = Data { operation: Operation::DecodeText("0B-iB".to_string()) };
    assert!(run_fuzz_chart(data));

    let data = Data { operation: Operation::DecodePayload(vec![0x00, 0x05, 0x80]) };
    assert!(run_fuzz_chart(data));

    let data = Data { operation: Operation::RoundTrip(chart!(2024; 0, 365)) };
    assert!(run_fuzz_chart(data));
}

#[test]
fn arbitrary_charts_are_valid() {
    for seed in 0..64u8 {
        let bytes: Vec<u8> = (0..512u16)
            .map(|i| (i as u8).wrapping_mul(seed).wrapping_add(seed))
            .collect();

        let chart = ChartSelection::arbitrary(&mut Unstructured::new(&bytes))
            .expect("could not build chart");

        assert!(chart.year() >= MIN_YEAR);
        assert!(chart.indices().all(|index| index < chart.day_count()));
        assert!(run_fuzz_chart(Data { operation: Operation::RoundTrip(chart) }));
    }
}

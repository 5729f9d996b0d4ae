#![no_main]
use commit_chart::fuzzing::{run_fuzz_chart, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_chart(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});

#![no_main]
use libfuzzer_sys::{fuzz_target, Corpus};
use rotation_calendar::fuzzing::{run_fuzz_rotation, Data};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_rotation(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try each response envelope; should never panic
    let _ = courtlistener_fuzz::check_envelopes(data);
});

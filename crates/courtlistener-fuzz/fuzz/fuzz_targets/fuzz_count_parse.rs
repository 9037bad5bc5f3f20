#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode must return Ok or Err; URL-shaped strings map to unknown
    courtlistener_fuzz::check_count(data);
});

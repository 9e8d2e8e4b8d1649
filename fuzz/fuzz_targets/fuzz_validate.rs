#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Malformed pairs must be rejected as values — panics are bugs.
        match s.split_once(':') {
            Some((bill, payment)) => {
                let _ = ghabz::validate(bill, payment);
            }
            None => {
                let _ = ghabz::validate(s, s);
            }
        }
    }
});

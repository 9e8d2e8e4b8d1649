#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = ghabz::complete_bill_number(s);

        // Any identifier the issuer produces must satisfy the validator.
        let payload: String = s.chars().take(12).collect();
        if let Ok(bill) = ghabz::complete_bill_number(&payload) {
            if let Ok(payment) = ghabz::complete_payment_id(&bill, s) {
                assert!(ghabz::validate(&bill, &payment).is_ok());
            }
        }
    }
});

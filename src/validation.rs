//! The three-stage bill/payment verification pipeline.
//!
//! A pair is certified by three windowed mod-11 checks run strictly in
//! order: the bill number's own check digit, the payment identifier's
//! check digit at position 11, and a combined check over the bill number
//! plus a slice of the payment id, targeting the payment id's final digit.
//! The first failing stage rejects the pair; only then is the payable
//! amount derived.

use crate::checksum::digit_matches;
use crate::error::BillError;
use crate::types::{BILL_TYPE_INDEX, ID_LENGTH, MIN_PAYMENT_ID_LENGTH, ValidatedBill};

/// 0-indexed last position of a 13-digit identifier.
const LAST: usize = ID_LENGTH - 1;

/// The payable amount occupies the first 8 digits of the padded payment id.
const AMOUNT_DIGITS: usize = 8;

/// The combined stage runs over the bill number plus 7 payment digits.
const COMBINED_LENGTH: usize = 20;

/// Rials per unit of the amount field.
const RIALS_PER_UNIT: u64 = 1000;

/// Validate a bill number / payment identifier pair.
///
/// The payment identifier may be supplied in its short printed form
/// (7 to 13 digits); it is zero-padded to 13 digits before checking.
/// On success the returned [`ValidatedBill`] carries the padded payment
/// id and the payable fee in Rials.
///
/// ```rust
/// let bill = ghabz::validate("9876543210949", "2008150336").unwrap();
/// assert_eq!(bill.payment_id, "0002008150336");
/// assert_eq!(bill.fee, 20_081_000);
/// ```
pub fn validate(bill_number: &str, payment_id: &str) -> Result<ValidatedBill, BillError> {
    if !is_digits(bill_number) {
        return Err(BillError::InvalidBillNumber);
    }
    if !is_digits(payment_id) {
        return Err(BillError::InvalidPaymentId);
    }
    if bill_number.len() != ID_LENGTH {
        return Err(BillError::InvalidBillNumber);
    }
    if payment_id.len() < MIN_PAYMENT_ID_LENGTH {
        return Err(BillError::InvalidPaymentId);
    }

    let padded_payment = pad_left(payment_id, ID_LENGTH);

    let Some(bill_digits) = to_digits(bill_number) else {
        return Err(BillError::InvalidBillNumber);
    };
    let Some(payment_digits) = to_digits(&padded_payment) else {
        return Err(BillError::InvalidPaymentId);
    };

    // Re-checked after padding. Padding never shortens, so a payment id
    // supplied with more than 13 digits lands here.
    if bill_digits.len() != ID_LENGTH {
        return Err(BillError::InvalidBillNumber);
    }
    if payment_digits.len() != ID_LENGTH {
        return Err(BillError::InvalidPaymentId);
    }

    // Stage 1: the bill number's final digit, over the 12 digits before it.
    if !digit_matches(&bill_digits, LAST, 1, 12, bill_digits[LAST]) {
        return Err(BillError::InvalidBillNumber);
    }

    // Stage 2: the payment id's digit 11, over the 11 digits before it.
    // Digit 12 is deliberately left to the combined stage.
    if !digit_matches(&payment_digits, LAST, 2, 11, payment_digits[LAST - 1]) {
        return Err(BillError::InvalidPaymentId);
    }

    // Stage 3: bill number plus payment digits 5..=11, targeting digit 12.
    let combined: Vec<u8> = bill_digits
        .iter()
        .chain(&payment_digits[5..12])
        .copied()
        .collect();
    if combined.len() != COMBINED_LENGTH {
        return Err(BillError::InvalidPaymentId);
    }
    if !digit_matches(
        &combined,
        COMBINED_LENGTH - 1,
        0,
        COMBINED_LENGTH,
        payment_digits[LAST],
    ) {
        return Err(BillError::InvalidPaymentId);
    }

    // Unparseable content collapses to 0 and is rejected by the same
    // positivity check as a genuine zero amount.
    let amount: u64 = padded_payment[..AMOUNT_DIGITS].parse().unwrap_or(0);
    if amount == 0 {
        return Err(BillError::InvalidPaymentId);
    }

    Ok(ValidatedBill {
        bill_number: bill_number.to_owned(),
        payment_id: padded_payment,
        fee: amount * RIALS_PER_UNIT,
        bill_type: bill_digits[BILL_TYPE_INDEX],
    })
}

/// True when every character is an ASCII decimal digit.
///
/// Persian-script digits are rejected: identifiers travel through systems
/// that only understand ASCII.
pub(crate) fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// The digit values of `s`, or `None` when any character is not a digit.
pub(crate) fn to_digits(s: &str) -> Option<Vec<u8>> {
    s.chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Left-pad with `'0'` to `width`; longer inputs are returned unchanged.
pub(crate) fn pad_left(s: &str, width: usize) -> String {
    format!("{s:0>width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_valid_pair() {
        let bill = validate("1234567890125", "1234554").unwrap();
        assert_eq!(bill.bill_number, "1234567890125");
        assert_eq!(bill.payment_id, "0000001234554");
        assert_eq!(bill.fee, 12_000);
        assert_eq!(bill.bill_type, 2);
    }

    #[test]
    fn printed_sample_fails_bill_checksum() {
        // The weighted total of 7721217800141 is 221; 221 % 11 = 1, so the
        // check value clamps to 0 and cannot match the final digit 1.
        assert_eq!(
            validate("7721217800141", "5479201"),
            Err(BillError::InvalidBillNumber)
        );
    }

    #[test]
    fn non_digit_bill_rejected_first() {
        assert_eq!(validate("abc", "123"), Err(BillError::InvalidBillNumber));
        // Even when the payment id is also malformed.
        assert_eq!(validate("abc", "xyz"), Err(BillError::InvalidBillNumber));
    }

    #[test]
    fn non_digit_payment_rejected_before_lengths() {
        assert_eq!(validate("123", "12x4567"), Err(BillError::InvalidPaymentId));
    }

    #[test]
    fn short_payment_id() {
        assert_eq!(validate("1234567890123", "12"), Err(BillError::InvalidPaymentId));
    }

    #[test]
    fn wrong_bill_length() {
        assert_eq!(validate("123456789012", "1234554"), Err(BillError::InvalidBillNumber));
        assert_eq!(
            validate("12345678901234", "1234554"),
            Err(BillError::InvalidBillNumber)
        );
    }

    #[test]
    fn bill_checksum_mismatch() {
        assert_eq!(
            validate("1234567890124", "1234554"),
            Err(BillError::InvalidBillNumber)
        );
    }

    #[test]
    fn payment_checksum_mismatch() {
        // Digit 11 altered from 5 to 6.
        assert_eq!(
            validate("1234567890125", "1234564"),
            Err(BillError::InvalidPaymentId)
        );
    }

    #[test]
    fn combined_checksum_mismatch() {
        // Digit 11 intact, final digit altered from 4 to 5: the payment
        // stage passes and the combined stage catches it.
        assert_eq!(
            validate("1234567890125", "1234555"),
            Err(BillError::InvalidPaymentId)
        );
    }

    #[test]
    fn overlong_payment_id_hits_padding_gate() {
        // 14 digits: every precondition passes, padding leaves it unchanged,
        // and the digit-count gate rejects it.
        assert_eq!(
            validate("9876543210949", "00002008150336"),
            Err(BillError::InvalidPaymentId)
        );
    }

    #[test]
    fn zero_amount_rejected() {
        // Checksums all pass; the first 8 digits of the padded id are zeros.
        assert_eq!(
            validate("1234567890125", "0011128"),
            Err(BillError::InvalidPaymentId)
        );
    }

    #[test]
    fn full_length_payment_id_unpadded() {
        let bill = validate("9876543210949", "0002008150336").unwrap();
        assert_eq!(bill.payment_id, "0002008150336");
        assert_eq!(bill.fee, 20_081_000);
        assert_eq!(bill.bill_type, 4);
    }

    #[test]
    fn persian_digits_rejected() {
        assert_eq!(
            validate("۱۲۳۴۵۶۷۸۹۰۱۲۳", "1234554"),
            Err(BillError::InvalidBillNumber)
        );
        assert_eq!(
            validate("1234567890125", "۱۲۳۴۵۶۷"),
            Err(BillError::InvalidPaymentId)
        );
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(validate("", ""), Err(BillError::InvalidBillNumber));
        assert_eq!(validate("1234567890125", ""), Err(BillError::InvalidPaymentId));
    }

    #[test]
    fn pad_left_behaviour() {
        assert_eq!(pad_left("5479201", 13), "0000005479201");
        assert_eq!(pad_left("0002008150336", 13), "0002008150336");
        assert_eq!(pad_left("00002008150336", 13), "00002008150336");
    }

    #[test]
    fn to_digits_rejects_mixed_content() {
        assert_eq!(to_digits("12a4"), None);
        assert_eq!(to_digits("۵"), None);
        assert_eq!(to_digits("042"), Some(vec![0, 4, 2]));
        assert_eq!(to_digits(""), Some(vec![]));
    }
}

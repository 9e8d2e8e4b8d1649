//! Issuer-side completion of bill and payment identifiers.
//!
//! The inverse of validation: given the payload digits, append the check
//! digits that [`validate`](crate::validate) will verify. Useful for
//! issuing systems and for constructing test fixtures.

use crate::checksum::{check_digit, digit_matches};
use crate::error::BillError;
use crate::types::ID_LENGTH;
use crate::validation::{is_digits, pad_left, to_digits};

/// Digits of a payment id that precede its two check digits.
const PAYMENT_PAYLOAD_LENGTH: usize = ID_LENGTH - 2;

/// Append the check digit to a 12-digit bill-number payload.
///
/// The payload is positions 0–11 of the bill number, including the
/// bill-type digit at position 11.
///
/// ```rust
/// assert_eq!(ghabz::complete_bill_number("123456789012").unwrap(), "1234567890125");
/// ```
pub fn complete_bill_number(payload: &str) -> Result<String, BillError> {
    let Some(digits) = to_digits(payload) else {
        return Err(BillError::InvalidBillNumber);
    };
    if digits.len() != ID_LENGTH - 1 {
        return Err(BillError::InvalidBillNumber);
    }

    // The verification window skips the check digit itself, so the payload
    // anchors directly at its own last position.
    let check = check_digit(&digits, ID_LENGTH - 2, 0, ID_LENGTH - 1)
        .ok_or(BillError::InvalidBillNumber)?;
    Ok(format!("{payload}{check}"))
}

/// Build the full 13-digit payment id for a bill.
///
/// `payload` is the leading digits of the payment id — at most 11, shorter
/// forms are zero-padded — of which the first 8 (after padding) carry the
/// amount. The bill number must itself pass its checksum, since the final
/// payment digit is computed over both identifiers. A zero amount is
/// rejected: a completed id must be payable.
///
/// ```rust
/// let payment = ghabz::complete_payment_id("1234567890125", "12345").unwrap();
/// assert_eq!(payment, "0000001234554");
/// assert!(ghabz::validate("1234567890125", &payment).is_ok());
/// ```
pub fn complete_payment_id(bill_number: &str, payload: &str) -> Result<String, BillError> {
    let Some(bill_digits) = to_digits(bill_number) else {
        return Err(BillError::InvalidBillNumber);
    };
    if bill_digits.len() != ID_LENGTH {
        return Err(BillError::InvalidBillNumber);
    }
    if !digit_matches(&bill_digits, ID_LENGTH - 1, 1, 12, bill_digits[ID_LENGTH - 1]) {
        return Err(BillError::InvalidBillNumber);
    }

    if !is_digits(payload) || payload.is_empty() || payload.len() > PAYMENT_PAYLOAD_LENGTH {
        return Err(BillError::InvalidPaymentId);
    }
    let padded = pad_left(payload, PAYMENT_PAYLOAD_LENGTH);
    let mut digits = to_digits(&padded).ok_or(BillError::InvalidPaymentId)?;

    let amount: u64 = padded[..8].parse().unwrap_or(0);
    if amount == 0 {
        return Err(BillError::InvalidPaymentId);
    }

    // Digit 11: computed over the 11 payload digits.
    let payment_check = check_digit(&digits, PAYMENT_PAYLOAD_LENGTH - 1, 0, PAYMENT_PAYLOAD_LENGTH)
        .ok_or(BillError::InvalidPaymentId)?;
    digits.push(payment_check);

    // Digit 12: computed over the bill number plus payment digits 5..=11.
    let combined: Vec<u8> = bill_digits.iter().chain(&digits[5..12]).copied().collect();
    let combined_check = check_digit(&combined, combined.len() - 1, 0, combined.len())
        .ok_or(BillError::InvalidPaymentId)?;

    Ok(format!("{padded}{payment_check}{combined_check}"))
}

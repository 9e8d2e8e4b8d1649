use thiserror::Error;

/// Rejection of one of the two identifiers.
///
/// The numeric codes (`-1`, `-2`) and the exact messages are a published
/// contract — payment switches and downstream billing systems branch on
/// them — so both are fixed here and covered by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BillError {
    /// Non-digit or wrong-length bill number, or bill checksum mismatch.
    #[error("Invalid bill number")]
    InvalidBillNumber,

    /// Non-digit or too-short payment id, length mismatch after padding,
    /// payment or combined checksum mismatch, or a zero payable amount.
    #[error("Invalid payment ID")]
    InvalidPaymentId,
}

impl BillError {
    /// Stable numeric code: `-1` for bill-number errors, `-2` for
    /// payment-id errors.
    pub fn code(&self) -> i32 {
        match self {
            BillError::InvalidBillNumber => -1,
            BillError::InvalidPaymentId => -2,
        }
    }
}

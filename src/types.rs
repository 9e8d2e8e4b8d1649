use serde::{Deserialize, Serialize};

use crate::service::ServiceKind;

/// Length of a bill number, and of a payment identifier after zero-padding.
pub const ID_LENGTH: usize = 13;

/// Shortest payment identifier accepted as supplied.
pub const MIN_PAYMENT_ID_LENGTH: usize = 7;

/// 0-indexed position of the bill-type digit within the bill number.
pub const BILL_TYPE_INDEX: usize = 11;

/// A bill/payment pair that passed all three checksum stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedBill {
    /// The 13-digit bill number, exactly as supplied.
    pub bill_number: String,
    /// The payment identifier, zero-padded to 13 digits.
    pub payment_id: String,
    /// Payable amount in Rials: the amount field of the payment id × 1000.
    pub fee: u64,
    /// The bill-type digit (position 11 of the bill number).
    pub bill_type: u8,
}

impl ValidatedBill {
    /// The service category the bill-type digit denotes, if assigned.
    ///
    /// Informational only — validation never depends on it.
    pub fn service(&self) -> Option<ServiceKind> {
        ServiceKind::from_digit(self.bill_type)
    }
}

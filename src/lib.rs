//! # ghabz
//!
//! Validation of Iranian utility-bill identifiers: the 13-digit bill number
//! (شناسه قبض) paired with its payment identifier (شناسه پرداخت).
//!
//! Every bill carries three embedded mod-11 check digits — one in the bill
//! number, two in the payment identifier — computed over weighted digit
//! windows. [`validate`] verifies all three and derives the payable amount
//! in Rials. [`complete_bill_number`] and [`complete_payment_id`] are the
//! issuer-side inverse: they append the check digits a terminal will verify.
//!
//! ## Quick Start
//!
//! ```rust
//! use ghabz::validate;
//!
//! let bill = validate("1234567890125", "1234554").unwrap();
//! assert_eq!(bill.payment_id, "0000001234554");
//! assert_eq!(bill.fee, 12_000);
//! assert_eq!(bill.bill_type, 2);
//!
//! // A transposed or mistyped digit is caught by the checksums.
//! let err = validate("1234567890124", "1234554").unwrap_err();
//! assert_eq!(err.code(), -1);
//! assert_eq!(err.to_string(), "Invalid bill number");
//! ```
//!
//! All functions are pure: no I/O, no shared state, safe to call from any
//! number of threads.

mod checksum;
mod error;
mod issuing;
mod service;
mod types;
mod validation;

pub use checksum::check_digit;
pub use error::*;
pub use issuing::*;
pub use service::*;
pub use types::*;
pub use validation::*;

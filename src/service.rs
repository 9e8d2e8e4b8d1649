//! Bill-type digit classification.
//!
//! Position 11 of the bill number identifies the issuing utility. The table
//! below reflects the categories printed on bills; it is descriptive only,
//! and the validator never consults it.

use serde::{Deserialize, Serialize};

/// Utility/service category encoded by the bill-type digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    Water,
    Electricity,
    Gas,
    FixedLineTelephone,
    MobileTelephone,
    MunicipalityDues,
    Tax,
    TrafficFines,
    Toll,
}

impl ServiceKind {
    /// Map a bill-type digit to its service category.
    ///
    /// Digit 0 is unassigned; digits above 9 cannot occur in a validated
    /// bill. Both return `None`.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(ServiceKind::Water),
            2 => Some(ServiceKind::Electricity),
            3 => Some(ServiceKind::Gas),
            4 => Some(ServiceKind::FixedLineTelephone),
            5 => Some(ServiceKind::MobileTelephone),
            6 => Some(ServiceKind::MunicipalityDues),
            7 => Some(ServiceKind::Tax),
            8 => Some(ServiceKind::TrafficFines),
            9 => Some(ServiceKind::Toll),
            _ => None,
        }
    }

    /// The digit as it appears in the bill number.
    pub fn digit(&self) -> u8 {
        match self {
            ServiceKind::Water => 1,
            ServiceKind::Electricity => 2,
            ServiceKind::Gas => 3,
            ServiceKind::FixedLineTelephone => 4,
            ServiceKind::MobileTelephone => 5,
            ServiceKind::MunicipalityDues => 6,
            ServiceKind::Tax => 7,
            ServiceKind::TrafficFines => 8,
            ServiceKind::Toll => 9,
        }
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Water => "Water",
            ServiceKind::Electricity => "Electricity",
            ServiceKind::Gas => "Gas",
            ServiceKind::FixedLineTelephone => "Fixed-line telephone",
            ServiceKind::MobileTelephone => "Mobile telephone",
            ServiceKind::MunicipalityDues => "Municipality dues",
            ServiceKind::Tax => "Tax",
            ServiceKind::TrafficFines => "Traffic fines",
            ServiceKind::Toll => "Toll",
        }
    }
}

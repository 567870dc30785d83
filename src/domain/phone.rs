//! Brazilian phone number rules.
//!
//! Numbers carry a two-digit area code (DDD) followed by an 8-digit
//! fixed-line or 9-digit mobile subscriber number.

use super::digits::unformat;
use super::mask::MaskPattern;

pub const PHONE_FIXED_LEN: usize = 10;
pub const PHONE_MOBILE_LEN: usize = 11;

/// Phone line type, decided by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneKind {
    Fixed,
    Mobile,
}

impl PhoneKind {
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            PHONE_FIXED_LEN => Some(Self::Fixed),
            PHONE_MOBILE_LEN => Some(Self::Mobile),
            _ => None,
        }
    }

    pub fn mask(&self) -> MaskPattern {
        match self {
            Self::Fixed => MaskPattern::PHONE_FIXED,
            Self::Mobile => MaskPattern::PHONE_MOBILE,
        }
    }
}

/// True when the number has a complete fixed-line or mobile digit count.
///
/// Only the length is checked; area codes are not validated.
pub fn is_valid_phone(input: &str) -> bool {
    PhoneKind::from_len(unformat(input).len()).is_some()
}

/// Canonical digits and display form of a complete phone number.
pub fn normalize_phone(input: &str) -> Option<(String, String)> {
    let digits = unformat(input);
    let kind = PhoneKind::from_len(digits.len())?;
    let display = kind.mask().apply(&digits);
    Some((digits, display))
}

//! Progressive input masking.
//!
//! A [`MaskPattern`] is a template where `9` marks "next digit goes here"
//! and every other character is literal punctuation. Masking is
//! progressive: a literal is only written when at least one more digit
//! follows it, so a half-typed CNPJ reads `12.345` and never `12.345.`.

use super::digits::unformat;
use crate::error::BrdocsError;
use std::fmt;
use std::str::FromStr;

/// Placeholder character marking a digit slot.
pub const PLACEHOLDER: char = '9';

/// Fixed display template for one document or phone format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskPattern(&'static str);

impl MaskPattern {
    /// `ddd.ddd.ddd-dd`
    pub const CPF: MaskPattern = MaskPattern("999.999.999-99");
    /// `dd.ddd.ddd/dddd-dd`
    pub const CNPJ: MaskPattern = MaskPattern("99.999.999/9999-99");
    /// `(dd) dddd-dddd`
    pub const PHONE_FIXED: MaskPattern = MaskPattern("(99) 9999-9999");
    /// `(dd) ddddd-dddd`
    pub const PHONE_MOBILE: MaskPattern = MaskPattern("(99) 99999-9999");

    /// Builds a custom pattern.
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Display length of a fully filled pattern, in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of digit slots.
    pub fn capacity(&self) -> usize {
        self.0.chars().filter(|&c| c == PLACEHOLDER).count()
    }

    /// Masks the digits of `raw` with this pattern.
    pub fn apply(&self, raw: &str) -> String {
        let digits = unformat(raw);
        let mut remaining = digits.chars().peekable();
        let mut masked = String::with_capacity(self.0.len());

        for slot in self.0.chars() {
            if remaining.peek().is_none() {
                break;
            }
            if slot == PLACEHOLDER {
                if let Some(digit) = remaining.next() {
                    masked.push(digit);
                }
            } else {
                masked.push(slot);
            }
        }

        masked
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Mask family selected by a form field.
///
/// The auto families pick their concrete pattern from the digit count on
/// every call, so a value switches from CPF to CNPJ layout as soon as the
/// twelfth digit is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskKind {
    Cpf,
    Cnpj,
    /// CPF up to 11 digits, CNPJ beyond
    CpfCnpjAuto,
    PhoneFixed,
    PhoneMobile,
    /// Fixed-line up to 10 digits, mobile beyond
    Phone,
}

impl MaskKind {
    pub const ALL: [MaskKind; 6] = [
        MaskKind::Cpf,
        MaskKind::Cnpj,
        MaskKind::CpfCnpjAuto,
        MaskKind::PhoneFixed,
        MaskKind::PhoneMobile,
        MaskKind::Phone,
    ];

    /// Pattern id as used by form definitions.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::CpfCnpjAuto => "cpf-cnpj-auto",
            Self::PhoneFixed => "phone-fixed",
            Self::PhoneMobile => "phone-mobile",
            Self::Phone => "phone",
        }
    }

    /// Concrete pattern used for a value with `digit_count` digits.
    pub fn pattern_for(&self, digit_count: usize) -> MaskPattern {
        match self {
            Self::Cpf => MaskPattern::CPF,
            Self::Cnpj => MaskPattern::CNPJ,
            Self::CpfCnpjAuto if digit_count <= 11 => MaskPattern::CPF,
            Self::CpfCnpjAuto => MaskPattern::CNPJ,
            Self::PhoneFixed => MaskPattern::PHONE_FIXED,
            Self::PhoneMobile => MaskPattern::PHONE_MOBILE,
            Self::Phone if digit_count <= 10 => MaskPattern::PHONE_FIXED,
            Self::Phone => MaskPattern::PHONE_MOBILE,
        }
    }

    /// Largest number of digits any pattern of this family accepts.
    pub fn max_digits(&self) -> usize {
        match self {
            Self::CpfCnpjAuto => MaskPattern::CNPJ.capacity(),
            Self::Phone => MaskPattern::PHONE_MOBILE.capacity(),
            other => other.pattern_for(0).capacity(),
        }
    }

    /// Longest display string this family can produce.
    pub fn max_len(&self) -> usize {
        match self {
            Self::CpfCnpjAuto => MaskPattern::CNPJ.len(),
            Self::Phone => MaskPattern::PHONE_MOBILE.len(),
            other => other.pattern_for(0).len(),
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MaskKind {
    type Err = BrdocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| BrdocsError::UnknownMask(s.to_string()))
    }
}

/// Masks `raw` with the pattern `kind` selects for its digit count.
pub fn apply_mask(raw: &str, kind: MaskKind) -> String {
    let digit_count = raw.chars().filter(|c| c.is_ascii_digit()).count();
    kind.pattern_for(digit_count).apply(raw)
}

pub fn format_cpf(raw: &str) -> String {
    apply_mask(raw, MaskKind::Cpf)
}

pub fn format_cnpj(raw: &str) -> String {
    apply_mask(raw, MaskKind::Cnpj)
}

/// Masks a combined CPF/CNPJ field.
pub fn format_cpf_cnpj(raw: &str) -> String {
    apply_mask(raw, MaskKind::CpfCnpjAuto)
}

/// Masks a phone field, switching to the mobile layout at 11 digits.
pub fn format_phone(raw: &str) -> String {
    apply_mask(raw, MaskKind::Phone)
}

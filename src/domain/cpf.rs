//! CPF (individual taxpayer number) rules.
//!
//! A CPF has 9 body digits and 2 check digits, displayed as
//! `ddd.ddd.ddd-dd`.

use super::checksum;
use super::digits::DigitString;
use super::document::{Document, DocumentKind};
use super::mask::MaskPattern;
use super::DocumentMatcher;
use crate::error::Rejection;
use once_cell::sync::Lazy;
use regex::Regex;

pub const CPF_LEN: usize = 11;

/// Weights for the first check digit (`d0..d8`).
pub const CPF_WEIGHTS_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
/// Weights for the second check digit (`d0..d9`).
pub const CPF_WEIGHTS_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Placeholder CPFs refused even when their arithmetic checks out.
pub const CPF_DENYLIST: &[&str] = &[
    "12345678909",
    "98765432100",
    "00000000000",
    "11111111111",
    "22222222222",
    "33333333333",
    "44444444444",
    "55555555555",
    "66666666666",
    "77777777777",
    "88888888888",
    "99999999999",
];

/// Validates a CPF and reports why it was refused.
///
/// Checks run in order: length, repeated digits, denylist, first check
/// digit, second check digit.
pub fn check_cpf(input: &str) -> Result<Document, Rejection> {
    let digits = DigitString::from_input(input);

    match digits.len() {
        n if n < CPF_LEN => return Err(Rejection::TooShort),
        n if n > CPF_LEN => return Err(Rejection::TooLong),
        _ => {}
    }
    if digits.is_repeated() {
        return Err(Rejection::RepeatedDigits);
    }
    if CPF_DENYLIST.contains(&digits.as_str()) {
        return Err(Rejection::Denylisted);
    }
    if !checksum::verify(&digits.values(), &CPF_WEIGHTS_1, &CPF_WEIGHTS_2) {
        return Err(Rejection::BadChecksum);
    }

    Ok(Document::new(DocumentKind::Cpf, digits))
}

pub fn is_valid_cpf(input: &str) -> bool {
    check_cpf(input).is_ok()
}

/// CPF detection in free text.
#[derive(Debug, Clone, Default)]
pub struct CpfMatcher;

impl CpfMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b\d{3}\.?\d{3}\.?\d{3}-?\d{2}\b").expect("Valid CPF regex")
        });
        &PATTERN
    }
}

impl DocumentMatcher for CpfMatcher {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cpf
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn check(&self, candidate: &str) -> Result<Document, Rejection> {
        check_cpf(candidate)
    }

    fn generate_variants(&self, normalized: &str) -> Vec<String> {
        if normalized.len() != CPF_LEN {
            return vec![normalized.to_string()];
        }

        vec![
            normalized.to_string(),                               // 11144477735
            MaskPattern::CPF.apply(normalized),                   // 111.444.777-35
            format!("{}-{}", &normalized[..9], &normalized[9..]), // 111444777-35
        ]
    }
}

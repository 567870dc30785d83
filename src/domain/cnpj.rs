//! CNPJ (company taxpayer number) rules.
//!
//! A CNPJ has 8 root digits, 4 branch digits and 2 check digits, displayed
//! as `dd.ddd.ddd/dddd-dd`.

use super::checksum;
use super::digits::DigitString;
use super::document::{Document, DocumentKind};
use super::mask::MaskPattern;
use super::DocumentMatcher;
use crate::error::Rejection;
use once_cell::sync::Lazy;
use regex::Regex;

pub const CNPJ_LEN: usize = 14;

/// Weights for the first check digit (`d0..d11`).
pub const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
/// Weights for the second check digit (`d0..d12`).
pub const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Placeholder CNPJs refused even when their arithmetic checks out.
pub const CNPJ_DENYLIST: &[&str] = &[
    "12345678000195",
    "00000000000000",
    "11111111111111",
    "22222222222222",
    "33333333333333",
    "44444444444444",
    "55555555555555",
    "66666666666666",
    "77777777777777",
    "88888888888888",
    "99999999999999",
];

/// Validates a CNPJ and reports why it was refused.
pub fn check_cnpj(input: &str) -> Result<Document, Rejection> {
    let digits = DigitString::from_input(input);

    match digits.len() {
        n if n < CNPJ_LEN => return Err(Rejection::TooShort),
        n if n > CNPJ_LEN => return Err(Rejection::TooLong),
        _ => {}
    }
    if digits.is_repeated() {
        return Err(Rejection::RepeatedDigits);
    }
    if CNPJ_DENYLIST.contains(&digits.as_str()) {
        return Err(Rejection::Denylisted);
    }
    if !checksum::verify(&digits.values(), &CNPJ_WEIGHTS_1, &CNPJ_WEIGHTS_2) {
        return Err(Rejection::BadChecksum);
    }

    Ok(Document::new(DocumentKind::Cnpj, digits))
}

pub fn is_valid_cnpj(input: &str) -> bool {
    check_cnpj(input).is_ok()
}

/// CNPJ detection in free text.
#[derive(Debug, Clone, Default)]
pub struct CnpjMatcher;

impl CnpjMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}\b").expect("Valid CNPJ regex")
        });
        &PATTERN
    }
}

impl DocumentMatcher for CnpjMatcher {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cnpj
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn check(&self, candidate: &str) -> Result<Document, Rejection> {
        check_cnpj(candidate)
    }

    fn generate_variants(&self, normalized: &str) -> Vec<String> {
        if normalized.len() != CNPJ_LEN {
            return vec![normalized.to_string()];
        }

        let root = &normalized[..8];
        let branch = &normalized[8..12];
        let check = &normalized[12..];

        vec![
            normalized.to_string(),                   // 11222333000181
            MaskPattern::CNPJ.apply(normalized),      // 11.222.333/0001-81
            format!("{}/{}-{}", root, branch, check), // 11222333/0001-81
        ]
    }
}

//! Domain models and business logic for Brazilian documents.
//!
//! This module contains the pure rules of the engine: digit extraction,
//! progressive masking, CPF/CNPJ check digits, the length-based dispatcher
//! and phone completeness.

pub mod checksum;
pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod document;
pub mod mask;
pub mod phone;

pub use cnpj::{check_cnpj, is_valid_cnpj, CnpjMatcher};
pub use cpf::{check_cpf, is_valid_cpf, CpfMatcher};
pub use digits::{unformat, DigitString};
pub use document::{
    check_document, is_valid_cpf_or_cnpj, is_valid_document, scan, Document, DocumentKind,
    Finding,
};
pub use mask::{
    apply_mask, format_cnpj, format_cpf, format_cpf_cnpj, format_phone, MaskKind, MaskPattern,
};
pub use phone::{is_valid_phone, normalize_phone, PhoneKind};

use crate::error::Rejection;
use regex::Regex;

/// Detection and validation of one document type in free text.
pub trait DocumentMatcher: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// Regex matching formatted or bare candidates.
    fn pattern(&self) -> &Regex;

    /// Validates a single candidate.
    fn check(&self, candidate: &str) -> Result<Document, Rejection>;

    /// Display forms of a canonical digit string.
    fn generate_variants(&self, normalized: &str) -> Vec<String>;

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Digits of the first candidate in `text`, if it validates.
    fn normalize(&self, text: &str) -> Option<String> {
        let candidate = self.pattern().find(text)?;
        self.check(candidate.as_str()).ok().map(|doc| doc.digits)
    }
}

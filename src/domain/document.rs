//! Document dispatch and text scanning.
//!
//! The combined CPF/CNPJ field does not know up front which document it
//! holds; the digit count decides. Eleven digits are checked as a CPF,
//! fourteen as a CNPJ, and anything else is refused.

use super::cnpj::{check_cnpj, CnpjMatcher, CNPJ_LEN};
use super::cpf::{check_cpf, CpfMatcher, CPF_LEN};
use super::digits::{unformat, DigitString};
use super::mask::MaskPattern;
use super::DocumentMatcher;
use crate::error::Rejection;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Taxpayer document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    /// Classifies a digit count; `None` for any length other than 11 or 14.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            _ => None,
        }
    }

    pub fn digit_count(&self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    pub fn mask(&self) -> MaskPattern {
        match self {
            Self::Cpf => MaskPattern::CPF,
            Self::Cnpj => MaskPattern::CNPJ,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A document that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Document {
    pub kind: DocumentKind,
    pub digits: String,
}

impl Document {
    pub(crate) fn new(kind: DocumentKind, digits: DigitString) -> Self {
        Self {
            kind,
            digits: digits.into_string(),
        }
    }

    /// Fully masked display form.
    pub fn formatted(&self) -> String {
        self.kind.mask().apply(&self.digits)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.formatted())
    }
}

/// Validates a CPF or CNPJ, routing on the cleaned digit count.
pub fn check_document(input: &str) -> Result<Document, Rejection> {
    let len = unformat(input).len();
    let kind = DocumentKind::from_len(len);
    tracing::trace!(digits = len, kind = ?kind, "dispatching document check");

    match kind {
        Some(DocumentKind::Cpf) => check_cpf(input),
        Some(DocumentKind::Cnpj) => check_cnpj(input),
        None if len > CNPJ_LEN => Err(Rejection::TooLong),
        None => Err(Rejection::TooShort),
    }
}

pub fn is_valid_cpf_or_cnpj(input: &str) -> bool {
    check_document(input).is_ok()
}

/// Alias of [`is_valid_cpf_or_cnpj`].
pub fn is_valid_document(input: &str) -> bool {
    is_valid_cpf_or_cnpj(input)
}

/// A document candidate found in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: DocumentKind,
    /// Text exactly as it appeared
    pub matched: String,
    /// Byte range in the scanned text
    pub span: Range<usize>,
    /// `None` when the candidate validates
    pub rejection: Option<Rejection>,
}

impl Finding {
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Finds CPF and CNPJ candidates in `text`, valid or not.
///
/// CNPJ candidates are collected first; a CPF candidate overlapping any
/// CNPJ span is dropped. Results are ordered by position.
pub fn scan(text: &str) -> Vec<Finding> {
    let cnpj = CnpjMatcher::new();
    let cpf = CpfMatcher::new();

    let mut findings: Vec<Finding> = cnpj
        .pattern()
        .find_iter(text)
        .map(|m| finding(&cnpj, m.as_str(), m.range()))
        .collect();

    let taken: Vec<Range<usize>> = findings.iter().map(|f| f.span.clone()).collect();
    findings.extend(
        cpf.pattern()
            .find_iter(text)
            .filter(|m| {
                !taken
                    .iter()
                    .any(|span| m.start() < span.end && span.start < m.end())
            })
            .map(|m| finding(&cpf, m.as_str(), m.range())),
    );

    findings.sort_by_key(|f| f.span.start);
    tracing::debug!(
        candidates = findings.len(),
        valid = findings.iter().filter(|f| f.is_valid()).count(),
        "scanned text for documents"
    );
    findings
}

fn finding(matcher: &dyn DocumentMatcher, matched: &str, span: Range<usize>) -> Finding {
    Finding {
        kind: matcher.kind(),
        matched: matched.to_string(),
        span,
        rejection: matcher.check(matched).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_length() {
        assert_eq!(
            check_document("111.444.777-35").map(|d| d.kind),
            Ok(DocumentKind::Cpf)
        );
        assert_eq!(
            check_document("11.222.333/0001-81").map(|d| d.kind),
            Ok(DocumentKind::Cnpj)
        );
    }

    #[test]
    fn test_intermediate_lengths_rejected() {
        assert_eq!(check_document("111444777350"), Err(Rejection::TooShort));
        assert_eq!(check_document("1114447773501"), Err(Rejection::TooShort));
        assert_eq!(check_document("112223330001810"), Err(Rejection::TooLong));
        assert_eq!(check_document(""), Err(Rejection::TooShort));
    }

    #[test]
    fn test_document_display() {
        let doc = check_document("11144477735").unwrap();
        assert_eq!(doc.to_string(), "CPF 111.444.777-35");
        assert_eq!(doc.formatted(), "111.444.777-35");
    }

    #[test]
    fn test_scan_prefers_cnpj_spans() {
        let text = "CNPJ 11.222.333/0001-81, sócio CPF 111.444.777-35";
        let findings = scan(text);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind, DocumentKind::Cnpj);
        assert_eq!(findings[1].kind, DocumentKind::Cpf);
        assert!(findings.iter().all(Finding::is_valid));
    }

    #[test]
    fn test_scan_reports_invalid_candidates() {
        let findings = scan("CPF 111.444.777-36");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rejection, Some(Rejection::BadChecksum));
    }
}

//! Brazilian taxpayer document validation and progressive input masking.
//!
//! This library provides the pure rules behind CPF/CNPJ and phone form
//! fields: masking digits as they are typed, stripping masks back to
//! canonical digits, and checking CPF/CNPJ check digits.
//!
//! # Features
//!
//! - **Progressive Masking**: Punctuation only up to the last typed digit
//! - **Auto Layout**: Combined CPF/CNPJ and fixed/mobile phone fields pick
//!   their layout from the digit count
//! - **Check Digits**: Modulo-11 validation for CPF and CNPJ, with
//!   denylists of placeholder values
//! - **Structured Results**: [`Rejection`] explains why a value was refused
//! - **Text Scanning**: Finds CPF/CNPJ candidates in free text
//!
//! # Architecture
//!
//! - [`domain`]: Masking, unformatting, check digits and dispatch
//! - [`field`]: Form field state driven by the domain rules
//! - [`quote`]: Quote line totals
//! - [`error`]: Error and rejection types
//!
//! # Quick Start
//!
//! ```
//! use brdocs::{apply_mask, is_valid_cpf_or_cnpj, unformat, MaskKind};
//!
//! let display = apply_mask("11222333000181", MaskKind::CpfCnpjAuto);
//! assert_eq!(display, "11.222.333/0001-81");
//! assert_eq!(unformat(&display), "11222333000181");
//! assert!(is_valid_cpf_or_cnpj(&display));
//! ```
//!
//! # Examples
//!
//! ## Explain a Rejection
//!
//! ```
//! use brdocs::{check_document, Rejection};
//!
//! assert_eq!(check_document("123.456.789-09"), Err(Rejection::Denylisted));
//! assert_eq!(check_document("111.444.777-36"), Err(Rejection::BadChecksum));
//! ```
//!
//! ## Drive a Form Field
//!
//! ```
//! use brdocs::field::{Feedback, InputField};
//!
//! let mut field = InputField::phone();
//! let update = field.change("11987654321");
//! assert_eq!(update.display, "(11) 98765-4321");
//! assert_eq!(field.blur(), Feedback::Valid);
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod field;
pub mod quote;

// Re-exports for convenient access
pub use domain::{
    apply_mask, check_cnpj, check_cpf, check_document, format_cnpj, format_cpf,
    format_cpf_cnpj, format_phone, is_valid_cnpj, is_valid_cpf, is_valid_cpf_or_cnpj,
    is_valid_document, is_valid_phone, scan, unformat, CnpjMatcher, CpfMatcher, Document,
    DocumentKind, DocumentMatcher, Finding, MaskKind, MaskPattern,
};
pub use error::{BrdocsError, BrdocsResult, Rejection};
pub use field::{FieldUpdate, FieldValidator, InputField};
pub use quote::{quote_total, QuoteItem};

//! Field validator trait and the stock field types.
//!
//! Each form field pairs a mask family with a completeness rule. The
//! [`InputField`](super::InputField) state holder is generic over this
//! trait, so hosts can plug in their own field types.

use crate::domain::{apply_mask, is_valid_cpf_or_cnpj, is_valid_phone, unformat, MaskKind};
use serde::Serialize;

/// Validation feedback shown next to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Field untouched or empty
    None,
    Valid,
    Invalid,
}

/// Masking and validation rules for one kind of form field.
pub trait FieldValidator: Send + Sync {
    /// Mask family applied on every change.
    fn mask_kind(&self) -> MaskKind;

    /// Decides whether the current value is acceptable.
    fn validate(&self, raw: &str) -> bool;

    /// Returns a human-readable name for this field type.
    fn name(&self) -> &str;

    fn mask(&self, raw: &str) -> String {
        apply_mask(raw, self.mask_kind())
    }

    /// Longest display string the field accepts.
    fn max_len(&self) -> usize {
        self.mask_kind().max_len()
    }
}

/// Combined CPF/CNPJ field with check-digit validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpfCnpjField;

impl FieldValidator for CpfCnpjField {
    fn mask_kind(&self) -> MaskKind {
        MaskKind::CpfCnpjAuto
    }

    fn validate(&self, raw: &str) -> bool {
        !unformat(raw).is_empty() && is_valid_cpf_or_cnpj(raw)
    }

    fn name(&self) -> &str {
        "cpf-cnpj"
    }
}

/// Phone field switching between fixed-line and mobile layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneField;

impl FieldValidator for PhoneField {
    fn mask_kind(&self) -> MaskKind {
        MaskKind::Phone
    }

    fn validate(&self, raw: &str) -> bool {
        is_valid_phone(raw)
    }

    fn name(&self) -> &str {
        "phone"
    }
}

/// Generic masked field, valid once every digit slot is filled.
#[derive(Debug, Clone, Copy)]
pub struct MaskedField(pub MaskKind);

impl FieldValidator for MaskedField {
    fn mask_kind(&self) -> MaskKind {
        self.0
    }

    fn validate(&self, raw: &str) -> bool {
        let count = unformat(raw).len();
        count > 0 && count == self.0.pattern_for(count).capacity()
    }

    fn name(&self) -> &str {
        self.0.id()
    }
}

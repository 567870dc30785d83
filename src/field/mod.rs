//! Form field state handling.
//!
//! The engine owns the transform, the host owns the state: an
//! [`InputField`] holds the current display text and blur flag, and every
//! keystroke goes through [`InputField::change`], which re-masks the whole
//! value and reports its canonical digits and validity.

pub mod strategy;

pub use strategy::{CpfCnpjField, Feedback, FieldValidator, MaskedField, PhoneField};

use crate::domain::{unformat, MaskKind};
use serde::Serialize;

/// Result of feeding a new raw value into a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    /// Masked text to show
    pub display: String,
    /// Canonical digits for storage and callbacks
    pub value: String,
    pub valid: bool,
}

/// State of one masked form field.
pub struct InputField {
    validator: Box<dyn FieldValidator>,
    display: String,
    blurred: bool,
}

impl InputField {
    /// Creates an empty field governed by `validator`.
    pub fn new(validator: Box<dyn FieldValidator>) -> Self {
        Self {
            validator,
            display: String::new(),
            blurred: false,
        }
    }

    /// Combined CPF/CNPJ field.
    pub fn cpf_cnpj() -> Self {
        Self::new(Box::new(CpfCnpjField))
    }

    /// Phone field.
    pub fn phone() -> Self {
        Self::new(Box::new(PhoneField))
    }

    /// Field with a plain mask and fill-the-pattern validation.
    pub fn masked(kind: MaskKind) -> Self {
        Self::new(Box::new(MaskedField(kind)))
    }

    /// Applies a raw input value, as typed or pasted.
    pub fn change(&mut self, raw: &str) -> FieldUpdate {
        self.display = self.validator.mask(raw);
        let update = self.snapshot();
        tracing::trace!(
            field = self.validator.name(),
            digits = update.value.len(),
            valid = update.valid,
            "field changed"
        );
        update
    }

    /// Replaces the value from outside the keyboard path (initial or
    /// externally bound value). The blur flag is left untouched.
    pub fn set_value(&mut self, value: &str) -> FieldUpdate {
        self.display = self.validator.mask(value);
        self.snapshot()
    }

    /// Marks the field as visited and returns the feedback to show.
    pub fn blur(&mut self) -> Feedback {
        self.blurred = true;
        self.feedback()
    }

    /// Feedback is only shown once the field was blurred and holds digits.
    pub fn feedback(&self) -> Feedback {
        if !self.blurred || unformat(&self.display).is_empty() {
            Feedback::None
        } else if self.validator.validate(&self.display) {
            Feedback::Valid
        } else {
            Feedback::Invalid
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn value(&self) -> String {
        unformat(&self.display)
    }

    pub fn is_valid(&self) -> bool {
        self.validator.validate(&self.display)
    }

    pub fn is_blurred(&self) -> bool {
        self.blurred
    }

    pub fn max_len(&self) -> usize {
        self.validator.max_len()
    }

    fn snapshot(&self) -> FieldUpdate {
        FieldUpdate {
            display: self.display.clone(),
            value: self.value(),
            valid: self.is_valid(),
        }
    }
}

impl std::fmt::Debug for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputField")
            .field("validator", &self.validator.name())
            .field("display", &self.display)
            .field("blurred", &self.blurred)
            .finish()
    }
}

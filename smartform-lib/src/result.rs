//! Validation outcomes: per-field results and failure reasons.

use crate::field::Field;

/// Why a field failed validation.
///
/// One variant per distinct failure; the display text is the inline message
/// shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Reason {
    #[error("Full name is required")]
    NameRequired,
    #[error("Full name must be at least 5 characters long")]
    NameTooShort,
    #[error("Full name can only contain letters and spaces")]
    NameCharset,

    #[error("Email address is required")]
    EmailRequired,
    #[error("Email must contain @ symbol")]
    EmailMissingAt,
    #[error("Please enter a valid email address")]
    EmailFormat,

    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number must be exactly 10 digits")]
    PhoneLength,
    #[error("Please enter a valid phone number (not 1234567890)")]
    PhoneSequential,
    #[error("Please enter a valid phone number")]
    PhoneRepeated,

    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Password cannot be \"password\"")]
    PasswordLiteral,
    #[error("Password cannot contain your name")]
    PasswordContainsName,
    #[error("Please choose a stronger password")]
    PasswordWeak,

    #[error("Please confirm your password")]
    ConfirmRequired,
    #[error("Passwords do not match")]
    ConfirmMismatch,

    #[error("You must agree to the terms and conditions")]
    TermsUnchecked,
}

/// Result of validating a single field.
///
/// Produced fresh on every evaluation; never mutated. A validation failure is
/// data, not an error to propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The field passed validation.
    #[default]
    Valid,
    /// The field failed; the first failing sub-rule's reason is
    /// authoritative, later sub-rules are not evaluated.
    Invalid(Reason),
}

impl ValidationResult {
    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the failure reason (if any).
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }
}

/// A single failed field within a whole-form report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Which field failed.
    pub field: Field,
    /// Why it failed.
    pub reason: Reason,
}

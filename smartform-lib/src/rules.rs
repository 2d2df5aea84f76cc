//! The field rule engine: six pure rule chains and their dispatch.
//!
//! Each rule takes plain values, never widgets, and returns a
//! [`ValidationResult`]. Checks run in order and the first failure wins;
//! later checks for that field are not evaluated.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::Field;
use crate::result::{Reason, ValidationResult};
use crate::values::FormValues;

/// Minimum full-name length, in characters.
pub const MIN_NAME_LEN: usize = 5;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Exact phone-number length, in digits.
pub const PHONE_LEN: usize = 10;

/// The sequential-digits placeholder, rejected as a real number.
pub const FORBIDDEN_PHONE: &str = "1234567890";

/// Well-known weak passwords, rejected outright (compared lower-cased).
pub const WEAK_PASSWORDS: [&str; 4] = ["12345678", "qwerty123", "abc12345", "password123"];

/// Letters and spaces only.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

/// local-part @ domain . tld, with no whitespace and no extra `@`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validate the full name: required, at least [`MIN_NAME_LEN`] characters,
/// letters and spaces only.
pub fn validate_full_name(full_name: &str) -> ValidationResult {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return ValidationResult::Invalid(Reason::NameRequired);
    }
    if full_name.chars().count() < MIN_NAME_LEN {
        return ValidationResult::Invalid(Reason::NameTooShort);
    }
    if !NAME_REGEX.is_match(full_name) {
        return ValidationResult::Invalid(Reason::NameCharset);
    }
    ValidationResult::Valid
}

/// Validate the email address: required, must contain `@`, must match the
/// basic `local@domain.tld` shape.
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::Invalid(Reason::EmailRequired);
    }
    if !email.contains('@') {
        return ValidationResult::Invalid(Reason::EmailMissingAt);
    }
    if !EMAIL_REGEX.is_match(email) {
        return ValidationResult::Invalid(Reason::EmailFormat);
    }
    ValidationResult::Valid
}

/// Validate the phone number: required, exactly [`PHONE_LEN`] digits, not the
/// sequential placeholder, not ten copies of one digit.
///
/// The value is expected to be pre-filtered to digits by the UI layer
/// ([`crate::utils::digits_only`]); this rule validates, it does not filter.
pub fn validate_phone(phone: &str) -> ValidationResult {
    let phone = phone.trim();
    if phone.is_empty() {
        return ValidationResult::Invalid(Reason::PhoneRequired);
    }
    if phone.chars().count() != PHONE_LEN {
        return ValidationResult::Invalid(Reason::PhoneLength);
    }
    if phone == FORBIDDEN_PHONE {
        return ValidationResult::Invalid(Reason::PhoneSequential);
    }
    if all_same_digit(phone) {
        return ValidationResult::Invalid(Reason::PhoneRepeated);
    }
    ValidationResult::Valid
}

/// Ten copies of a single digit, like `1111111111`.
fn all_same_digit(phone: &str) -> bool {
    let mut chars = phone.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() => chars.all(|c| c == first),
        _ => false,
    }
}

/// Validate the password against the current full name.
///
/// Length and emptiness look at the raw (untrimmed) value; the literal,
/// name, and denylist checks compare lower-cased. The name check flags the
/// whole name and each of its words, so `johndoe123` fails for `John Doe`.
pub fn validate_password(password: &str, full_name: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::Invalid(Reason::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::Invalid(Reason::PasswordTooShort);
    }

    let lowered = password.to_lowercase();
    if lowered == "password" {
        return ValidationResult::Invalid(Reason::PasswordLiteral);
    }

    let name = full_name.trim().to_lowercase();
    if !name.is_empty() {
        let contains_name =
            lowered.contains(&name) || name.split_whitespace().any(|part| lowered.contains(part));
        if contains_name {
            return ValidationResult::Invalid(Reason::PasswordContainsName);
        }
    }

    if WEAK_PASSWORDS.contains(&lowered.as_str()) {
        return ValidationResult::Invalid(Reason::PasswordWeak);
    }
    ValidationResult::Valid
}

/// Validate the confirmation field: required, and an exact (case-sensitive,
/// untrimmed) match of the password.
pub fn validate_confirm_password(confirm: &str, password: &str) -> ValidationResult {
    if confirm.is_empty() {
        return ValidationResult::Invalid(Reason::ConfirmRequired);
    }
    if confirm != password {
        return ValidationResult::Invalid(Reason::ConfirmMismatch);
    }
    ValidationResult::Valid
}

/// Validate the terms checkbox.
pub fn validate_terms(checked: bool) -> ValidationResult {
    if !checked {
        return ValidationResult::Invalid(Reason::TermsUnchecked);
    }
    ValidationResult::Valid
}

/// Run one field's rule chain against the current values.
pub fn validate(field: Field, values: &FormValues) -> ValidationResult {
    match field {
        Field::FullName => validate_full_name(&values.full_name),
        Field::Email => validate_email(&values.email),
        Field::Phone => validate_phone(&values.phone),
        Field::Password => validate_password(&values.password, &values.full_name),
        Field::ConfirmPassword => {
            validate_confirm_password(&values.confirm_password, &values.password)
        }
        Field::Terms => validate_terms(values.terms),
    }
}

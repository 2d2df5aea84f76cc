//! Form utility helpers for the UI layer.

use rand::Rng;

/// Characters a generated password draws from.
const PASSWORD_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Passwords seen in every breach list, checked case-insensitively by
/// [`is_password_compromised`].
const COMMON_PASSWORDS: [&str; 9] = [
    "password",
    "123456",
    "password123",
    "admin",
    "qwerty",
    "letmein",
    "welcome",
    "monkey",
    "1234567890",
];

/// Default generated password length.
pub const DEFAULT_PASSWORD_LEN: usize = 12;

/// Generate a random password over letters, digits, and common symbols.
pub fn generate_password(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..PASSWORD_CHARSET.len());
            PASSWORD_CHARSET[idx] as char
        })
        .collect()
}

/// Check a password against the well-known compromised list.
pub fn is_password_compromised(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lowered.as_str())
}

/// Format a ten-digit phone number as `(555) 123-4567`; anything else comes
/// back unchanged.
pub fn format_phone(phone: &str) -> String {
    if phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit()) {
        format!("({}) {}-{}", &phone[..3], &phone[3..6], &phone[6..])
    } else {
        phone.to_string()
    }
}

/// Strip everything but ASCII digits: the filter the UI applies to phone
/// input before storing it.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

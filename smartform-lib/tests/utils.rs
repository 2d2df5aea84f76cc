//! Form utility helpers.

use smartform_lib::utils::{
    DEFAULT_PASSWORD_LEN, digits_only, format_phone, generate_password, is_password_compromised,
};

#[test]
fn test_generate_password_length_and_charset() {
    let charset = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

    let password = generate_password(DEFAULT_PASSWORD_LEN);
    assert_eq!(password.chars().count(), DEFAULT_PASSWORD_LEN);
    assert!(password.chars().all(|c| charset.contains(c)));

    assert_eq!(generate_password(0), "");
    assert_eq!(generate_password(32).chars().count(), 32);
}

#[test]
fn test_is_password_compromised() {
    assert!(is_password_compromised("password"));
    assert!(is_password_compromised("PASSWORD"));
    assert!(is_password_compromised("LetMeIn"));
    assert!(is_password_compromised("1234567890"));
    assert!(!is_password_compromised("Xk9#mPlaze"));
    assert!(!is_password_compromised(""));
}

#[test]
fn test_format_phone() {
    assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    // Anything that is not exactly ten digits passes through unchanged
    assert_eq!(format_phone("123"), "123");
    assert_eq!(format_phone("555123456a"), "555123456a");
    assert_eq!(format_phone(""), "");
}

#[test]
fn test_digits_only() {
    assert_eq!(digits_only("(555) 123-4567"), "5551234567");
    assert_eq!(digits_only("555-123-4567"), "5551234567");
    assert_eq!(digits_only("abc"), "");
    assert_eq!(digits_only(""), "");
}

//! Form session behavior: state tracking, the cross-field trigger policy,
//! the full-pass report, and reset.

use smartform_lib::field::Field;
use smartform_lib::form::RegistrationForm;
use smartform_lib::result::{Reason, ValidationResult};

fn filled_valid_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.touch(Field::FullName, "John Doe");
    form.touch(Field::Email, "john@example.com");
    form.touch(Field::Phone, "5551234567");
    form.touch(Field::Password, "Xk9#mPlaze");
    form.touch(Field::ConfirmPassword, "Xk9#mPlaze");
    form.touch(Field::Terms, true);
    form
}

#[test]
fn test_initial_state_is_all_invalid() {
    let form = RegistrationForm::new();
    for field in Field::ALL {
        assert!(!form.state().is_valid(field));
    }
    assert!(!form.is_form_valid());
}

#[test]
fn test_touch_records_outcome() {
    let mut form = RegistrationForm::new();

    let evaluated = form.touch(Field::FullName, "Jo");
    assert_eq!(evaluated, vec![(
        Field::FullName,
        ValidationResult::Invalid(Reason::NameTooShort)
    )]);
    assert!(!form.state().is_valid(Field::FullName));

    let evaluated = form.touch(Field::FullName, "John Doe");
    assert_eq!(evaluated, vec![(Field::FullName, ValidationResult::Valid)]);
    assert!(form.state().is_valid(Field::FullName));
}

#[test]
fn test_password_edit_skips_untouched_confirm() {
    let mut form = RegistrationForm::new();

    let evaluated = form.touch(Field::Password, "Xk9#mPlaze");
    assert_eq!(evaluated.len(), 1);
    assert_eq!(evaluated[0].0, Field::Password);
    // Confirm was never evaluated, so it keeps its initial untouched state
    assert!(!form.state().is_valid(Field::ConfirmPassword));
}

#[test]
fn test_password_edit_revalidates_touched_confirm() {
    let mut form = RegistrationForm::new();
    form.touch(Field::Password, "Xk9#mPlaze");
    form.touch(Field::ConfirmPassword, "Xk9#mPlaze");
    assert!(form.state().is_valid(Field::ConfirmPassword));

    // Editing the password invalidates the now-stale confirmation
    let evaluated = form.touch(Field::Password, "Xk9#mPlaze!");
    assert_eq!(evaluated.len(), 2);
    assert_eq!(
        evaluated[1],
        (
            Field::ConfirmPassword,
            ValidationResult::Invalid(Reason::ConfirmMismatch)
        )
    );
    assert!(!form.state().is_valid(Field::ConfirmPassword));

    // And editing it back repairs the confirmation
    let evaluated = form.touch(Field::Password, "Xk9#mPlaze");
    assert_eq!(evaluated[1], (Field::ConfirmPassword, ValidationResult::Valid));
    assert!(form.state().is_valid(Field::ConfirmPassword));
}

#[test]
fn test_name_edit_revalidates_touched_password() {
    let mut form = RegistrationForm::new();
    form.touch(Field::Password, "johnny123x");
    assert!(form.state().is_valid(Field::Password));

    let evaluated = form.touch(Field::FullName, "Johnny Apple");
    assert_eq!(evaluated.len(), 2);
    assert_eq!(
        evaluated[1],
        (
            Field::Password,
            ValidationResult::Invalid(Reason::PasswordContainsName)
        )
    );
}

#[test]
fn test_name_edit_skips_untouched_password() {
    let mut form = RegistrationForm::new();
    let evaluated = form.touch(Field::FullName, "John Doe");
    assert_eq!(evaluated.len(), 1);
    assert!(!form.state().is_valid(Field::Password));
}

#[test]
fn test_revalidate_without_edit() {
    let mut form = RegistrationForm::new();
    form.set(Field::Email, "a@b.com");

    // A blur event re-runs the rule against the stored value
    let evaluated = form.revalidate(Field::Email);
    assert_eq!(evaluated, vec![(Field::Email, ValidationResult::Valid)]);
    assert!(form.state().is_valid(Field::Email));
}

#[test]
fn test_validate_all_aggregates_with_and() {
    let mut form = filled_valid_form();

    let report = form.validate_all();
    assert!(report.is_valid());
    assert_eq!(report.results().len(), Field::ALL.len());
    assert!(report.errors().is_empty());
    assert!(form.is_form_valid());

    // Any single invalid field flips the aggregate
    form.set(Field::Phone, "1234567890");
    let report = form.validate_all();
    assert!(!report.is_valid());
    assert!(!form.is_form_valid());

    let first = report.first_invalid().expect("one field must be invalid");
    assert_eq!(first.field, Field::Phone);
    assert_eq!(first.reason, Reason::PhoneSequential);
}

#[test]
fn test_validate_all_is_a_fresh_pass() {
    let mut form = filled_valid_form();

    // Change a value behind the tracker's back; the full pass must see it
    form.set(Field::Email, "not-an-email");
    assert!(form.state().is_valid(Field::Email));

    let report = form.validate_all();
    assert!(!report.is_valid());
    assert_eq!(
        report.first_invalid().map(|e| e.field),
        Some(Field::Email)
    );
    assert!(!form.state().is_valid(Field::Email));
}

#[test]
fn test_reset_clears_values_and_state() {
    let mut form = filled_valid_form();
    assert!(form.is_form_valid());

    form.reset();
    for field in Field::ALL {
        assert!(!form.state().is_valid(field));
    }
    assert!(!form.is_form_valid());
    assert_eq!(form.values().full_name, "");
    assert_eq!(form.values().password, "");
    assert!(!form.values().terms);
}

//! Field identity and the cross-field dependency table.

use std::fmt;

/// One of the six registration-form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Terms,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terms,
    ];

    /// Fields whose rules read this field's value and go stale when it
    /// changes.
    ///
    /// The password rule reads the full name (name-substring check) and the
    /// confirm-password rule reads the password. Edits cascade one step down
    /// this table; a dependent is only re-evaluated once it holds a value
    /// (see [`RegistrationForm::touch`](crate::form::RegistrationForm::touch)).
    pub fn dependents(self) -> &'static [Field] {
        match self {
            Field::FullName => &[Field::Password],
            Field::Password => &[Field::ConfirmPassword],
            _ => &[],
        }
    }

    /// Human-readable field label.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Email => "Email address",
            Field::Phone => "Phone number",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Terms => "Terms and conditions",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Owned storage for the current form field values.

use log::warn;

use crate::field::Field;

/// A raw value supplied by the UI layer for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text-field contents (name, email, phone, password, confirm).
    Text(String),
    /// Checkbox checked-state (terms).
    Checked(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Checked(value)
    }
}

/// Current value of every form field.
///
/// Values are stored exactly as given; input filtering (e.g. stripping
/// non-digits from phone input) is the UI layer's job, done before the value
/// gets here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl FormValues {
    /// Store a raw UI value for one field.
    ///
    /// A `Text` value targets one of the five text fields, a `Checked` value
    /// targets the terms checkbox; a mismatched pair is ignored.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        match (field, value.into()) {
            (Field::FullName, FieldValue::Text(v)) => self.full_name = v,
            (Field::Email, FieldValue::Text(v)) => self.email = v,
            (Field::Phone, FieldValue::Text(v)) => self.phone = v,
            (Field::Password, FieldValue::Text(v)) => self.password = v,
            (Field::ConfirmPassword, FieldValue::Text(v)) => self.confirm_password = v,
            (Field::Terms, FieldValue::Checked(v)) => self.terms = v,
            (field, _) => warn!("ignoring type-mismatched value for {:?}", field),
        }
    }

    /// Raw text held by one of the text fields; the terms checkbox has none.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::Terms => None,
        }
    }
}

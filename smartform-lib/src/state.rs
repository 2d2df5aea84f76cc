//! Tracked validity per field.

use log::debug;

use crate::field::Field;

/// Latest known validity of every field.
///
/// Entries start false and are only updated by recording the outcome of a
/// rule evaluation, so a stored flag always reflects the last evaluation of
/// the field's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    valid: [bool; Field::ALL.len()],
}

impl ValidationState {
    /// A tracker with every field invalid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of evaluating one field.
    pub fn record(&mut self, field: Field, valid: bool) {
        if self.valid[field.index()] != valid {
            debug!("{:?} validity -> {}", field, valid);
        }
        self.valid[field.index()] = valid;
    }

    /// Latest recorded validity for one field.
    pub fn is_valid(&self, field: Field) -> bool {
        self.valid[field.index()]
    }

    /// True iff every field's latest evaluation passed.
    pub fn is_form_valid(&self) -> bool {
        self.valid.iter().all(|&v| v)
    }

    /// Clear every flag back to false without re-running any rule.
    pub fn reset(&mut self) {
        self.valid = [false; Field::ALL.len()];
        debug!("validation state reset");
    }
}

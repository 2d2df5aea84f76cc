//! The form session: current values, the trigger policy, and the full-pass
//! report that gates submission.

use log::debug;

use crate::field::Field;
use crate::result::{FieldError, ValidationResult};
use crate::rules;
use crate::state::ValidationState;
use crate::values::{FieldValue, FormValues};

/// A live registration form: the current field values plus the tracked
/// validity of each.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    values: FormValues,
    state: ValidationState,
}

impl RegistrationForm {
    /// An empty form with every field untouched and invalid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Tracked validity.
    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    /// Store a raw UI value for one field without validating it.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.values.set(field, value);
    }

    /// Evaluate one field's rule against the current values and record the
    /// outcome.
    pub fn evaluate(&mut self, field: Field) -> ValidationResult {
        let result = rules::validate(field, &self.values);
        self.state.record(field, result.is_valid());
        result
    }

    /// Input-event entry point: store the new value, evaluate the edited
    /// field, then re-evaluate its dependents that already hold a value.
    ///
    /// Returns the evaluations performed, the edited field first. A
    /// dependent that is still empty is left alone so the form never
    /// surfaces an error for a field the user has not reached yet.
    pub fn touch(
        &mut self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Vec<(Field, ValidationResult)> {
        self.set(field, value);
        self.revalidate(field)
    }

    /// Re-evaluate a field and its touched dependents without changing any
    /// value (a blur event).
    pub fn revalidate(&mut self, field: Field) -> Vec<(Field, ValidationResult)> {
        let mut evaluated = vec![(field, self.evaluate(field))];
        for &dependent in field.dependents() {
            let touched = self
                .values
                .text(dependent)
                .is_some_and(|text| !text.is_empty());
            if touched {
                evaluated.push((dependent, self.evaluate(dependent)));
            }
        }
        evaluated
    }

    /// Fresh evaluation of all six rules, in form order.
    ///
    /// Submission always runs this full pass rather than trusting cached
    /// state.
    pub fn validate_all(&mut self) -> FormReport {
        let results = Field::ALL
            .iter()
            .map(|&field| (field, self.evaluate(field)))
            .collect();
        FormReport { results }
    }

    /// True iff every field's latest evaluation passed.
    pub fn is_form_valid(&self) -> bool {
        self.state.is_form_valid()
    }

    /// Clear values and tracked validity back to the initial state.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.state.reset();
        debug!("form reset");
    }
}

/// Outcome of a full-form validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    results: Vec<(Field, ValidationResult)>,
}

impl FormReport {
    /// True iff every field passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_valid())
    }

    /// Per-field results, in form order.
    pub fn results(&self) -> &[(Field, ValidationResult)] {
        &self.results
    }

    /// Every failed field, in form order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.results
            .iter()
            .filter_map(|(field, result)| {
                result.reason().map(|reason| FieldError {
                    field: *field,
                    reason,
                })
            })
            .collect()
    }

    /// The first failed field, the one the UI should focus.
    pub fn first_invalid(&self) -> Option<FieldError> {
        self.errors().first().copied()
    }
}

//! Registration-form validation engine.
//!
//! Pure per-field validation rules, advisory password-strength scoring,
//! tracked validation state with an explicit cross-field trigger policy,
//! and a simulated submission flow.

pub mod field;
pub mod form;
pub mod result;
pub mod rules;
pub mod state;
pub mod strength;
pub mod submit;
pub mod utils;
pub mod values;

pub mod prelude {
    pub use crate::field::Field;
    pub use crate::form::{FormReport, RegistrationForm};
    pub use crate::result::{FieldError, Reason, ValidationResult};
    pub use crate::state::ValidationState;
    pub use crate::strength::{Strength, StrengthLabel, password_strength};
    pub use crate::submit::{PendingSubmission, Receipt, SubmitError, Submitter};
    pub use crate::values::{FieldValue, FormValues};
}

//! Simulated submission: the full-pass gate, the artificial response delay,
//! and the redacted receipt.
//!
//! Split into a synchronous gate ([`Submitter::begin`]) and an awaitable
//! completion ([`PendingSubmission::wait`]) so the form stays editable while
//! the simulated round trip is pending.

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::form::{FormReport, RegistrationForm};
use crate::values::FormValues;

/// Artificial wait before a submission "succeeds".
pub const RESPONSE_DELAY: Duration = Duration::from_secs(2);

/// Artificial wait between showing success and resetting the form.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Placeholder logged and reported instead of the password.
const REDACTED: &str = "***hidden***";

/// Why a submission attempt did not go through.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    /// The pre-submit validation pass found invalid fields; the report names
    /// them in form order.
    #[error("form has invalid fields")]
    Invalid(FormReport),
}

/// What a successful submission hands back to the caller.
///
/// The password never leaves the form; the payload carries the redaction
/// placeholder instead.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Receipt {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub terms_accepted: bool,
    pub submitted_at: DateTime<Utc>,
}

impl Receipt {
    fn from_values(values: &FormValues) -> Self {
        Self {
            full_name: values.full_name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            password: REDACTED.to_string(),
            terms_accepted: values.terms,
            submitted_at: Utc::now(),
        }
    }
}

/// Drives the simulated submission flow.
///
/// Delays default to the simulated network round trip and success-message
/// dwell; tests use [`Submitter::immediate`] to skip the waits. The delay
/// always "succeeds": there is no error branch, no retry, no backoff.
#[derive(Debug, Clone, Copy)]
pub struct Submitter {
    response_delay: Duration,
    reset_delay: Duration,
}

impl Default for Submitter {
    fn default() -> Self {
        Self {
            response_delay: RESPONSE_DELAY,
            reset_delay: RESET_DELAY,
        }
    }
}

impl Submitter {
    /// A submitter with the default delays.
    pub fn new() -> Self {
        Self::default()
    }

    /// A submitter with no artificial waits.
    pub fn immediate() -> Self {
        Self {
            response_delay: Duration::ZERO,
            reset_delay: Duration::ZERO,
        }
    }

    /// Override the response delay.
    pub fn response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    /// Override the reset delay.
    pub fn reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// How long the UI should dwell on the success state before resetting
    /// the form.
    pub fn reset_dwell(&self) -> Duration {
        self.reset_delay
    }

    /// Synchronous submission gate: run a fresh validation pass over every
    /// field and, if the form passes, snapshot the values into a pending
    /// submission.
    ///
    /// The form is released as soon as this returns, so the user can keep
    /// editing while the pending submission runs out its delay.
    pub fn begin(&self, form: &mut RegistrationForm) -> Result<PendingSubmission, SubmitError> {
        debug!("form submission attempted");

        let report = form.validate_all();
        if !report.is_valid() {
            debug!("submission refused: {} invalid field(s)", report.errors().len());
            return Err(SubmitError::Invalid(report));
        }

        info!("form is valid, submitting");
        Ok(PendingSubmission {
            values: form.values().clone(),
            response_delay: self.response_delay,
        })
    }

    /// Validate and run the whole simulated round trip in one call.
    pub async fn submit(&self, form: &mut RegistrationForm) -> Result<Receipt, SubmitError> {
        let pending = self.begin(form)?;
        Ok(pending.wait().await)
    }
}

/// A submission that passed the gate and is waiting out the simulated
/// response delay.
#[derive(Debug)]
pub struct PendingSubmission {
    values: FormValues,
    response_delay: Duration,
}

impl PendingSubmission {
    /// Wait out the response delay and produce the receipt.
    ///
    /// The simulated call cannot fail; the receipt is logged with the
    /// password redacted, the way the payload would be shipped.
    pub async fn wait(self) -> Receipt {
        tokio::time::sleep(self.response_delay).await;

        let receipt = Receipt::from_values(&self.values);
        if let Ok(json) = serde_json::to_string(&receipt) {
            info!("form data: {}", json);
        }
        receipt
    }
}

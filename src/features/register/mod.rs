//! Registration form: field rules, the submission type, and the optional
//! profile picture with its preview. Nothing is sent anywhere; a valid
//! submission is logged without the password.

pub(crate) mod form;
pub(crate) mod picture;
#[cfg(target_arch = "wasm32")]
pub(crate) mod upload;

pub(crate) use form::{RegisterForm, RegisterSubmission};

/// Logs an accepted registration.
pub fn log_submission(submission: &RegisterSubmission) {
    match serde_json::to_string(submission) {
        Ok(form) => tracing::info!(%form, "registration form submitted"),
        Err(err) => tracing::warn!(error = %err, "failed to serialize registration form"),
    }
}

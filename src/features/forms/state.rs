//! Submit-then-revalidate form state. Errors stay hidden until the first
//! submit attempt; after that every edit re-runs validation so messages clear
//! (or appear) while the user types.

use super::rules::{FieldErrors, Validate};

#[derive(Clone, Debug, Default)]
pub struct FormState<F> {
    values: F,
    errors: FieldErrors,
    submitted: bool,
}

impl<F: Validate> FormState<F> {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Applies `change` to the values, re-validating once a submit was attempted.
    pub fn edit(&mut self, change: impl FnOnce(&mut F)) {
        change(&mut self.values);
        if self.submitted {
            self.errors = self.values.validate().err().unwrap_or_default();
        }
    }

    /// Validates the current values and returns the submission when they pass.
    pub fn submit(&mut self) -> Option<F::Output> {
        self.submitted = true;
        match self.values.validate() {
            Ok(output) => {
                self.errors.clear();
                Some(output)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

//! Login form. There is no authentication behind it: submitting only
//! validates the fields and logs the email.

use crate::features::forms::{
    EMAIL_INVALID, EMAIL_PATTERN, EMAIL_REQUIRED, Field, FieldErrors, FormValues,
    PASSWORD_REQUIRED, Rule, Validate, validate_form,
};

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

const FIELDS: &[Field] = &[
    Field {
        name: EMAIL,
        rules: &[
            Rule::Required(EMAIL_REQUIRED),
            Rule::Pattern {
                pattern: EMAIL_PATTERN,
                message: EMAIL_INVALID,
            },
        ],
    },
    Field {
        name: PASSWORD,
        rules: &[Rule::Required(PASSWORD_REQUIRED)],
    },
];

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormValues for LoginForm {
    fn value(&self, field: &str) -> &str {
        match field {
            EMAIL => &self.email,
            PASSWORD => &self.password,
            _ => "",
        }
    }
}

/// A login that passed validation. Without an auth backend, the password is
/// checked for presence and then dropped.
#[derive(Debug)]
pub struct LoginSubmission {
    pub email: String,
}

impl Validate for LoginForm {
    type Output = LoginSubmission;

    fn validate(&self) -> Result<LoginSubmission, FieldErrors> {
        let errors = validate_form(FIELDS, self);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LoginSubmission {
            email: self.email.clone(),
        })
    }
}

/// Logs an accepted login attempt; only the email is recorded.
pub fn log_submission(submission: &LoginSubmission) {
    tracing::info!(email = %submission.email, "login form submitted");
}

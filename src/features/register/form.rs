use super::picture::PictureMeta;
use crate::features::forms::{
    EMAIL_INVALID, EMAIL_PATTERN, EMAIL_REQUIRED, Field, FieldErrors, FormValues,
    PASSWORD_REQUIRED, Rule, Validate, validate_form,
};
use secrecy::SecretString;
use serde::Serialize;

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const PROFILE_PICTURE: &str = "profilePicture";

pub const MIN_PASSWORD_LENGTH: usize = 6;

const FIELDS: &[Field] = &[
    Field {
        name: NAME,
        rules: &[Rule::Required("Full Name is required")],
    },
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
        rules: &[
            Rule::Required(PASSWORD_REQUIRED),
            Rule::MinLength {
                min: MIN_PASSWORD_LENGTH,
                message: "Password must be at least 6 characters",
            },
        ],
    },
    Field {
        name: CONFIRM_PASSWORD,
        rules: &[
            Rule::Required("Please confirm your password"),
            Rule::Matches {
                field: PASSWORD,
                message: "Passwords do not match",
            },
        ],
    },
];

/// Raw values of the registration form as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub profile_picture: Option<PictureMeta>,
}

impl FormValues for RegisterForm {
    fn value(&self, field: &str) -> &str {
        match field {
            NAME => &self.name,
            EMAIL => &self.email,
            PASSWORD => &self.password,
            CONFIRM_PASSWORD => &self.confirm_password,
            _ => "",
        }
    }
}

impl Validate for RegisterForm {
    type Output = RegisterSubmission;

    fn validate(&self) -> Result<RegisterSubmission, FieldErrors> {
        let errors = validate_form(FIELDS, self);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            password: SecretString::from(self.password.clone()),
            profile_picture: self.profile_picture.clone(),
        })
    }
}

/// A registration that passed validation. Serializing it omits the password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password: SecretString,
    pub profile_picture: Option<PictureMeta>,
}

#[cfg(test)]
mod tests {
    use super::{CONFIRM_PASSWORD, EMAIL, NAME, PASSWORD, RegisterForm};
    use crate::features::forms::{FormState, Validate};
    use crate::features::register::picture::PictureMeta;
    use secrecy::ExposeSecret;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            profile_picture: None,
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = RegisterForm::default().validate().unwrap_err();

        assert_eq!(errors.get(NAME).map(String::as_str), Some("Full Name is required"));
        assert_eq!(errors.get(EMAIL).map(String::as_str), Some("Email is required"));
        assert_eq!(errors.get(PASSWORD).map(String::as_str), Some("Password is required"));
        assert_eq!(
            errors.get(CONFIRM_PASSWORD).map(String::as_str),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn invalid_email_is_reported() {
        let form = RegisterForm {
            email: "john@example".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(EMAIL).map(String::as_str), Some("Invalid email address"));
    }

    #[test]
    fn short_password_is_reported() {
        let form = RegisterForm {
            password: "12345".to_string(),
            confirm_password: "12345".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors.get(PASSWORD).map(String::as_str),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.get(CONFIRM_PASSWORD), None);
    }

    #[test]
    fn password_length_uses_browser_units() {
        // Three emoji are six UTF-16 units, like `input.value.length`.
        let form = RegisterForm {
            password: "😀😀😀".to_string(),
            confirm_password: "😀😀😀".to_string(),
            ..valid_form()
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn mismatched_confirmation_is_reported() {
        let form = RegisterForm {
            confirm_password: "hunter23".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors.get(CONFIRM_PASSWORD).map(String::as_str),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn valid_form_builds_submission() {
        let picture = PictureMeta {
            name: "me.png".to_string(),
            mime: "image/png".to_string(),
            size: 2048,
        };
        let form = RegisterForm {
            profile_picture: Some(picture.clone()),
            ..valid_form()
        };

        let submission = form.validate().unwrap();
        assert_eq!(submission.name, "John Doe");
        assert_eq!(submission.email, "john@example.com");
        assert_eq!(submission.password.expose_secret(), "hunter22");
        assert_eq!(submission.profile_picture, Some(picture));
    }

    #[test]
    fn submission_never_serializes_the_password() {
        let submission = valid_form().validate().unwrap();

        let json = serde_json::to_string(&submission).expect("Failed to serialize");
        assert!(json.contains("\"name\":\"John Doe\""));
        assert!(json.contains("\"profilePicture\":null"));
        assert!(!json.contains("hunter22"));
        assert!(!format!("{submission:?}").contains("hunter22"));
    }

    #[test]
    fn picture_edit_after_failed_submit_revalidates() {
        let mut state = FormState::<RegisterForm>::default();
        state.edit(|form| *form = valid_form());
        state.edit(|form| form.confirm_password.clear());
        assert!(state.submit().is_none());
        assert_eq!(
            state.error(CONFIRM_PASSWORD),
            Some("Please confirm your password")
        );

        state.edit(|form| {
            form.profile_picture = Some(PictureMeta {
                name: "me.jpg".to_string(),
                mime: "image/jpeg".to_string(),
                size: 10,
            });
        });
        assert_eq!(
            state.error(CONFIRM_PASSWORD),
            Some("Please confirm your password")
        );

        state.edit(|form| form.confirm_password = "hunter22".to_string());
        assert_eq!(state.error(CONFIRM_PASSWORD), None);

        let submission = state.submit().expect("valid form submits");
        assert_eq!(
            submission.profile_picture.map(|picture| picture.name),
            Some("me.jpg".to_string())
        );
    }
}

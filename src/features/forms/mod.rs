//! Form validation shared by the login and register pages: field rules, the
//! email pattern both forms use, and the submit/revalidate state machine.

pub(crate) mod rules;
mod state;

pub(crate) use rules::{Field, FieldErrors, FormValues, Rule, Validate, validate_form};
pub(crate) use state::FormState;

/// Email pattern applied on both forms. The TLD is limited to 2-4 letters.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";

#[cfg(test)]
mod tests {
    use super::EMAIL_PATTERN;
    use regex::Regex;

    fn is_email(value: &str) -> bool {
        Regex::new(EMAIL_PATTERN).is_ok_and(|regex| regex.is_match(value))
    }

    #[test]
    fn email_pattern_accepts_common_addresses() {
        assert!(is_email("john@example.com"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(is_email("a_b%c-d@sub-domain.io"));
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        assert!(!is_email("john"));
        assert!(!is_email("john@example"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("john doe@example.com"));
        assert!(!is_email("john@example.c"));
        assert!(!is_email("john@example.museum"));
    }
}

//! Declarative field rules. Each field lists its rules in evaluation order and
//! reports only the first one that fails, so a blank email says "required"
//! rather than "invalid".

use regex::Regex;
use std::collections::BTreeMap;

/// Field name to user-facing message. Empty means the form is valid.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Read access to the current values of a form, keyed by field name.
pub trait FormValues {
    /// Returns the value of `field`, or `""` for names the form does not know.
    fn value(&self, field: &str) -> &str;
}

/// Forms that can turn their values into a submission.
pub trait Validate {
    type Output;

    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// Fails on the empty string. Whitespace counts as a value.
    Required(&'static str),
    /// Fails when a non-empty value does not match the regex.
    Pattern {
        pattern: &'static str,
        message: &'static str,
    },
    /// Fails when a non-empty value has fewer than `min` UTF-16 code units,
    /// the length a browser reports for an input value.
    MinLength { min: usize, message: &'static str },
    /// Fails when the value differs from another field of the same form.
    Matches {
        field: &'static str,
        message: &'static str,
    },
}

impl Rule {
    fn check<F: FormValues + ?Sized>(&self, value: &str, form: &F) -> Option<&'static str> {
        match *self {
            Rule::Required(message) => value.is_empty().then_some(message),
            Rule::Pattern { pattern, message } => {
                (!value.is_empty() && !matches_pattern(pattern, value)).then_some(message)
            }
            Rule::MinLength { min, message } => {
                (!value.is_empty() && value.encode_utf16().count() < min).then_some(message)
            }
            Rule::Matches { field, message } => (value != form.value(field)).then_some(message),
        }
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|regex| regex.is_match(value))
}

#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

impl Field {
    /// Runs the rules in order and returns the first failure.
    pub fn check<F: FormValues + ?Sized>(&self, value: &str, form: &F) -> Option<String> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(value, form))
            .map(str::to_string)
    }
}

/// Checks every field against the form's current values.
pub fn validate_form<F: FormValues + ?Sized>(fields: &[Field], form: &F) -> FieldErrors {
    fields
        .iter()
        .filter_map(|field| {
            field
                .check(form.value(field.name), form)
                .map(|message| (field.name, message))
        })
        .collect()
}

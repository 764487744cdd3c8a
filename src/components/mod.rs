//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::AuthCard;
pub(crate) use ui::{Button, FieldError, InputField, Label, Spinner};

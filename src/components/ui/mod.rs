mod button;
mod field;
mod label;
mod spinner;

pub(crate) use button::Button;
pub(crate) use field::{FieldError, InputField};
pub(crate) use label::Label;
pub(crate) use spinner::Spinner;

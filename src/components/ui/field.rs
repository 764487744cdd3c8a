//! Labelled text input with its inline validation message. Values flow out
//! through `on_input`; the owning form decides what the error is.

use super::label::Label;
use crate::app_lib::theme::{Theme, classes};
use leptos::prelude::*;

#[component]
pub fn InputField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    /// Extra classes for the wrapper, e.g. a grid span.
    #[prop(optional)]
    wrapper_class: Option<&'static str>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let wrapper_class = classes("grid w-full items-center gap-1.5", wrapper_class);

    view! {
        <div class=wrapper_class>
            <Label html_for=id>{label}</Label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                autocomplete=autocomplete.unwrap_or("off")
                class=Theme::INPUT
                aria-invalid=move || error.get().is_some().to_string()
                on:input=move |event| on_input.run(event_target_value(&event))
            />
            <FieldError message=error />
        </div>
    }
}

/// Renders the message when present, nothing otherwise.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
    }
}

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn Label(html_for: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class=Theme::LABEL for=html_for>
            {children()}
        </label>
    }
}

use leptos::prelude::*;

/// Busy indicator; `label` is what screen readers announce.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class="inline-block h-5 w-5 animate-spin rounded-full border-2 border-blue-200 border-t-blue-600"
            role="status"
            aria-live="polite"
            aria-label=label.unwrap_or("Loading")
        ></div>
    }
}

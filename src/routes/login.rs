use crate::{
    app::use_config,
    app_lib::theme::Theme,
    components::{AuthCard, Button, InputField},
    features::{
        forms::FormState,
        login::{self, EMAIL, LoginForm, PASSWORD},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_config();
    let state = RwSignal::new(FormState::<LoginForm>::default());

    let field_error = move |field: &'static str| {
        Signal::derive(move || state.with(|form| form.error(field).map(str::to_string)))
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(submission) = state.try_update(FormState::submit).flatten() {
            login::log_submission(&submission);
        }
    };

    view! {
        <AuthCard title="Login" subtitle="Welcome back, sign in to continue">
            <form on:submit=on_submit class="w-full mt-8 grid gap-5" novalidate>
                <InputField
                    id=EMAIL
                    label="Email"
                    input_type="email"
                    placeholder="john@example.com"
                    autocomplete="email"
                    error=field_error(EMAIL)
                    on_input=move |value: String| {
                        state.update(|form| form.edit(|values| values.email = value));
                    }
                />
                <InputField
                    id=PASSWORD
                    label="Password"
                    input_type="password"
                    placeholder="••••••••"
                    autocomplete="current-password"
                    error=field_error(PASSWORD)
                    on_input=move |value: String| {
                        state.update(|form| form.edit(|values| values.password = value));
                    }
                />

                <Button button_type="submit">"Login"</Button>

                <p class="text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <a href=paths::href(&config.base_path, paths::REGISTER) class=Theme::LINK>
                        "Register here"
                    </a>
                </p>
            </form>
        </AuthCard>
    }
}

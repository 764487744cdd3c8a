//! Registration page. Validates the fields in the browser and previews the
//! optional profile picture; a valid submission is only logged.

use crate::{
    app::use_config,
    app_lib::theme::Theme,
    components::{AuthCard, Button, FieldError, InputField, Label, Spinner},
    features::{
        forms::FormState,
        register::{
            self, RegisterForm,
            form::{CONFIRM_PASSWORD, EMAIL, NAME, PASSWORD, PROFILE_PICTURE},
            picture::PictureSelection,
            upload,
        },
    },
    routes::paths,
};
use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = use_config();
    let state = RwSignal::new(FormState::<RegisterForm>::default());
    let picture = RwSignal::new(PictureSelection::default());
    let reading = Signal::derive(move || picture.with(PictureSelection::is_reading));

    let field_error = move |field: &'static str| {
        Signal::derive(move || state.with(|form| form.error(field).map(str::to_string)))
    };

    let on_picture_change = move |event: Event| {
        let file = upload::selected_file(&event);
        let meta = file.as_ref().map(upload::meta);
        let (Some(ticket), Some(file)) = (picture.try_update(|p| p.select(meta)).flatten(), file)
        else {
            return;
        };

        spawn_local(async move {
            match upload::read_bytes(&file).await {
                Ok(bytes) => {
                    let stored = picture.try_update(|p| p.on_read_ok(ticket, &bytes)).flatten();
                    if let Some(meta) = stored {
                        state.update(|form| form.edit(|values| values.profile_picture = Some(meta)));
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read profile picture");
                    picture.update(|p| p.on_read_err(&ticket));
                }
            }
        });
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(submission) = state.try_update(FormState::submit).flatten() {
            register::log_submission(&submission);
        }
    };

    view! {
        <AuthCard title="Register" subtitle="Create your account to get started">
            <form on:submit=on_submit class="w-full mt-8 grid sm:grid-cols-2 gap-5" novalidate>
                <InputField
                    id=NAME
                    label="Full Name"
                    placeholder="John Doe"
                    autocomplete="name"
                    wrapper_class="col-span-2"
                    error=field_error(NAME)
                    on_input=move |value: String| {
                        state.update(|form| form.edit(|values| values.name = value));
                    }
                />
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
                    autocomplete="new-password"
                    error=field_error(PASSWORD)
                    on_input=move |value: String| {
                        state.update(|form| form.edit(|values| values.password = value));
                    }
                />
                <InputField
                    id=CONFIRM_PASSWORD
                    label="Confirm Password"
                    input_type="password"
                    placeholder="••••••••"
                    autocomplete="new-password"
                    wrapper_class="col-span-2"
                    error=field_error(CONFIRM_PASSWORD)
                    on_input=move |value: String| {
                        state.update(|form| form.edit(|values| values.confirm_password = value));
                    }
                />

                <div class="col-span-2 grid gap-1.5">
                    <Label html_for=PROFILE_PICTURE>"Profile Picture"</Label>
                    <input
                        id=PROFILE_PICTURE
                        type="file"
                        accept="image/*"
                        class=Theme::FILE_INPUT
                        on:change=on_picture_change
                    />
                    <FieldError message=Signal::derive(move || {
                        picture.with(|p| p.error().map(str::to_string))
                    }) />
                    {move || {
                        reading
                            .get()
                            .then_some(view! {
                                <div class="mt-2 flex justify-center">
                                    <Spinner label="Reading picture" />
                                </div>
                            })
                    }}
                    {move || {
                        picture
                            .with(|p| p.preview().map(str::to_string))
                            .map(|src| {
                                view! {
                                    <div class="mt-2 flex justify-center">
                                        <img
                                            src=src
                                            alt="Profile Preview"
                                            class="w-24 h-24 rounded-full object-cover"
                                        />
                                    </div>
                                }
                            })
                    }}
                </div>

                <Button button_type="submit" class="col-span-2" disabled=reading>
                    "Create Account"
                </Button>

                <p class="text-center text-sm text-gray-600 col-span-2">
                    "Already have an account? "
                    <a href=paths::href(&config.base_path, paths::LOGIN) class=Theme::LINK>
                        "Login here"
                    </a>
                </p>
            </form>
        </AuthCard>
    }
}

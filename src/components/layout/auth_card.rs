//! Centered card that frames both auth forms, with the build stamp underneath.

use crate::app_lib::{GIT_COMMIT_HASH, VERSION, theme::Theme};
use leptos::prelude::*;

#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class=Theme::PAGE>
            <div class="flex flex-col items-center gap-4 w-full">
                <div class=Theme::CARD>
                    <h2 class="text-3xl font-semibold text-center text-gray-800">{title}</h2>
                    <p class="text-center text-gray-600 mt-2">{subtitle}</p>
                    {children()}
                </div>
                <p class="text-xs text-gray-400">{format!("v{VERSION} ({GIT_COMMIT_HASH})")}</p>
            </div>
        </section>
    }
}

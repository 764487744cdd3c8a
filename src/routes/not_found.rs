//! Fallback for paths outside the two forms.

use crate::{app::use_config, app_lib::theme::Theme, routes::paths};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let config = use_config();

    view! {
        <section class=Theme::PAGE>
            <div class="flex flex-col items-center text-center px-4 space-y-4">
                <h1 class="text-7xl font-black text-gray-200 select-none">"404"</h1>
                <p class="text-xl font-semibold text-gray-800">"Page not found"</p>
                <p class="text-gray-500 max-w-sm">
                    "The page you requested does not exist."
                </p>
                <div class="flex gap-6 text-sm">
                    <a href=paths::href(&config.base_path, paths::LOGIN) class=Theme::LINK>
                        "Login"
                    </a>
                    <a href=paths::href(&config.base_path, paths::REGISTER) class=Theme::LINK>
                        "Register"
                    </a>
                </div>
            </div>
        </section>
    }
}

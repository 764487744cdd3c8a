#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
pub(crate) mod paths;
#[cfg(target_arch = "wasm32")]
mod register;

#[cfg(target_arch = "wasm32")]
pub(crate) use self::{login::LoginPage, not_found::NotFoundPage, register::RegisterPage};

#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos_router::components::{Redirect, Route, Routes};
#[cfg(target_arch = "wasm32")]
use leptos_router::path;

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomeRedirect />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
        </Routes>
    }
}

/// `/` has no page of its own.
#[cfg(target_arch = "wasm32")]
#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path=paths::home_redirect() /> }
}

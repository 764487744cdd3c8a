// Views only build for the browser; the form logic also builds natively for tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::{
    app::App,
    app_lib::{GIT_COMMIT_HASH, VERSION, config::AppConfig, telemetry},
};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = AppConfig::load();
    telemetry::init(&config);
    tracing::info!(
        version = VERSION,
        commit = GIT_COMMIT_HASH,
        base_path = %config.base_path,
        "portico starting"
    );

    mount_to_body(move || view! { <App config=config /> });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}

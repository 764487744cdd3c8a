use crate::app_lib::config::AppConfig;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let base = config.base_path.clone();
    provide_context(config);

    view! {
        <Router base=base>
            <AppRoutes />
        </Router>
    }
}

/// Returns the provided config, loading it afresh outside the app tree.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

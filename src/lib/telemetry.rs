//! Browser logging: routes `tracing` events to the devtools console and
//! installs the panic hook so panics show a readable message.

use crate::app_lib::config::AppConfig;
use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Installs the global subscriber. Call once, before mounting the app.
pub fn init(config: &AppConfig) {
    console_error_panic_hook::set_once();

    let max_level = config.max_level();
    let layer_config = WASMLayerConfigBuilder::new()
        .set_max_level(*max_level.as_ref().unwrap_or(&Level::INFO))
        .build();
    tracing_wasm::set_as_global_default_with_config(layer_config);

    if let Err(err) = max_level {
        tracing::warn!(error = %err, "falling back to info logging");
    }
}

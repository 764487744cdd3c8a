//! Build-time configuration for routing and logging with an optional runtime
//! override. The runtime config is read from `window.PORTICO_CONFIG` (if
//! present) so static deployments can move the app under a sub-path or raise the
//! log level without rebuilding. Configuration values are public; do not store
//! secrets here.

use crate::app_lib::AppError;
use tracing::Level;

/// Log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Router base path, normalized to `""` or `/segment[/segment...]`.
    pub base_path: String,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let base_path = option_env!("PORTICO_BASE_PATH").unwrap_or("");
        let log_level = option_env!("PORTICO_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);

        let mut config = Self {
            base_path: normalize_base_path(base_path),
            log_level: log_level.trim().to_ascii_lowercase(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Parses the configured log level.
    pub fn max_level(&self) -> Result<Level, AppError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| AppError::Config(format!("unknown log level `{}`", self.log_level)))
    }
}

#[derive(Default)]
struct RuntimeConfig {
    base_path: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.base_path {
        config.base_path = normalize_base_path(&value);
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value.to_ascii_lowercase();
    }
}

/// Ensures a single leading slash and no trailing slash; the root maps to `""`.
pub fn normalize_base_path(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PORTICO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        base_path: read_runtime_value(&object, "base_path"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_base_path,
        normalize_runtime_value,
    };
    use tracing::Level;

    fn default_config() -> AppConfig {
        AppConfig {
            base_path: String::new(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  /portal "),
            Some("/portal".to_string())
        );
    }

    #[test]
    fn normalize_base_path_handles_slashes() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("portal"), "/portal");
        assert_eq!(normalize_base_path("/portal/"), "/portal");
        assert_eq!(normalize_base_path(" /apps/portal// "), "/apps/portal");
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = default_config();
        let runtime = RuntimeConfig {
            base_path: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, default_config());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = default_config();
        let runtime = RuntimeConfig {
            base_path: normalize_runtime_value("portal/"),
            log_level: normalize_runtime_value("DEBUG"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.base_path, "/portal");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn max_level_parses_known_levels() {
        let mut config = default_config();
        assert_eq!(config.max_level().ok(), Some(Level::INFO));

        config.log_level = "trace".to_string();
        assert_eq!(config.max_level().ok(), Some(Level::TRACE));
    }

    #[test]
    fn max_level_rejects_unknown_levels() {
        let mut config = default_config();
        config.log_level = "loud".to_string();

        let err = config.max_level().unwrap_err();
        assert_eq!(err.to_string(), "Config error: unknown log level `loud`");
    }

    #[test]
    fn load_without_runtime_uses_build_defaults() {
        let config = AppConfig::load();
        assert!(config.base_path.is_empty() || config.base_path.starts_with('/'));
        assert!(!config.base_path.ends_with('/'));
    }
}

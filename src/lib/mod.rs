//! Shared frontend utilities for configuration, errors, logging, and build metadata.
//!
//! The forms never talk to a backend: submissions are validated in the browser
//! and logged. Callers must still avoid logging passwords; the form types hold
//! them as secrets for that reason.

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod telemetry;
pub(crate) mod theme;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) const VERSION: &str = built_info::PKG_VERSION;

pub(crate) use errors::AppError;

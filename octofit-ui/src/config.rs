//! Runtime Configuration
//!
//! The bundled `octofit.toml`, then build-time overrides, then a base URL
//! saved in local storage.

use octofit::config::{API_TIMEOUT_VAR, API_URL_VAR, LOG_LEVEL_VAR};
use octofit::session::KeyValueStore;
use octofit::Config;

use crate::state::browser_store::BrowserStore;

const BUNDLED: &str = include_str!("../octofit.toml");

/// localStorage key holding a base URL override
pub const API_URL_KEY: &str = "octofit_api_url";

/// Build the app configuration. Runs before logging is installed.
pub fn load() -> Config {
    let mut config = Config::from_toml_str(BUNDLED).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("{}; using defaults", e).into());
        Config::default()
    });
    config.apply_overrides(build_setting);

    if let Some(url) = BrowserStore
        .get(API_URL_KEY)
        .filter(|url| !url.trim().is_empty())
    {
        config.api.base_url = url;
    }
    config
}

fn build_setting(name: &str) -> Option<String> {
    let value = match name {
        API_URL_VAR => option_env!("OCTOFIT_API_URL"),
        API_TIMEOUT_VAR => option_env!("OCTOFIT_API_TIMEOUT_SECS"),
        LOG_LEVEL_VAR => option_env!("OCTOFIT_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

use std::sync::OnceLock;

use super::core::{DocsignalConfig, SignalConfig};
use super::loader::load_config;

/// Cache the configuration
static CONFIG: OnceLock<DocsignalConfig> = OnceLock::new();

/// Get the cached configuration
pub fn get_config() -> &'static DocsignalConfig {
    CONFIG.get_or_init(load_config)
}

/// Get the signal extraction settings
pub fn get_signal_config() -> &'static SignalConfig {
    &get_config().signals
}

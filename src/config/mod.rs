//! Configuration for signal extraction.
//!
//! Settings live under a `[signals]` table in `.docsignal.toml`, found by
//! walking up from the current directory. Every setting has a default, so
//! a missing or partial file is fine.

mod accessors;
mod core;
mod loader;

pub use accessors::{get_config, get_signal_config};
pub use self::core::{
    render_template, DocsignalConfig, ImplicitTemplates, SignalConfig, NAME_PLACEHOLDER,
};
pub use loader::{
    candidate_paths, load_config, load_config_file, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME, MAX_SEARCH_DEPTH,
};

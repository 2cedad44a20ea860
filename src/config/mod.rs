//! GLID Configuration Module
//!
//! Provides deployment configuration loaded from TOML files.
//!
//! ## Loading Order
//!
//! 1. `--config PATH` on the command line
//! 2. `GLID_CONFIG` environment variable (path to TOML file)
//! 3. `glid.toml` in the current working directory
//! 4. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(GlidConfig::load(None)?);
//!
//! // Anywhere in the codebase:
//! let addr = &config::get().server.addr;
//! ```

mod glid_config;
pub mod validation;

pub use glid_config::*;

use std::sync::OnceLock;

/// Global configuration, initialized once at startup.
static GLID_CONFIG: OnceLock<GlidConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// Later calls are ignored with a warning.
pub fn init(config: GlidConfig) {
    if GLID_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once - ignoring");
    }
}

/// Get the global configuration, or the built-in defaults before `init()`.
pub fn get() -> &'static GlidConfig {
    GLID_CONFIG.get_or_init(GlidConfig::default)
}

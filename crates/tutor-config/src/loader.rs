// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./tutor.toml` > `~/.config/tutor/tutor.toml` > `/etc/tutor/tutor.toml`
//! with environment variable overrides via `TUTOR_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TutorConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/tutor/tutor.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "tutor.toml";

/// Top-level sections, used to turn `TUTOR_<SECTION>_<KEY>` into `<section>.<key>`.
const SECTIONS: &[&str] = &["service", "tools", "mastery"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tutor/tutor.toml` (system-wide)
/// 3. `~/.config/tutor/tutor.toml` (user XDG config)
/// 4. `./tutor.toml` (local directory)
/// 5. `TUTOR_*` environment variables
pub fn load_config() -> Result<TutorConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<TutorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TutorConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// The file replaces the XDG hierarchy; env vars still apply on top.
pub fn load_config_from_path(path: &Path) -> Result<TutorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TutorConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TutorConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `$XDG_CONFIG_HOME/tutor/tutor.toml` or the platform equivalent.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tutor").join("tutor.toml"))
}

/// Create the environment variable provider with explicit section mapping.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `TUTOR_TOOLS_TIMEOUT_SECS` maps to `tools.timeout_secs`, not
/// `tools.timeout.secs`.
fn env_provider() -> Env {
    Env::prefixed("TUTOR_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a prefix-stripped env key, in any case, to its dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section) {
            if let Some(field) = rest.strip_prefix('_') {
                return format!("{section}.{field}");
            }
        }
    }
    key
}

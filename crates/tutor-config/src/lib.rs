// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the tutor orchestrator.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and diagnostic
//! error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use tutor_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("tool backend: {:?}", config.tools.backend);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{MasteryConfig, ServiceConfig, ToolBackend, ToolsConfig, TutorConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// On a Figment error the TOML sources are re-read so unknown keys can be
/// shown in context. Returns either a valid `TutorConfig` or every
/// diagnostic found.
pub fn load_and_validate() -> Result<TutorConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load configuration from an explicit file (plus env overrides) and validate it.
///
/// A missing file is an error here, unlike in the hierarchy where absent
/// files are skipped.
pub fn load_and_validate_path(path: &Path) -> Result<TutorConfig, Vec<ConfigError>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        vec![ConfigError::Other(format!(
            "cannot read {}: {e}",
            path.display()
        ))]
    })?;
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![(path.display().to_string(), content)];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<TutorConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Reads whichever hierarchy files exist, keyed by the path Figment reports.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG_FILE))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG_FILE.into());
    let candidates = [
        Some(local),
        loader::user_config_path(),
        Some(Path::new(loader::SYSTEM_CONFIG_PATH).to_path_buf()),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}

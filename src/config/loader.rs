// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("streak.toml")
//!   .add_toml_file(--ini)
//!   .with_env_prefix("STREAK")
//!   .set("paths.base", ..)
//!        |
//!        v
//!    build() --> Config (resolved, validated)
//! ```

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(&'static str, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a required TOML file. A missing or invalid file makes `build()`
    /// fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file", p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional", p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files.push(("string", PathBuf::from("<string>")));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override (highest priority).
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the value cannot be
    /// converted to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(ConfigError::from)?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing or has invalid TOML.
    /// - The merged configuration does not match the `Config` structure.
    /// - Validation fails (e.g. `paths.base` is not set).
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build().map_err(ConfigError::from)?;
        let mut config: Config = cfg.try_deserialize().map_err(ConfigError::from)?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

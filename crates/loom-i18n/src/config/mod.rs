// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for the locale registry.
//!
//! Precedence (highest to lowest):
//! 1. Command-line overrides
//! 2. Environment variables (`LOOM_I18N_*`)
//! 3. Config file (`/etc/loom/i18n.toml` or an explicit path)
//! 4. Built-in defaults
//!
//! The development-mode flag is resolved here, once, and handed to
//! [`LocaleRegistry::new`] explicitly.

mod error;
mod layer;
mod sources;

pub use error::ConfigError;
pub use layer::{
	BundleSourceConfig, I18nConfig, I18nConfigLayer, DEFAULT_LOCALES_DIR, DEFAULT_LOG_LEVEL,
};
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, OverrideSource, Precedence, TomlSource,
};

use std::path::PathBuf;

use tracing::{debug, info};

use crate::registry::LocaleRegistry;
use crate::source::{BundleSource, CachedSource, FileSource, HttpSource};

/// Load configuration from all sources with standard precedence.
pub fn load_config() -> Result<I18nConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<I18nConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Load configuration with `overrides` applied above every other source.
/// Without `config_path` the system config file is used.
pub fn load_config_with_overrides(
	config_path: Option<PathBuf>,
	overrides: I18nConfigLayer,
) -> Result<I18nConfig, ConfigError> {
	let file = match config_path {
		Some(path) => TomlSource::new(path),
		None => TomlSource::system(),
	};
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(file),
		Box::new(EnvSource),
		Box::new(OverrideSource::new(overrides)),
	])
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<I18nConfig, ConfigError> {
	load_from_sources(vec![Box::new(EnvSource)])
}

/// Merge `sources` in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<I18nConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = I18nConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	let config = merged.finalize()?;
	info!(
		dev_mode = config.dev_mode,
		environment = %config.environment,
		source = ?config.source,
		application_name = %config.application_name,
		cache = config.cache,
		"i18n configuration loaded"
	);
	Ok(config)
}

impl I18nConfig {
	/// Build the bundle source described by this configuration.
	pub fn bundle_source(&self) -> Result<Box<dyn BundleSource>, ConfigError> {
		let source: Box<dyn BundleSource> = match &self.source {
			BundleSourceConfig::Directory(root) => {
				Box::new(FileSource::new(root.clone(), self.application_name.clone()))
			}
			BundleSourceConfig::Http { base_url } => Box::new(
				HttpSource::new(base_url.clone(), self.application_name.clone())
					.map_err(ConfigError::HttpClient)?,
			),
		};

		if self.cache {
			Ok(Box::new(CachedSource::new(source)))
		} else {
			Ok(source)
		}
	}

	/// Build the built-in registry for this configuration.
	pub fn build_registry(&self) -> Result<LocaleRegistry, ConfigError> {
		let source = self.bundle_source()?;
		Ok(LocaleRegistry::new(source.as_ref(), self.dev_mode))
	}
}

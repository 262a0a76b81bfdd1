// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer and its resolved form.

use std::path::PathBuf;

use loom_i18n_core::DEFAULT_APPLICATION_NAME;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

pub const DEFAULT_LOCALES_DIR: &str = "public/locales";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// One source's view of the configuration. Unset fields defer to lower layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	/// Register development-only locales.
	pub dev_mode: Option<bool>,
	/// e.g. "development", "production". `development` implies `dev_mode`.
	pub environment: Option<String>,
	pub locales_dir: Option<String>,
	pub base_url: Option<String>,
	pub application_name: Option<String>,
	/// Cache bundles after the first successful load.
	pub cache: Option<bool>,
	pub log_level: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.dev_mode.is_some() {
			self.dev_mode = other.dev_mode;
		}
		if other.environment.is_some() {
			self.environment = other.environment;
		}
		if other.locales_dir.is_some() {
			self.locales_dir = other.locales_dir;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.application_name.is_some() {
			self.application_name = other.application_name;
		}
		if other.cache.is_some() {
			self.cache = other.cache;
		}
		if other.log_level.is_some() {
			self.log_level = other.log_level;
		}
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let dev_mode = self
			.dev_mode
			.unwrap_or(self.environment.as_deref() == Some("development"));

		if dev_mode && self.environment.as_deref() == Some("production") {
			return Err(ConfigError::Validation(
				"dev_mode is enabled while environment is \"production\". \
				 The pseudo-locale must not be exposed in production builds. Unset \
				 dev_mode or set environment to a non-production value."
					.to_string(),
			));
		}

		// An unset environment follows dev_mode, so the two never disagree.
		let environment = self.environment.unwrap_or_else(|| {
			let implied = if dev_mode { "development" } else { "production" };
			implied.to_string()
		});

		let application_name = self
			.application_name
			.unwrap_or_else(|| DEFAULT_APPLICATION_NAME.to_string());
		if application_name.is_empty() || application_name.contains(['/', '\\']) {
			return Err(ConfigError::InvalidValue {
				key: "application_name".to_string(),
				message: format!("'{application_name}' must be a non-empty file stem"),
			});
		}

		let source = match (self.base_url, self.locales_dir) {
			(Some(_), Some(_)) => {
				return Err(ConfigError::Validation(
					"base_url and locales_dir are mutually exclusive".to_string(),
				));
			}
			(Some(base_url), None) => {
				if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
					return Err(ConfigError::InvalidValue {
						key: "base_url".to_string(),
						message: format!("'{base_url}' must start with http:// or https://"),
					});
				}
				BundleSourceConfig::Http { base_url }
			}
			(None, Some(dir)) => BundleSourceConfig::Directory(PathBuf::from(dir)),
			(None, None) => BundleSourceConfig::Directory(PathBuf::from(DEFAULT_LOCALES_DIR)),
		};

		Ok(I18nConfig {
			dev_mode,
			environment,
			source,
			application_name,
			cache: self.cache.unwrap_or(false),
			log_level: self
				.log_level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
		})
	}
}

/// Where non-default bundles come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleSourceConfig {
	Directory(PathBuf),
	Http { base_url: String },
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
	pub dev_mode: bool,
	pub environment: String,
	pub source: BundleSourceConfig,
	pub application_name: String,
	pub cache: bool,
	pub log_level: String,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			dev_mode: false,
			environment: "production".to_string(),
			source: BundleSourceConfig::Directory(PathBuf::from(DEFAULT_LOCALES_DIR)),
			application_name: DEFAULT_APPLICATION_NAME.to_string(),
			cache: false,
			log_level: DEFAULT_LOG_LEVEL.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = I18nConfigLayer::default().finalize().unwrap();
		assert_eq!(config, I18nConfig::default());
		assert!(!config.dev_mode);
	}

	#[test]
	fn test_development_environment_implies_dev_mode() {
		let layer = I18nConfigLayer {
			environment: Some("development".to_string()),
			..Default::default()
		};
		assert!(layer.finalize().unwrap().dev_mode);
	}

	#[test]
	fn test_explicit_dev_mode_overrides_environment() {
		let layer = I18nConfigLayer {
			dev_mode: Some(false),
			environment: Some("development".to_string()),
			..Default::default()
		};
		assert!(!layer.finalize().unwrap().dev_mode);

		let layer = I18nConfigLayer {
			dev_mode: Some(true),
			environment: Some("staging".to_string()),
			..Default::default()
		};
		assert!(layer.finalize().unwrap().dev_mode);

		let layer = I18nConfigLayer {
			dev_mode: Some(true),
			..Default::default()
		};
		let config = layer.finalize().unwrap();
		assert!(config.dev_mode);
		assert_eq!(config.environment, "development");
	}

	#[test]
	fn test_dev_mode_in_production_rejected() {
		let layer = I18nConfigLayer {
			dev_mode: Some(true),
			environment: Some("production".to_string()),
			..Default::default()
		};
		let message = layer.finalize().unwrap_err().to_string();
		assert!(message.contains("must not be exposed in production"));
		assert!(message.contains("dev_mode"));
		assert!(message.contains("environment"));
		assert!(!message.contains("LOOM_I18N_"));
	}

	#[test]
	fn test_unset_environment_defaults_to_production() {
		let config = I18nConfigLayer {
			dev_mode: Some(false),
			..Default::default()
		}
		.finalize()
		.unwrap();
		assert_eq!(config.environment, "production");
	}

	#[test]
	fn test_http_source() {
		let layer = I18nConfigLayer {
			base_url: Some("https://cdn.example.com/locales".to_string()),
			..Default::default()
		};
		assert_eq!(
			layer.finalize().unwrap().source,
			BundleSourceConfig::Http {
				base_url: "https://cdn.example.com/locales".to_string()
			}
		);
	}

	#[test]
	fn test_invalid_base_url() {
		let layer = I18nConfigLayer {
			base_url: Some("cdn.example.com".to_string()),
			..Default::default()
		};
		assert!(matches!(
			layer.finalize(),
			Err(ConfigError::InvalidValue { ref key, .. }) if key == "base_url"
		));
	}

	#[test]
	fn test_both_sources_rejected() {
		let layer = I18nConfigLayer {
			base_url: Some("https://cdn.example.com".to_string()),
			locales_dir: Some("/srv/locales".to_string()),
			..Default::default()
		};
		assert!(matches!(layer.finalize(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_invalid_application_name() {
		for name in ["", "../grafana", "a\\b"] {
			let layer = I18nConfigLayer {
				application_name: Some(name.to_string()),
				..Default::default()
			};
			assert!(layer.finalize().is_err(), "accepted '{name}'");
		}
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = I18nConfigLayer {
			locales_dir: Some("/old".to_string()),
			cache: Some(false),
			..Default::default()
		};
		base.merge(I18nConfigLayer {
			locales_dir: Some("/new".to_string()),
			..Default::default()
		});
		assert_eq!(base.locales_dir, Some("/new".to_string()));
		assert_eq!(base.cache, Some(false));
	}

	#[test]
	fn test_deserialize_toml() {
		let layer: I18nConfigLayer = toml::from_str(
			r#"
			environment = "development"
			locales_dir = "/srv/locales"
			application_name = "loom"
			cache = true
			"#,
		)
		.unwrap();
		let config = layer.finalize().unwrap();
		assert!(config.dev_mode);
		assert!(config.cache);
		assert_eq!(config.application_name, "loom");
		assert_eq!(
			config.source,
			BundleSourceConfig::Directory(PathBuf::from("/srv/locales"))
		);
	}

	#[test]
	fn test_deserialize_empty() {
		let layer: I18nConfigLayer = toml::from_str("").unwrap();
		assert_eq!(layer, I18nConfigLayer::default());
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale registry for Loom.
//!
//! The registry is the canonical, ordered list of locales the UI can present,
//! together with an asynchronous way to fetch each locale's translation
//! bundle on demand.
//!
//! # Features
//!
//! - **Ordered registry**: default locale first, declaration order preserved
//! - **Development pseudo-locale**: appended last only when `dev_mode` is set
//! - **Lazy loading**: bundles are fetched from disk or HTTP when requested
//! - **Optional caching**: coalesce concurrent loads per locale
//!
//! # Example
//!
//! ```no_run
//! use loom_i18n::{load_config, LocaleRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config()?;
//!     let registry = config.build_registry()?;
//!
//!     // Populate a locale picker
//!     for entry in registry.list_locales() {
//!         println!("{} - {}", entry.code(), entry.display_name());
//!     }
//!
//!     // Switch the active locale
//!     let entry = registry.resolve_or_default(Some("fr-FR"));
//!     let bundle = registry.load_translations(entry).await?;
//!     println!("{} keys", bundle.len());
//!
//!     Ok(())
//! }
//! ```

mod cache;
pub mod config;
mod error;
mod loader;
mod registry;
mod source;

pub use cache::CachingLoader;
pub use config::{
	load_config, load_config_from_env, load_config_with_file, load_config_with_overrides,
	BundleSourceConfig, ConfigError, I18nConfig, I18nConfigLayer,
};
pub use error::{LoadFailure, LocaleError, RegistryError, Result};
pub use loader::{EmptyLoader, FileLoader, HttpLoader, StaticLoader, TranslationLoader};
pub use registry::{LocaleEntry, LocaleRegistry, LocaleRegistryBuilder};
pub use source::{user_agent, BundleSource, CachedSource, FileSource, HttpSource};

// Re-export core types for convenience
pub use loom_i18n_core::{ResourceBundle, DEFAULT_LOCALE, PSEUDO_LOCALE};

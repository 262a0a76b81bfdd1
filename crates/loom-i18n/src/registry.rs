// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The locale registry.
//!
//! The registry is built once at startup and is read-only afterwards. Its
//! entries keep declaration order: the default locale first, the
//! development-only pseudo-locale last (and only when `dev_mode` is set).
//! Listing and lookup are synchronous; loading translations is the only
//! operation that suspends.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use loom_i18n_core::{ResourceBundle, DEFAULT_LOCALE, LOCALES, PSEUDO_LOCALE_DEFINITION};
use tracing::{debug, info, warn};

use crate::error::{LocaleError, RegistryError, Result};
use crate::loader::{EmptyLoader, TranslationLoader};
use crate::source::BundleSource;

/// A locale the application can present, paired with its bundle loader.
#[derive(Clone)]
pub struct LocaleEntry {
	code: String,
	display_name: String,
	loader: Arc<dyn TranslationLoader>,
}

impl LocaleEntry {
	pub fn new(
		code: impl Into<String>,
		display_name: impl Into<String>,
		loader: Arc<dyn TranslationLoader>,
	) -> Self {
		Self {
			code: code.into(),
			display_name: display_name.into(),
			loader,
		}
	}

	/// IETF language tag.
	pub fn code(&self) -> &str {
		&self.code
	}

	/// Language name in its own language.
	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	pub fn loader(&self) -> &Arc<dyn TranslationLoader> {
		&self.loader
	}
}

impl fmt::Debug for LocaleEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocaleEntry")
			.field("code", &self.code)
			.field("display_name", &self.display_name)
			.field("loader", &self.loader.describe())
			.finish()
	}
}

/// Ordered, immutable set of supported locales.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
	entries: Vec<LocaleEntry>,
	valid_codes: Vec<String>,
	default_index: usize,
	dev_mode: bool,
}

impl LocaleRegistry {
	/// Build the built-in locale table, taking non-default bundles from `source`.
	///
	/// When `dev_mode` is true the pseudo-locale is appended last.
	pub fn new(source: &dyn BundleSource, dev_mode: bool) -> Self {
		let mut entries: Vec<LocaleEntry> = LOCALES
			.iter()
			.map(|def| {
				let loader: Arc<dyn TranslationLoader> = if def.code == DEFAULT_LOCALE {
					Arc::new(EmptyLoader)
				} else {
					source.loader_for(def.code)
				};
				LocaleEntry::new(def.code, def.name, loader)
			})
			.collect();

		if dev_mode {
			entries.push(LocaleEntry::new(
				PSEUDO_LOCALE_DEFINITION.code,
				PSEUDO_LOCALE_DEFINITION.name,
				source.loader_for(PSEUDO_LOCALE_DEFINITION.code),
			));
		}

		debug!(source = %source.describe(), "building built-in locale registry");
		// The built-in table puts the default locale first.
		Self::from_parts(entries, 0, dev_mode)
	}

	/// Start a custom registry.
	pub fn builder() -> LocaleRegistryBuilder {
		LocaleRegistryBuilder::new()
	}

	fn from_parts(entries: Vec<LocaleEntry>, default_index: usize, dev_mode: bool) -> Self {
		let valid_codes: Vec<String> = entries.iter().map(|e| e.code.clone()).collect();

		info!(
			locales = entries.len(),
			default = %entries[default_index].code,
			dev_mode,
			codes = ?valid_codes,
			"locale registry built"
		);

		Self {
			entries,
			valid_codes,
			default_index,
			dev_mode,
		}
	}

	/// All entries in declaration order.
	pub fn list_locales(&self) -> &[LocaleEntry] {
		&self.entries
	}

	/// Codes of all entries, in the same order as [`LocaleRegistry::list_locales`].
	pub fn list_valid_codes(&self) -> &[String] {
		&self.valid_codes
	}

	/// Exact, case-sensitive lookup.
	pub fn resolve_locale(&self, code: &str) -> Result<&LocaleEntry> {
		self
			.entries
			.iter()
			.find(|e| e.code == code)
			.ok_or_else(|| LocaleError::NotFound {
				code: code.to_string(),
			})
	}

	pub fn contains(&self, code: &str) -> bool {
		self.valid_codes.iter().any(|c| c == code)
	}

	pub fn default_locale(&self) -> &LocaleEntry {
		&self.entries[self.default_index]
	}

	/// Resolve a requested code, falling back to the default locale when the
	/// code is absent or unknown.
	///
	/// # Example
	///
	/// ```
	/// use loom_i18n::{FileSource, LocaleRegistry};
	///
	/// let registry = LocaleRegistry::new(&FileSource::new("public/locales", "grafana"), false);
	/// assert_eq!(registry.resolve_or_default(Some("es-ES")).code(), "es-ES");
	/// assert_eq!(registry.resolve_or_default(Some("xx-XX")).code(), "en-US");
	/// assert_eq!(registry.resolve_or_default(None).code(), "en-US");
	/// ```
	pub fn resolve_or_default(&self, code: Option<&str>) -> &LocaleEntry {
		match code {
			Some(code) => match self.resolve_locale(code) {
				Ok(entry) => entry,
				Err(_) => {
					debug!(
						requested = %code,
						fallback = %self.default_locale().code,
						"unknown locale, using default"
					);
					self.default_locale()
				}
			},
			None => self.default_locale(),
		}
	}

	/// Load an entry's translations.
	///
	/// The default locale resolves to an empty bundle. Each call invokes the
	/// entry's loader; stale results from abandoned loads are the caller's to
	/// discard.
	pub async fn load_translations(&self, entry: &LocaleEntry) -> Result<ResourceBundle> {
		debug!(code = %entry.code, loader = %entry.loader.describe(), "loading translations");

		match entry.loader.load().await {
			Ok(bundle) => {
				debug!(code = %entry.code, keys = bundle.len(), "translations loaded");
				Ok(bundle)
			}
			Err(e) => {
				warn!(code = %entry.code, error = %e, "failed to load translations");
				Err(LocaleError::Load {
					code: entry.code.clone(),
					source: e,
				})
			}
		}
	}

	/// Resolve `code` and load its translations.
	pub async fn load_translations_for(&self, code: &str) -> Result<ResourceBundle> {
		let entry = self.resolve_locale(code)?;
		self.load_translations(entry).await
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always false: a registry holds at least the default locale.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether the development-only entries were registered.
	pub fn is_dev_mode(&self) -> bool {
		self.dev_mode
	}
}

/// Builder for registries with a custom locale table.
///
/// ```
/// use std::sync::Arc;
/// use loom_i18n::{LocaleRegistry, StaticLoader};
/// use loom_i18n_core::ResourceBundle;
///
/// let registry = LocaleRegistry::builder()
///     .default_locale("en-US", "English")
///     .locale("de-DE", "Deutsch", Arc::new(StaticLoader::new(ResourceBundle::new())))
///     .build(false)
///     .unwrap();
/// assert_eq!(registry.list_valid_codes(), ["en-US", "de-DE"]);
/// ```
pub struct LocaleRegistryBuilder {
	default_code: String,
	// Every code passed to `default_locale`, in call order.
	declared_defaults: Vec<String>,
	entries: Vec<LocaleEntry>,
	dev_entries: Vec<LocaleEntry>,
}

impl LocaleRegistryBuilder {
	pub fn new() -> Self {
		Self {
			default_code: DEFAULT_LOCALE.to_string(),
			declared_defaults: Vec::new(),
			entries: Vec::new(),
			dev_entries: Vec::new(),
		}
	}

	/// Register the default locale. Its loader is always [`EmptyLoader`].
	///
	/// Call this at most once: [`LocaleRegistryBuilder::build`] rejects a
	/// builder whose default was set to two different codes.
	pub fn default_locale(mut self, code: impl Into<String>, display_name: impl Into<String>) -> Self {
		let code = code.into();
		self.default_code = code.clone();
		self.declared_defaults.push(code.clone());
		self
			.entries
			.push(LocaleEntry::new(code, display_name, Arc::new(EmptyLoader)));
		self
	}

	pub fn locale(
		mut self,
		code: impl Into<String>,
		display_name: impl Into<String>,
		loader: Arc<dyn TranslationLoader>,
	) -> Self {
		self.entries.push(LocaleEntry::new(code, display_name, loader));
		self
	}

	/// Register an entry that only exists in development mode. Development
	/// entries follow all regular entries.
	pub fn dev_locale(
		mut self,
		code: impl Into<String>,
		display_name: impl Into<String>,
		loader: Arc<dyn TranslationLoader>,
	) -> Self {
		self
			.dev_entries
			.push(LocaleEntry::new(code, display_name, loader));
		self
	}

	pub fn build(self, dev_mode: bool) -> std::result::Result<LocaleRegistry, RegistryError> {
		if let Some(first) = self.declared_defaults.first() {
			if let Some(second) = self.declared_defaults.iter().find(|c| *c != first) {
				return Err(RegistryError::ConflictingDefault {
					first: first.clone(),
					second: second.clone(),
				});
			}
		}

		let mut entries = self.entries;
		if dev_mode {
			entries.extend(self.dev_entries);
		}

		let mut seen = HashSet::new();
		for entry in &entries {
			if !seen.insert(entry.code.as_str()) {
				return Err(RegistryError::DuplicateCode(entry.code.clone()));
			}
		}

		let default_index = entries
			.iter()
			.position(|e| e.code == self.default_code)
			.ok_or_else(|| RegistryError::MissingDefault(self.default_code.clone()))?;

		// The default locale's strings are built in.
		entries[default_index].loader = Arc::new(EmptyLoader);

		Ok(LocaleRegistry::from_parts(entries, default_index, dev_mode))
	}
}

impl Default for LocaleRegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

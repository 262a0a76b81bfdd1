// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core internationalization types for Loom.
//!
//! This crate holds the pieces of the locale registry that need no I/O:
//!
//! - The built-in locale table ([`LOCALES`]) and its code constants
//! - [`ResourceBundle`], a flat `key -> translated string` mapping parsed from
//!   i18next-style JSON bundles
//! - Pseudo-localization used to build the development-only pseudo-locale
//!
//! # Example
//!
//! ```
//! use loom_i18n_core::{locale_definition, ResourceBundle, DEFAULT_LOCALE};
//!
//! assert_eq!(locale_definition("fr-FR").unwrap().name, "Français");
//! assert_eq!(DEFAULT_LOCALE, "en-US");
//!
//! let bundle = ResourceBundle::from_json(r#"{"nav": {"home": "Accueil"}}"#).unwrap();
//! assert_eq!(bundle.get("nav.home"), Some("Accueil"));
//! ```

mod bundle;
mod error;
mod locale;
pub mod pseudo;

pub use bundle::ResourceBundle;
pub use error::BundleError;
pub use locale::{
	bundle_path, is_builtin, locale_definition, LocaleDefinition, CHINESE_SIMPLIFIED,
	DEFAULT_APPLICATION_NAME, DEFAULT_LOCALE, ENGLISH_US, FRENCH_FRANCE, LOCALES, PSEUDO_LOCALE,
	PSEUDO_LOCALE_DEFINITION, SPANISH_SPAIN,
};
pub use pseudo::{pseudo_localize, pseudo_localize_bundle};

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Built-in locale table.

pub const ENGLISH_US: &str = "en-US";
pub const FRENCH_FRANCE: &str = "fr-FR";
pub const SPANISH_SPAIN: &str = "es-ES";
pub const CHINESE_SIMPLIFIED: &str = "zh-Hans";
pub const PSEUDO_LOCALE: &str = "pseudo-LOCALE";

/// Locale whose strings are compiled into the UI and need no bundle.
pub const DEFAULT_LOCALE: &str = ENGLISH_US;

/// Bundle file stem used when no application name is configured.
pub const DEFAULT_APPLICATION_NAME: &str = "grafana";

/// Static description of a supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDefinition {
	/// IETF language tag, e.g. `en-US`.
	pub code: &'static str,
	/// Language name written in that language, e.g. `Français`.
	pub name: &'static str,
}

/// Officially supported locales in display order. The default locale comes first.
pub const LOCALES: &[LocaleDefinition] = &[
	LocaleDefinition {
		code: ENGLISH_US,
		name: "English",
	},
	LocaleDefinition {
		code: FRENCH_FRANCE,
		name: "Français",
	},
	LocaleDefinition {
		code: SPANISH_SPAIN,
		name: "Español",
	},
	LocaleDefinition {
		code: CHINESE_SIMPLIFIED,
		name: "中文（简体）",
	},
];

/// Development-only locale used to spot strings that are not externalized.
pub const PSEUDO_LOCALE_DEFINITION: LocaleDefinition = LocaleDefinition {
	code: PSEUDO_LOCALE,
	name: "Pseudo-locale",
};

/// Look up a built-in locale, including the pseudo-locale.
pub fn locale_definition(code: &str) -> Option<&'static LocaleDefinition> {
	LOCALES
		.iter()
		.chain(std::iter::once(&PSEUDO_LOCALE_DEFINITION))
		.find(|def| def.code == code)
}

/// Check whether `code` belongs to the built-in table (pseudo-locale included).
pub fn is_builtin(code: &str) -> bool {
	locale_definition(code).is_some()
}

/// Relative location of a locale's bundle: `<code>/<application_name>.json`.
pub fn bundle_path(code: &str, application_name: &str) -> String {
	format!("{code}/{application_name}.json")
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_default_locale_is_first() {
		assert_eq!(LOCALES[0].code, DEFAULT_LOCALE);
	}

	#[test]
	fn test_codes_are_distinct() {
		let codes: HashSet<_> = LOCALES.iter().map(|l| l.code).collect();
		assert_eq!(codes.len(), LOCALES.len());
		assert!(!codes.contains(PSEUDO_LOCALE));
	}

	#[test]
	fn test_display_names_are_native() {
		assert_eq!(locale_definition("fr-FR").unwrap().name, "Français");
		assert_eq!(locale_definition("es-ES").unwrap().name, "Español");
		assert_eq!(locale_definition("zh-Hans").unwrap().name, "中文（简体）");
	}

	#[test]
	fn test_pseudo_locale_is_known_but_not_listed() {
		assert!(is_builtin(PSEUDO_LOCALE));
		assert!(LOCALES.iter().all(|l| l.code != PSEUDO_LOCALE));
	}

	#[test]
	fn test_lookup_is_case_sensitive() {
		assert!(is_builtin("fr-FR"));
		assert!(!is_builtin("fr-fr"));
		assert!(!is_builtin(""));
		assert!(!is_builtin("xx-XX"));
	}

	#[test]
	fn test_bundle_path() {
		assert_eq!(bundle_path("fr-FR", "grafana"), "fr-FR/grafana.json");
		assert_eq!(
			bundle_path(PSEUDO_LOCALE, DEFAULT_APPLICATION_NAME),
			"pseudo-LOCALE/grafana.json"
		);
	}
}

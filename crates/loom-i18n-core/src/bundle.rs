// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flat translation resource bundles.
//!
//! Bundles are authored as i18next-style JSON, where keys may be grouped into
//! nested objects. Parsing flattens the tree into dot-joined keys so lookups
//! never have to walk the structure:
//!
//! ```json
//! { "nav": { "home": { "title": "Accueil" } } }
//! ```
//!
//! becomes the single entry `nav.home.title -> Accueil`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BundleError;

/// Mapping from translation key to translated string for one locale.
///
/// An empty bundle means "no overrides": the built-in strings are used as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceBundle {
	entries: BTreeMap<String, String>,
}

impl ResourceBundle {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a JSON document, flattening nested objects into dot-joined keys.
	pub fn from_json(json: &str) -> Result<Self, BundleError> {
		let value: Value = serde_json::from_str(json)?;
		Self::from_value(value)
	}

	/// Same as [`ResourceBundle::from_json`] for raw bytes.
	pub fn from_slice(bytes: &[u8]) -> Result<Self, BundleError> {
		let value: Value = serde_json::from_slice(bytes)?;
		Self::from_value(value)
	}

	pub fn from_value(value: Value) -> Result<Self, BundleError> {
		let Value::Object(root) = value else {
			return Err(BundleError::NotAnObject);
		};

		let mut entries = BTreeMap::new();
		flatten_into(&mut entries, None, root)?;
		Ok(Self { entries })
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.entries.insert(key.into(), value.into())
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self
			.entries
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Keys present in `reference` but absent here, in key order.
	pub fn missing_keys<'a>(&self, reference: &'a ResourceBundle) -> Vec<&'a str> {
		reference
			.keys()
			.filter(|key| !self.entries.contains_key(*key))
			.collect()
	}

	/// Apply `f` to every translated string, keeping keys.
	pub fn map_values(&self, mut f: impl FnMut(&str) -> String) -> Self {
		Self {
			entries: self
				.entries
				.iter()
				.map(|(k, v)| (k.clone(), f(v)))
				.collect(),
		}
	}

	/// Serialize back to a flat JSON object.
	pub fn to_json_pretty(&self) -> Result<String, BundleError> {
		Ok(serde_json::to_string_pretty(&self.entries)?)
	}
}

impl FromIterator<(String, String)> for ResourceBundle {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a ResourceBundle {
	type Item = (&'a String, &'a String);
	type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

fn flatten_into(
	entries: &mut BTreeMap<String, String>,
	prefix: Option<&str>,
	object: Map<String, Value>,
) -> Result<(), BundleError> {
	for (segment, value) in object {
		let key = match prefix {
			Some(prefix) => format!("{prefix}.{segment}"),
			None => segment,
		};

		let text = match value {
			Value::String(s) => s,
			Value::Number(n) => n.to_string(),
			Value::Bool(b) => b.to_string(),
			Value::Object(nested) => {
				flatten_into(entries, Some(&key), nested)?;
				continue;
			}
			Value::Array(_) => {
				return Err(BundleError::UnsupportedValue { key, kind: "array" });
			}
			Value::Null => {
				return Err(BundleError::UnsupportedValue { key, kind: "null" });
			}
		};

		// A dotted literal key and a nested path can flatten to the same key.
		if entries.contains_key(&key) {
			return Err(BundleError::DuplicateKey { key });
		}
		entries.insert(key, text);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_flat_bundle() {
		let bundle = ResourceBundle::from_json(r#"{"greeting": "Bonjour"}"#).unwrap();
		assert_eq!(bundle.len(), 1);
		assert_eq!(bundle.get("greeting"), Some("Bonjour"));
	}

	#[test]
	fn test_nested_objects_flatten_to_dot_keys() {
		let json = r#"{
			"nav": {
				"home": { "title": "Accueil" },
				"alerting": "Alertes"
			},
			"common": { "save": "Enregistrer" }
		}"#;
		let bundle = ResourceBundle::from_json(json).unwrap();

		assert_eq!(bundle.get("nav.home.title"), Some("Accueil"));
		assert_eq!(bundle.get("nav.alerting"), Some("Alertes"));
		assert_eq!(bundle.get("common.save"), Some("Enregistrer"));
		assert_eq!(bundle.len(), 3);
		assert!(!bundle.contains_key("nav"));
	}

	#[test]
	fn test_scalars_use_json_text() {
		let bundle = ResourceBundle::from_json(r#"{"limit": 10, "enabled": true}"#).unwrap();
		assert_eq!(bundle.get("limit"), Some("10"));
		assert_eq!(bundle.get("enabled"), Some("true"));
	}

	#[test]
	fn test_empty_object_is_empty_bundle() {
		let bundle = ResourceBundle::from_json("{}").unwrap();
		assert!(bundle.is_empty());
		assert_eq!(bundle, ResourceBundle::new());
	}

	#[test]
	fn test_rejects_non_object_root() {
		assert!(matches!(
			ResourceBundle::from_json(r#"["a"]"#),
			Err(BundleError::NotAnObject)
		));
		assert!(matches!(
			ResourceBundle::from_json(r#""text""#),
			Err(BundleError::NotAnObject)
		));
	}

	#[test]
	fn test_rejects_arrays_and_null() {
		match ResourceBundle::from_json(r#"{"a": {"b": [1, 2]}}"#) {
			Err(BundleError::UnsupportedValue { key, kind }) => {
				assert_eq!(key, "a.b");
				assert_eq!(kind, "array");
			}
			other => panic!("expected UnsupportedValue, got {other:?}"),
		}

		assert!(matches!(
			ResourceBundle::from_json(r#"{"a": null}"#),
			Err(BundleError::UnsupportedValue { kind: "null", .. })
		));
	}

	#[test]
	fn test_rejects_colliding_keys() {
		match ResourceBundle::from_json(r#"{"a": {"b": "nested"}, "a.b": "literal"}"#) {
			Err(BundleError::DuplicateKey { key }) => assert_eq!(key, "a.b"),
			other => panic!("expected DuplicateKey, got {other:?}"),
		}
	}

	#[test]
	fn test_rejects_malformed_json() {
		assert!(matches!(
			ResourceBundle::from_json("{not json"),
			Err(BundleError::Json(_))
		));
	}

	#[test]
	fn test_missing_keys() {
		let reference = ResourceBundle::from_json(r#"{"a": "A", "b": "B", "c": "C"}"#).unwrap();
		let partial = ResourceBundle::from_json(r#"{"b": "b"}"#).unwrap();
		assert_eq!(partial.missing_keys(&reference), vec!["a", "c"]);
		assert!(reference.missing_keys(&partial).is_empty());
	}

	#[test]
	fn test_to_json_is_flat() {
		let bundle = ResourceBundle::from_json(r#"{"nav": {"home": "Accueil"}}"#).unwrap();
		let json = bundle.to_json_pretty().unwrap();
		let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(reparsed["nav.home"], "Accueil");
	}

	proptest! {
		#[test]
		fn flattening_keeps_every_leaf(
			leaves in prop::collection::btree_map("[a-z]{1,8}", "[ -~]{0,20}", 0..12)
		) {
			let mut nested = serde_json::Map::new();
			nested.insert(
				"group".to_string(),
				serde_json::Value::Object(
					leaves
						.iter()
						.map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
						.collect(),
				),
			);

			let bundle = ResourceBundle::from_value(serde_json::Value::Object(nested)).unwrap();
			prop_assert_eq!(bundle.len(), leaves.len());
			for (k, v) in &leaves {
				let key = format!("group.{k}");
				prop_assert_eq!(bundle.get(&key), Some(v.as_str()));
			}
		}
	}
}

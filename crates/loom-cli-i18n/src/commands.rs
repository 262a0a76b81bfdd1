// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use anyhow::{bail, Context};
use loom_i18n::{LocaleError, LocaleRegistry, ResourceBundle};
use loom_i18n_core::pseudo_localize_bundle;

pub fn list(registry: &LocaleRegistry, json: bool) -> anyhow::Result<()> {
	if json {
		println!("{}", serde_json::to_string_pretty(&locales_json(registry))?);
	} else {
		print!("{}", locales_table(registry));
	}
	Ok(())
}

pub fn resolve(registry: &LocaleRegistry, code: &str) -> anyhow::Result<()> {
	let entry = registry.resolve_or_default(Some(code));
	if entry.code() != code {
		tracing::warn!(requested = %code, fallback = %entry.code(), "locale not registered");
	}
	println!("{}\t{}", entry.code(), entry.display_name());
	Ok(())
}

pub async fn load(registry: &LocaleRegistry, code: &str, keys_only: bool) -> anyhow::Result<()> {
	let bundle = registry.load_translations_for(code).await?;
	if keys_only {
		println!("{}", bundle.len());
	} else {
		println!("{}", bundle.to_json_pretty()?);
	}
	Ok(())
}

pub async fn check(registry: &LocaleRegistry, reference: Option<&str>) -> anyhow::Result<()> {
	let reference_bundle = match reference {
		Some(code) => Some(
			registry
				.load_translations_for(code)
				.await
				.with_context(|| format!("loading reference locale {code}"))?,
		),
		None => None,
	};

	let results = futures::future::join_all(
		registry
			.list_locales()
			.iter()
			.map(|entry| async move { (entry.code(), registry.load_translations(entry).await) }),
	)
	.await;

	let mut failures = 0usize;
	for (code, result) in results {
		match result {
			Ok(bundle) => println!(
				"{}",
				check_line(code, &bundle, reference_bundle.as_ref(), registry)
			),
			Err(e) => {
				failures += 1;
				println!("{}", failure_line(code, &e));
			}
		}
	}

	if failures > 0 {
		bail!("{failures} locale(s) failed to load");
	}
	Ok(())
}

pub async fn pseudo(input: &Path, output: &Path) -> anyhow::Result<()> {
	let bytes = tokio::fs::read(input)
		.await
		.with_context(|| format!("reading {}", input.display()))?;
	let bundle = ResourceBundle::from_slice(&bytes)
		.with_context(|| format!("parsing {}", input.display()))?;

	let pseudo = pseudo_localize_bundle(&bundle);

	if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
		tokio::fs::create_dir_all(parent).await?;
	}
	tokio::fs::write(output, pseudo.to_json_pretty()?)
		.await
		.with_context(|| format!("writing {}", output.display()))?;

	tracing::info!(
		input = %input.display(),
		output = %output.display(),
		keys = pseudo.len(),
		"wrote pseudo-localized bundle"
	);
	Ok(())
}

fn locales_json(registry: &LocaleRegistry) -> serde_json::Value {
	let default = registry.default_locale().code();
	serde_json::Value::Array(
		registry
			.list_locales()
			.iter()
			.map(|entry| {
				serde_json::json!({
					"code": entry.code(),
					"name": entry.display_name(),
					"default": entry.code() == default,
				})
			})
			.collect(),
	)
}

fn locales_table(registry: &LocaleRegistry) -> String {
	let default = registry.default_locale().code();
	let width = registry
		.list_valid_codes()
		.iter()
		.map(|c| c.len())
		.max()
		.unwrap_or(0);

	let mut out = String::new();
	for entry in registry.list_locales() {
		let marker = if entry.code() == default { " (default)" } else { "" };
		out.push_str(&format!(
			"{:width$}  {}{}\n",
			entry.code(),
			entry.display_name(),
			marker
		));
	}
	out
}

fn check_line(
	code: &str,
	bundle: &ResourceBundle,
	reference: Option<&ResourceBundle>,
	registry: &LocaleRegistry,
) -> String {
	// The default locale's strings are built in, so key coverage is meaningless.
	let is_default = code == registry.default_locale().code();
	match reference {
		Some(reference) if !is_default => {
			let missing = bundle.missing_keys(reference);
			format!("{code}\tok\t{} keys\t{} missing", bundle.len(), missing.len())
		}
		_ => format!("{code}\tok\t{} keys", bundle.len()),
	}
}

fn failure_line(code: &str, error: &LocaleError) -> String {
	if error.is_retryable() {
		format!("{code}\tFAILED (retryable)\t{error}")
	} else {
		format!("{code}\tFAILED\t{error}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use loom_i18n::{FileSource, LoadFailure};
	use tempfile::TempDir;

	fn registry(dev_mode: bool) -> LocaleRegistry {
		LocaleRegistry::new(&FileSource::new("/nonexistent", "grafana"), dev_mode)
	}

	#[test]
	fn table_marks_default_and_aligns_codes() {
		let table = locales_table(&registry(true));
		let lines: Vec<&str> = table.lines().collect();

		assert_eq!(lines.len(), 5);
		assert!(lines[0].starts_with("en-US  "));
		assert!(lines[0].ends_with("English (default)"));
		assert!(lines[1].contains("Français"));
		assert!(lines[4].starts_with("pseudo-LOCALE  Pseudo-locale"));
	}

	#[test]
	fn json_lists_codes_in_order() {
		let json = locales_json(&registry(false));
		let codes: Vec<&str> = json
			.as_array()
			.unwrap()
			.iter()
			.map(|v| v["code"].as_str().unwrap())
			.collect();
		assert_eq!(codes, ["en-US", "fr-FR", "es-ES", "zh-Hans"]);
		assert_eq!(json[0]["default"], true);
		assert_eq!(json[1]["default"], false);
	}

	#[test]
	fn check_line_reports_missing_keys() {
		let registry = registry(false);
		let reference = ResourceBundle::from_json(r#"{"a": "A", "b": "B"}"#).unwrap();
		let partial = ResourceBundle::from_json(r#"{"a": "x"}"#).unwrap();

		assert_eq!(
			check_line("fr-FR", &partial, Some(&reference), &registry),
			"fr-FR\tok\t1 keys\t1 missing"
		);
		assert_eq!(
			check_line("en-US", &ResourceBundle::new(), Some(&reference), &registry),
			"en-US\tok\t0 keys"
		);
	}

	#[test]
	fn failure_line_marks_retryable_errors() {
		let unavailable = LocaleError::Load {
			code: "es-ES".to_string(),
			source: LoadFailure::Status {
				status: 503,
				url: "https://cdn.example.com/es-ES/grafana.json".to_string(),
			},
		};
		assert!(failure_line("es-ES", &unavailable).starts_with("es-ES\tFAILED (retryable)\t"));

		let missing = LocaleError::Load {
			code: "fr-FR".to_string(),
			source: LoadFailure::NotFound("fr-FR/grafana.json".to_string()),
		};
		assert!(failure_line("fr-FR", &missing).starts_with("fr-FR\tFAILED\tFailed to load"));
	}

	#[tokio::test]
	async fn check_fails_when_bundles_are_missing() {
		let result = check(&registry(false), None).await;
		assert!(result.unwrap_err().to_string().contains("3 locale(s)"));
	}

	#[tokio::test]
	async fn pseudo_writes_transformed_bundle() {
		let dir = TempDir::new().unwrap();
		let input = dir.path().join("en-US.json");
		let output = dir.path().join("pseudo-LOCALE").join("grafana.json");
		std::fs::write(&input, r#"{"common": {"save": "Save"}}"#).unwrap();

		pseudo(&input, &output).await.unwrap();

		let written = ResourceBundle::from_json(&std::fs::read_to_string(&output).unwrap()).unwrap();
		assert_eq!(written.get("common.save"), Some("[Šåṽé~~]"));
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `loom-i18n` binary: inspect the locale registry and check translation bundles.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use loom_i18n::I18nConfigLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Loom i18n - inspect locales and translation bundles.
#[derive(Parser, Debug)]
#[command(name = "loom-i18n", about = "Inspect Loom locales and translation bundles", version)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/loom/i18n.toml)
	#[arg(long, global = true, env = "LOOM_I18N_CONFIG")]
	config: Option<PathBuf>,

	/// Register development-only locales regardless of configuration
	#[arg(long, global = true)]
	dev: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List registered locales in display order
	List {
		/// Print JSON instead of a table
		#[arg(long)]
		json: bool,
	},
	/// Resolve a locale code, falling back to the default locale
	Resolve { code: String },
	/// Load a locale's bundle and print it as JSON
	Load {
		code: String,
		/// Only print the number of keys
		#[arg(long)]
		keys: bool,
	},
	/// Load every locale and report failures and missing keys
	Check {
		/// Locale whose keys every other locale is compared against
		#[arg(long)]
		reference: Option<String>,
	},
	/// Write a pseudo-localized copy of a bundle
	Pseudo { input: PathBuf, output: PathBuf },
}

impl Args {
	/// Flags that override every configuration source.
	fn overrides(&self) -> I18nConfigLayer {
		I18nConfigLayer {
			dev_mode: self.dev.then_some(true),
			..Default::default()
		}
	}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let config = loom_i18n::load_config_with_overrides(args.config.clone(), args.overrides())?;

	// Logs go to stderr so command output stays machine-readable.
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	tracing::debug!(command = ?args.command, dev_mode = config.dev_mode, "starting loom-i18n");

	match args.command {
		Command::List { json } => {
			let registry = config.build_registry()?;
			commands::list(&registry, json)
		}
		Command::Resolve { code } => {
			let registry = config.build_registry()?;
			commands::resolve(&registry, &code)
		}
		Command::Load { code, keys } => {
			let registry = config.build_registry()?;
			commands::load(&registry, &code, keys).await
		}
		Command::Check { reference } => {
			let registry = config.build_registry()?;
			commands::check(&registry, reference.as_deref()).await
		}
		Command::Pseudo { input, output } => commands::pseudo(&input, &output).await,
	}
}

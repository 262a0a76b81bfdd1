// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bundle sources: where a locale's `<code>/<application>.json` lives.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use loom_i18n_core::bundle_path;
use reqwest::Client;

use crate::cache::CachingLoader;
use crate::loader::{FileLoader, HttpLoader, TranslationLoader};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maps a locale code to the loader for its bundle.
pub trait BundleSource: Send + Sync {
	fn loader_for(&self, code: &str) -> Arc<dyn TranslationLoader>;

	fn describe(&self) -> String;
}

/// Bundles stored on disk under `root/<code>/<application>.json`.
#[derive(Debug, Clone)]
pub struct FileSource {
	root: PathBuf,
	application_name: String,
}

impl FileSource {
	pub fn new(root: impl Into<PathBuf>, application_name: impl Into<String>) -> Self {
		Self {
			root: root.into(),
			application_name: application_name.into(),
		}
	}

	pub fn bundle_file(&self, code: &str) -> PathBuf {
		self.root.join(bundle_path(code, &self.application_name))
	}
}

impl BundleSource for FileSource {
	fn loader_for(&self, code: &str) -> Arc<dyn TranslationLoader> {
		Arc::new(FileLoader::new(self.bundle_file(code)))
	}

	fn describe(&self) -> String {
		format!("directory {}", self.root.display())
	}
}

/// Bundles served over HTTP under `base_url/<code>/<application>.json`.
#[derive(Debug, Clone)]
pub struct HttpSource {
	client: Client,
	base_url: String,
	application_name: String,
}

impl HttpSource {
	/// Build a source with its own client.
	pub fn new(
		base_url: impl Into<String>,
		application_name: impl Into<String>,
	) -> Result<Self, reqwest::Error> {
		let client = Client::builder()
			.user_agent(user_agent())
			.timeout(HTTP_TIMEOUT)
			.build()?;
		Ok(Self::with_client(client, base_url, application_name))
	}

	pub fn with_client(
		client: Client,
		base_url: impl Into<String>,
		application_name: impl Into<String>,
	) -> Self {
		let base_url = base_url.into().trim_end_matches('/').to_string();
		Self {
			client,
			base_url,
			application_name: application_name.into(),
		}
	}

	pub fn bundle_url(&self, code: &str) -> String {
		format!(
			"{}/{}",
			self.base_url,
			bundle_path(code, &self.application_name)
		)
	}
}

impl BundleSource for HttpSource {
	fn loader_for(&self, code: &str) -> Arc<dyn TranslationLoader> {
		Arc::new(HttpLoader::new(self.client.clone(), self.bundle_url(code)))
	}

	fn describe(&self) -> String {
		format!("http {}", self.base_url)
	}
}

/// Wraps every loader produced by `inner` in a [`CachingLoader`].
pub struct CachedSource {
	inner: Box<dyn BundleSource>,
}

impl CachedSource {
	pub fn new(inner: Box<dyn BundleSource>) -> Self {
		Self { inner }
	}
}

impl BundleSource for CachedSource {
	fn loader_for(&self, code: &str) -> Arc<dyn TranslationLoader> {
		Arc::new(CachingLoader::new(self.inner.loader_for(code)))
	}

	fn describe(&self) -> String {
		format!("cached {}", self.inner.describe())
	}
}

/// User-Agent sent with bundle requests: `loom-i18n/{version}`.
pub fn user_agent() -> String {
	format!("loom-i18n/{}", env!("CARGO_PKG_VERSION"))
}

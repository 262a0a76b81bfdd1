// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation loaders.
//!
//! Each registry entry owns one loader: a deferred, on-demand way of obtaining
//! that locale's [`ResourceBundle`]. Loaders are idempotent and may be called
//! once per locale switch; none of them cache on their own (see
//! [`crate::CachingLoader`] for that).

use std::path::PathBuf;

use async_trait::async_trait;
use loom_i18n_core::ResourceBundle;
use reqwest::{Client, StatusCode};

use crate::error::LoadFailure;

#[async_trait]
pub trait TranslationLoader: Send + Sync {
	/// Produce the bundle. Callers must always await, even for loaders that
	/// resolve immediately.
	async fn load(&self) -> Result<ResourceBundle, LoadFailure>;

	/// Short human-readable description used in logs.
	fn describe(&self) -> String;
}

/// Loader for the default locale: its strings are built in, so there is
/// nothing to fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLoader;

#[async_trait]
impl TranslationLoader for EmptyLoader {
	async fn load(&self) -> Result<ResourceBundle, LoadFailure> {
		Ok(ResourceBundle::new())
	}

	fn describe(&self) -> String {
		"built-in".to_string()
	}
}

/// Loader backed by an in-memory bundle.
#[derive(Debug, Clone)]
pub struct StaticLoader {
	bundle: ResourceBundle,
}

impl StaticLoader {
	pub fn new(bundle: ResourceBundle) -> Self {
		Self { bundle }
	}
}

#[async_trait]
impl TranslationLoader for StaticLoader {
	async fn load(&self) -> Result<ResourceBundle, LoadFailure> {
		Ok(self.bundle.clone())
	}

	fn describe(&self) -> String {
		format!("static ({} keys)", self.bundle.len())
	}
}

/// Loader that reads a JSON bundle from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileLoader {
	path: PathBuf,
}

impl FileLoader {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &std::path::Path {
		&self.path
	}
}

#[async_trait]
impl TranslationLoader for FileLoader {
	async fn load(&self) -> Result<ResourceBundle, LoadFailure> {
		let bytes = match tokio::fs::read(&self.path).await {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				return Err(LoadFailure::NotFound(self.path.display().to_string()));
			}
			Err(e) => {
				return Err(LoadFailure::Io {
					location: self.path.display().to_string(),
					source: e,
				});
			}
		};

		tracing::trace!(path = %self.path.display(), bytes = bytes.len(), "read bundle file");
		Ok(ResourceBundle::from_slice(&bytes)?)
	}

	fn describe(&self) -> String {
		format!("file {}", self.path.display())
	}
}

/// Loader that fetches a JSON bundle over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLoader {
	client: Client,
	url: String,
}

impl HttpLoader {
	pub fn new(client: Client, url: impl Into<String>) -> Self {
		Self {
			client,
			url: url.into(),
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}
}

#[async_trait]
impl TranslationLoader for HttpLoader {
	async fn load(&self) -> Result<ResourceBundle, LoadFailure> {
		let response = self
			.client
			.get(&self.url)
			.send()
			.await
			.map_err(LoadFailure::Http)?;

		let status = response.status();
		if status == StatusCode::NOT_FOUND {
			return Err(LoadFailure::NotFound(self.url.clone()));
		}
		if !status.is_success() {
			return Err(LoadFailure::Status {
				status: status.as_u16(),
				url: self.url.clone(),
			});
		}

		let bytes = response.bytes().await.map_err(LoadFailure::Http)?;
		tracing::trace!(url = %self.url, bytes = bytes.len(), "fetched bundle");
		Ok(ResourceBundle::from_slice(&bytes)?)
	}

	fn describe(&self) -> String {
		format!("http {}", self.url)
	}
}

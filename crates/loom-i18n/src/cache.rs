// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Optional caching and load coalescing.
//!
//! Loaders are idempotent, so keeping the first successful bundle does not
//! change what callers observe as long as the backing resource is stable.
//! Concurrent callers for the same locale share one in-flight load. Failures
//! are never cached: the next call retries.

use std::sync::Arc;

use async_trait::async_trait;
use loom_i18n_core::ResourceBundle;
use tokio::sync::OnceCell;

use crate::error::LoadFailure;
use crate::loader::TranslationLoader;

pub struct CachingLoader {
	inner: Arc<dyn TranslationLoader>,
	bundle: OnceCell<ResourceBundle>,
}

impl CachingLoader {
	pub fn new(inner: Arc<dyn TranslationLoader>) -> Self {
		Self {
			inner,
			bundle: OnceCell::new(),
		}
	}
}

#[async_trait]
impl TranslationLoader for CachingLoader {
	async fn load(&self) -> Result<ResourceBundle, LoadFailure> {
		if let Some(bundle) = self.bundle.get() {
			tracing::trace!(loader = %self.inner.describe(), "bundle cache hit");
			return Ok(bundle.clone());
		}

		self
			.bundle
			.get_or_try_init(|| self.inner.load())
			.await
			.cloned()
	}

	fn describe(&self) -> String {
		format!("cached {}", self.inner.describe())
	}
}

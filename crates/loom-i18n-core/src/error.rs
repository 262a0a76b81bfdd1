// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Errors raised while parsing translation bundles.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
	#[error("invalid bundle JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("bundle root must be a JSON object")]
	NotAnObject,

	#[error("unsupported {kind} value at key '{key}'")]
	UnsupportedValue { key: String, kind: &'static str },

	#[error("key '{key}' is defined more than once")]
	DuplicateKey { key: String },
}

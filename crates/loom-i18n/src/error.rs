// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the locale registry.

use loom_i18n_core::BundleError;
use thiserror::Error;

/// Result type alias for registry lookups and loads.
pub type Result<T> = std::result::Result<T, LocaleError>;

/// Errors surfaced to consumers of the registry. Both variants are recoverable:
/// callers fall back to the default locale or keep the active one.
#[derive(Error, Debug)]
pub enum LocaleError {
	/// The requested code is not registered.
	#[error("Locale not found: {code}")]
	NotFound {
		/// The code that was requested.
		code: String,
	},

	/// A non-default locale's bundle could not be loaded.
	#[error("Failed to load translations for {code}: {source}")]
	Load {
		/// The locale whose bundle failed.
		code: String,
		/// Underlying cause.
		#[source]
		source: LoadFailure,
	},
}

impl LocaleError {
	/// Locale code the error refers to.
	pub fn code(&self) -> &str {
		match self {
			LocaleError::NotFound { code } | LocaleError::Load { code, .. } => code,
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, LocaleError::NotFound { .. })
	}

	/// Returns true if loading the same locale again might succeed.
	pub fn is_retryable(&self) -> bool {
		match self {
			LocaleError::NotFound { .. } => false,
			LocaleError::Load { source, .. } => source.is_retryable(),
		}
	}
}

/// Why a translation loader failed.
#[derive(Error, Debug)]
pub enum LoadFailure {
	/// The bundle resource does not exist.
	#[error("Bundle not found at {0}")]
	NotFound(String),

	/// Reading a local bundle failed.
	#[error("Failed to read {location}: {source}")]
	Io {
		location: String,
		#[source]
		source: std::io::Error,
	},

	/// Transport-level HTTP failure.
	#[error("HTTP request failed: {0}")]
	Http(#[source] reqwest::Error),

	/// Server answered with a non-success status other than 404.
	#[error("Server returned {status} for {url}")]
	Status { status: u16, url: String },

	/// The bundle was fetched but is not a valid translation document.
	#[error("Malformed bundle: {0}")]
	Bundle(#[from] BundleError),
}

impl LoadFailure {
	/// Returns true if retrying the same load might succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(
			self,
			LoadFailure::Http(_)
				| LoadFailure::Io { .. }
				| LoadFailure::Status {
					status: 500..=599,
					..
				}
		)
	}
}

/// Errors raised while assembling a custom registry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
	#[error("Duplicate locale code: {0}")]
	DuplicateCode(String),

	#[error("Default locale {0} is not registered")]
	MissingDefault(String),

	#[error("Default locale set to both {first} and {second}")]
	ConflictingDefault { first: String, second: String },
}

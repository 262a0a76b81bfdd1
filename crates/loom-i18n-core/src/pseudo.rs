// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pseudo-localization.
//!
//! The pseudo-locale exists to make untranslated UI obvious. Every string is
//! rewritten so that it is still readable but visibly different:
//!
//! - ASCII letters are swapped for accented look-alikes
//! - `~` padding grows the text by roughly 40% to expose truncation
//! - the result is bracketed so clipped strings are easy to spot
//!
//! Interpolation placeholders (`{{name}}`) and markup tags (`<b>`, `</1>`)
//! are copied through untouched so the rendered output still works.

use crate::bundle::ResourceBundle;

const PADDING: char = '~';

/// Pseudo-localize a single string. The empty string is returned unchanged.
///
/// ```
/// use loom_i18n_core::pseudo_localize;
///
/// assert_eq!(pseudo_localize("Save"), "[Šåṽé~~]");
/// assert_eq!(pseudo_localize("Hi {{name}}"), "[Ĥí {{name}}~~]");
/// ```
pub fn pseudo_localize(input: &str) -> String {
	if input.is_empty() {
		return String::new();
	}

	let mut out = String::with_capacity(input.len() * 2 + 2);
	let mut transformed = 0usize;
	let mut rest = input;

	out.push('[');
	while let Some(c) = rest.chars().next() {
		if let Some(len) = protected_span(rest) {
			out.push_str(&rest[..len]);
			rest = &rest[len..];
			continue;
		}

		out.push(accent(c));
		transformed += 1;
		rest = &rest[c.len_utf8()..];
	}

	let padding = (transformed * 2).div_ceil(5);
	out.extend(std::iter::repeat(PADDING).take(padding));
	out.push(']');
	out
}

/// Pseudo-localize every value of a bundle, keeping its keys.
pub fn pseudo_localize_bundle(bundle: &ResourceBundle) -> ResourceBundle {
	bundle.map_values(pseudo_localize)
}

/// Byte length of a placeholder or tag starting at the beginning of `s`.
fn protected_span(s: &str) -> Option<usize> {
	if s.starts_with("{{") {
		return s.find("}}").map(|end| end + 2);
	}

	if let Some(tail) = s.strip_prefix('<') {
		let name = tail.strip_prefix('/').unwrap_or(tail);
		let starts_like_tag = name
			.chars()
			.next()
			.is_some_and(|c| c.is_ascii_alphanumeric());
		if starts_like_tag {
			return s.find('>').map(|end| end + 1);
		}
	}

	None
}

fn accent(c: char) -> char {
	match c {
		'a' => 'å',
		'b' => 'ƀ',
		'c' => 'ç',
		'd' => 'ð',
		'e' => 'é',
		'f' => 'ƒ',
		'g' => 'ĝ',
		'h' => 'ĥ',
		'i' => 'í',
		'j' => 'ĵ',
		'k' => 'ķ',
		'l' => 'ļ',
		'm' => 'ɱ',
		'n' => 'ñ',
		'o' => 'ö',
		'p' => 'þ',
		'q' => 'ǫ',
		'r' => 'ŕ',
		's' => 'š',
		't' => 'ţ',
		'u' => 'û',
		'v' => 'ṽ',
		'w' => 'ŵ',
		'x' => 'ẋ',
		'y' => 'ý',
		'z' => 'ž',
		'A' => 'Å',
		'B' => 'Ɓ',
		'C' => 'Ç',
		'D' => 'Ð',
		'E' => 'É',
		'F' => 'Ƒ',
		'G' => 'Ĝ',
		'H' => 'Ĥ',
		'I' => 'Í',
		'J' => 'Ĵ',
		'K' => 'Ķ',
		'L' => 'Ļ',
		'M' => 'Ṁ',
		'N' => 'Ñ',
		'O' => 'Ö',
		'P' => 'Þ',
		'Q' => 'Ǫ',
		'R' => 'Ŕ',
		'S' => 'Š',
		'T' => 'Ţ',
		'U' => 'Û',
		'V' => 'Ṽ',
		'W' => 'Ŵ',
		'X' => 'Ẋ',
		'Y' => 'Ý',
		'Z' => 'Ž',
		other => other,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_empty_string_unchanged() {
		assert_eq!(pseudo_localize(""), "");
	}

	#[test]
	fn test_accents_and_padding() {
		// 4 transformed chars -> ceil(1.6) = 2 pad chars
		assert_eq!(pseudo_localize("Save"), "[Šåṽé~~]");
		// 1 char -> ceil(0.4) = 1
		assert_eq!(pseudo_localize("a"), "[å~]");
	}

	#[test]
	fn test_non_letters_pass_through() {
		assert_eq!(pseudo_localize("1 + 2"), "[1 + 2~~]");
	}

	#[test]
	fn test_interpolation_preserved() {
		let out = pseudo_localize("Hello {{name}}, you have {{count}} alerts");
		assert!(out.contains("{{name}}"));
		assert!(out.contains("{{count}}"));
		assert!(out.starts_with("[Ĥéļļö "));
	}

	#[test]
	fn test_tags_preserved() {
		let out = pseudo_localize("Click <0>here</0> or <strong>there</strong>");
		assert!(out.contains("<0>"));
		assert!(out.contains("</0>"));
		assert!(out.contains("<strong>"));
		assert!(out.contains("</strong>"));
		assert!(out.contains("ĥéŕé"));
	}

	#[test]
	fn test_lone_angle_bracket_is_text() {
		assert_eq!(pseudo_localize("a < b"), "[å < ƀ~~]");
	}

	#[test]
	fn test_unterminated_placeholder_is_text() {
		let out = pseudo_localize("{{oops");
		assert!(out.contains("{{öö"));
	}

	#[test]
	fn test_bundle_keys_kept() {
		let mut bundle = ResourceBundle::new();
		bundle.insert("common.save", "Save");
		bundle.insert("common.empty", "");

		let pseudo = pseudo_localize_bundle(&bundle);
		assert_eq!(pseudo.get("common.save"), Some("[Šåṽé~~]"));
		assert_eq!(pseudo.get("common.empty"), Some(""));
		assert_eq!(pseudo.len(), 2);
	}

	proptest! {
		#[test]
		fn output_is_bracketed_and_longer(s in "[a-zA-Z ]{1,40}") {
			let out = pseudo_localize(&s);
			prop_assert!(out.starts_with('['));
			prop_assert!(out.ends_with(']'));
			prop_assert!(out.chars().count() > s.chars().count() + 2);
		}
	}
}

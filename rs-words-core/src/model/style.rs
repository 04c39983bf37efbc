use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WordsError;

/// Per-word case transform applied by the formatter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WordStyle {
	/// `all the world`
	#[default]
	Lowercase,
	/// `ALL THE WORLD`
	Uppercase,
	/// `All The World`
	#[serde(alias = "capitalized")]
	Capitalize,
	/// `all The World`
	Mixedcase,
	/// `All The World`, kept for the historical camelcase format
	Camelcase,
}

impl WordStyle {
	/// Every recognized style, in canonical order.
	pub const ALL: [WordStyle; 5] = [
		WordStyle::Lowercase,
		WordStyle::Uppercase,
		WordStyle::Capitalize,
		WordStyle::Mixedcase,
		WordStyle::Camelcase,
	];

	/// Canonical name of the style.
	pub fn name(self) -> &'static str {
		match self {
			WordStyle::Lowercase => "lowercase",
			WordStyle::Uppercase => "uppercase",
			WordStyle::Capitalize => "capitalize",
			WordStyle::Mixedcase => "mixedcase",
			WordStyle::Camelcase => "camelcase",
		}
	}

	/// Canonical names of every recognized style.
	pub fn names() -> Vec<String> {
		Self::ALL.iter().map(|style| style.name().to_owned()).collect()
	}

	/// Transforms the word at `index` within its sequence.
	pub fn apply(self, index: usize, word: &str) -> String {
		match self {
			WordStyle::Lowercase => word.to_lowercase(),
			WordStyle::Uppercase => word.to_uppercase(),
			WordStyle::Capitalize | WordStyle::Camelcase => capitalize(word),
			WordStyle::Mixedcase if index == 0 => word.to_lowercase(),
			WordStyle::Mixedcase => capitalize(word),
		}
	}

	/// Separator used when the style is given alone in a compound format name.
	fn bare_separator(self) -> &'static str {
		match self {
			WordStyle::Mixedcase | WordStyle::Camelcase => "",
			_ => " ",
		}
	}
}

/// First character uppercase, remainder lowercase.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}

impl fmt::Display for WordStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for WordStyle {
	type Err = WordsError;

	/// Parses a style name, ignoring ASCII case.
	///
	/// `capitalized` is accepted as an alias of `capitalize`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lower = s.trim().to_ascii_lowercase();
		if lower == "capitalized" {
			return Ok(WordStyle::Capitalize);
		}
		Self::ALL
			.into_iter()
			.find(|style| style.name() == lower)
			.ok_or_else(|| WordsError::InvalidWordStyle { style: s.to_owned(), allowed: Self::names() })
	}
}

/// A `(style, separator)` pair describing how a sequence is rendered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormatSpec {
	pub style: WordStyle,
	pub separator: String,
}

/// Compound prefixes that bundle a separator into a format name.
const COMPOUND_PREFIXES: [(&str, &str); 4] =
	[("hyphenated", "-"), ("hyphenate", "-"), ("underscored", "_"), ("underscore", "_")];

impl FormatSpec {
	pub fn new(style: WordStyle, separator: impl Into<String>) -> Self {
		Self { style, separator: separator.into() }
	}

	/// Decomposes a compound format name into a `(style, separator)` pair.
	///
	/// # Accepted names
	/// - `<style>`: separator is a space, or nothing for `mixedcase`/`camelcase`
	/// - `hyphenated` / `underscored`: lowercase words joined by `-` / `_`
	/// - `hyphenated-<style>` / `underscored-<style>`
	///
	/// `hyphenate` and `underscore` are accepted as shorter prefixes.
	///
	/// # Errors
	/// Returns `WordsError::InvalidWordStyle` naming the full compound name.
	pub fn from_compound(name: &str) -> Result<Self, WordsError> {
		let lower = name.trim().to_ascii_lowercase();

		for (prefix, separator) in COMPOUND_PREFIXES {
			let Some(rest) = lower.strip_prefix(prefix) else {
				continue;
			};
			let style = match rest {
				"" => Ok(WordStyle::Lowercase),
				_ => match rest.strip_prefix('-') {
					Some(style) => style.parse::<WordStyle>(),
					None => continue,
				},
			};
			return style
				.map(|style| Self::new(style, separator))
				.map_err(|_| Self::invalid_compound(name));
		}

		lower
			.parse::<WordStyle>()
			.map(|style| Self::new(style, style.bare_separator()))
			.map_err(|_| Self::invalid_compound(name))
	}

	/// Every compound name understood by `from_compound`, without the short prefixes.
	pub fn compound_names() -> Vec<String> {
		let mut names = WordStyle::names();
		for prefix in ["hyphenated", "underscored"] {
			names.push(prefix.to_owned());
			names.extend(WordStyle::ALL.iter().map(|style| format!("{prefix}-{style}")));
		}
		names
	}

	fn invalid_compound(name: &str) -> WordsError {
		WordsError::InvalidWordStyle { style: name.to_owned(), allowed: Self::compound_names() }
	}

	/// Formats `text` with this specification.
	pub fn format(&self, text: &str) -> String {
		super::format::format_string(text, self.style, &self.separator)
	}
}

impl Default for FormatSpec {
	fn default() -> Self {
		Self::new(WordStyle::default(), " ")
	}
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::dictionary::Dictionary;
use crate::model::style::{FormatSpec, WordStyle};

/// Defaults read from a YAML configuration file.
///
/// Every field is optional; command-line flags override whatever is set here.
///
/// ```yaml
/// dictionary: /usr/share/rs-words/en_US.dict
/// wordstyle: capitalize
/// separator: "-"
/// count: 3
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
	/// Word list to load instead of the bundled one.
	pub dictionary: Option<PathBuf>,
	pub wordstyle: Option<WordStyle>,
	pub separator: Option<String>,
	/// Number of words when no initials are requested.
	pub count: Option<usize>,
	/// Any 64-bit integer, negative values included.
	pub seed: Option<i64>,
}

impl GeneratorConfig {
	/// Parses a configuration file.
	///
	/// # Errors
	/// - `WordsError::Io` if the file can't be read.
	/// - `WordsError::Config` on invalid YAML, unknown keys or unknown styles.
	pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
		let s = std::fs::read_to_string(path)?;
		Ok(serde_yaml::from_str(&s)?)
	}

	/// Loads the configured dictionary, or the bundled one.
	pub fn load_dictionary(&self) -> Result<Dictionary> {
		match &self.dictionary {
			Some(path) => Dictionary::load(path),
			None => Ok(Dictionary::bundled()),
		}
	}

	/// Output format from the configured style and separator.
	pub fn format_spec(&self) -> FormatSpec {
		let default = FormatSpec::default();
		FormatSpec::new(
			self.wordstyle.unwrap_or(default.style),
			self.separator.clone().unwrap_or(default.separator),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::WordsError;

	#[test]
	fn empty_file_gives_defaults() {
		let config: GeneratorConfig = serde_yaml::from_str("{}").unwrap();
		assert_eq!(config, GeneratorConfig::default());
		assert_eq!(config.format_spec(), FormatSpec::default());
	}

	#[test]
	fn reads_every_field() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("rs-words.yaml");
		std::fs::write(
			&path,
			"dictionary: words.dict\nwordstyle: mixedcase\nseparator: ''\ncount: 4\nseed: 42\n",
		)
		.unwrap();

		let config = GeneratorConfig::from_yaml_file(&path).unwrap();
		assert_eq!(config.dictionary, Some(PathBuf::from("words.dict")));
		assert_eq!(config.count, Some(4));
		assert_eq!(config.seed, Some(42));

		std::fs::write(&path, "seed: -7\n").unwrap();
		assert_eq!(GeneratorConfig::from_yaml_file(&path).unwrap().seed, Some(-7));
		assert_eq!(config.format_spec(), FormatSpec::new(WordStyle::Mixedcase, ""));
	}

	#[test]
	fn unknown_keys_and_styles_are_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.yaml");

		std::fs::write(&path, "colour: blue\n").unwrap();
		assert!(matches!(GeneratorConfig::from_yaml_file(&path), Err(WordsError::Config(_))));

		std::fs::write(&path, "wordstyle: copy\n").unwrap();
		assert!(matches!(GeneratorConfig::from_yaml_file(&path), Err(WordsError::Config(_))));
	}

	#[test]
	fn missing_dictionary_surfaces() {
		let config = GeneratorConfig { dictionary: Some("nowhere.dict".into()), ..Default::default() };
		assert!(matches!(config.load_dictionary(), Err(WordsError::DictionaryNotFound { .. })));
		assert!(!GeneratorConfig::default().load_dictionary().unwrap().is_empty());
	}
}

//! Error types for the rs-words crates.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum WordsError {
	/// The dictionary file could not be opened or read.
	#[error("Could not find the dictionary at {}", path.display())]
	DictionaryNotFound {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The dictionary holds no word starting with the requested letter.
	#[error("Dictionary does not contain a word starting with '{0}'")]
	NoWordForLetter(char),

	/// The requested word style is not one of the recognized styles.
	#[error("Invalid wordstyle '{style}', allowed styles are {}", allowed.join(", "))]
	InvalidWordStyle { style: String, allowed: Vec<String> },

	/// An unconstrained draw was attempted on a dictionary without words.
	#[error("Dictionary is empty, no word can be drawn")]
	EmptyDictionary,

	/// The configuration file is not valid YAML or holds unknown keys.
	#[error("Invalid configuration: {0}")]
	Config(#[from] serde_yaml::Error),

	/// Any other I/O failure (writing a cleaned dictionary, statistics...).
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `WordsError` type.
pub type Result<T> = std::result::Result<T, WordsError>;

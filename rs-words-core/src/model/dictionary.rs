use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsError};
use crate::io::{read_file, write_lines};

/// Default English word list compiled into the crate.
const BUNDLED_WORDS: &str = include_str!("../../dictionaries/en_US.dict");

/// Words grouped by their first (lowercase) character.
///
/// # Invariants
/// - Every word stored under a key starts with that key
/// - All words are trimmed and lowercased
/// - No key maps to an empty list
/// - Keys are iterated in order, so random draws over them are reproducible
///   for a given seed
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
	words: BTreeMap<char, Vec<String>>,
}

/// Per-letter word counts before and after a cleaning pass.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
	/// Number of words per letter before deduplication.
	pub old: BTreeMap<char, usize>,
	/// Number of words per letter after deduplication.
	pub new: BTreeMap<char, usize>,
	/// Total number of duplicates removed.
	pub removed: usize,
}

impl Dictionary {
	/// Loads a dictionary from a file, one word per line.
	///
	/// # Errors
	/// Returns `WordsError::DictionaryNotFound` if the file can't be opened or read.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let lines = read_file(path).map_err(|source| WordsError::DictionaryNotFound {
			path: path.to_path_buf(),
			source,
		})?;
		let dictionary = Self::from_lines(lines);
		log::debug!(
			"loaded {} words under {} letters from {}",
			dictionary.word_count(),
			dictionary.len(),
			path.display()
		);
		Ok(dictionary)
	}

	/// Returns the default word list shipped with the crate.
	pub fn bundled() -> Self {
		Self::from_lines(BUNDLED_WORDS.lines())
	}

	/// Builds a dictionary from an already opened line source.
	///
	/// # Errors
	/// Returns `WordsError::Io` if reading a line fails.
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
		let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
		Ok(Self::from_lines(lines))
	}

	/// Builds a dictionary from raw lines.
	///
	/// # Behavior
	/// - Each line is trimmed and lowercased, then appended under its first character.
	/// - Blank lines are skipped.
	/// - Input order is preserved within each letter; nothing is sorted or deduplicated.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut words: BTreeMap<char, Vec<String>> = BTreeMap::new();
		for line in lines {
			let word = line.as_ref().trim().to_lowercase();
			let Some(first) = word.chars().next() else {
				continue;
			};
			words.entry(first).or_default().push(word);
		}
		Self { words }
	}

	/// Iterates over the letters that have at least one word, in order.
	pub fn letters(&self) -> impl ExactSizeIterator<Item = char> + '_ {
		self.words.keys().copied()
	}

	/// Returns the words starting with `letter`, or `None` if there are none.
	///
	/// `letter` is expected lowercase; use `selector::random_word` for
	/// case-insensitive lookups.
	pub fn words(&self, letter: char) -> Option<&[String]> {
		self.words.get(&letter).map(Vec::as_slice)
	}

	/// Number of distinct starting letters.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Total number of words across all letters.
	pub fn word_count(&self) -> usize {
		self.words.values().map(Vec::len).sum()
	}

	/// Deduplicates each letter and sorts all words globally.
	///
	/// Returns the sorted word list together with the per-letter counts
	/// before and after deduplication.
	pub fn cleaned(&self) -> (Vec<String>, CleanReport) {
		let mut report = CleanReport::default();
		let mut sorted_words = Vec::with_capacity(self.word_count());

		for (letter, words) in &self.words {
			let mut unique = words.clone();
			unique.sort();
			unique.dedup();

			report.old.insert(*letter, words.len());
			report.new.insert(*letter, unique.len());
			report.removed += words.len() - unique.len();
			sorted_words.extend(unique);
		}

		sorted_words.sort();
		(sorted_words, report)
	}

	/// Loads `path`, cleans it with `cleaned` and rewrites it in place.
	///
	/// # Errors
	/// - `WordsError::DictionaryNotFound` if the file can't be read.
	/// - `WordsError::Io` if the file can't be rewritten.
	pub fn clean_file<P: AsRef<Path>>(path: P) -> Result<CleanReport> {
		let path = path.as_ref();
		let (words, report) = Self::load(path)?.cleaned();
		write_lines(path, &words)?;
		log::info!("removed {} duplicate words from {}", report.removed, path.display());
		Ok(report)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const WORDS_ALL: [&str; 26] = [
		"able", "boson", "cannon", "dog", "exxon", "foggy", "grand", "housing", "interpreted",
		"joking", "king", "lemon", "michael", "nixon", "opening", "pricing", "queen", "respected",
		"stuffing", "travis", "unopened", "very", "washington", "xylo", "yocto", "zebra",
	];

	#[test]
	fn every_letter_gets_a_key() {
		let dictionary = Dictionary::from_lines(WORDS_ALL);
		assert_eq!(dictionary.len(), 26);
		assert_eq!(dictionary.word_count(), 26);
		assert_eq!(dictionary.words('a').unwrap()[0], "able");
		for letter in dictionary.letters() {
			assert!(dictionary.words(letter).unwrap().iter().all(|w| w.starts_with(letter)));
		}
	}

	#[test]
	fn sparse_dictionary_only_has_present_letters() {
		let dictionary = Dictionary::from_lines(["able", "exxon", "washington", "xylophone"]);
		assert_eq!(dictionary.letters().collect::<String>(), "aewx");
		assert!(dictionary.words('c').is_none());
	}

	#[test]
	fn lines_are_trimmed_lowercased_and_keep_order() {
		let dictionary = Dictionary::from_lines(["  Zebra ", "ZOO", "apple\t", "zinc"]);
		assert_eq!(dictionary.words('z').unwrap(), ["zebra", "zoo", "zinc"]);
		assert_eq!(dictionary.words('a').unwrap(), ["apple"]);
	}

	#[test]
	fn blank_lines_are_skipped() {
		let dictionary = Dictionary::from_lines(["able", "", "   ", "boson", "\t"]);
		assert_eq!(dictionary.len(), 2);
		assert_eq!(dictionary.word_count(), 2);
	}

	#[test]
	fn load_reads_from_disk() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("well-formatted.dict");
		std::fs::write(&path, WORDS_ALL.join("\n")).unwrap();

		let dictionary = Dictionary::load(&path).unwrap();
		assert_eq!(dictionary, Dictionary::from_lines(WORDS_ALL));
	}

	#[test]
	fn load_missing_file_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("your_mom.dict");

		match Dictionary::load(&path) {
			Err(WordsError::DictionaryNotFound { path: reported, .. }) => assert_eq!(reported, path),
			other => panic!("expected DictionaryNotFound, got {other:?}"),
		}
	}

	#[test]
	fn from_reader_matches_from_lines() {
		let source = "able\nBoson\n\ncannon\n";
		let dictionary = Dictionary::from_reader(source.as_bytes()).unwrap();
		assert_eq!(dictionary, Dictionary::from_lines(["able", "boson", "cannon"]));
	}

	#[test]
	fn bundled_dictionary_is_well_formed() {
		let dictionary = Dictionary::bundled();
		assert!(!dictionary.is_empty());
		for letter in dictionary.letters() {
			let words = dictionary.words(letter).unwrap();
			assert!(!words.is_empty());
			assert!(words.iter().all(|w| w.starts_with(letter) && *w == w.to_lowercase()));
		}
	}

	#[test]
	fn cleaned_removes_duplicates_and_sorts() {
		let dictionary = Dictionary::from_lines(["boson", "able", "apple", "able", "boson", "able"]);
		let (words, report) = dictionary.cleaned();

		assert_eq!(words, ["able", "apple", "boson"]);
		assert_eq!(report.old[&'a'], 4);
		assert_eq!(report.new[&'a'], 2);
		assert_eq!(report.old[&'b'], 2);
		assert_eq!(report.new[&'b'], 1);
		assert_eq!(report.removed, 3);
	}

	#[test]
	fn clean_file_rewrites_in_place() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("dirty.dict");
		std::fs::write(&path, "zebra\nAble\nzebra\nable\n").unwrap();

		let report = Dictionary::clean_file(&path).unwrap();

		assert_eq!(report.removed, 2);
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "able\nzebra\n");
	}
}

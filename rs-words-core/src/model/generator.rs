use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::dictionary::Dictionary;
use super::request::SelectionRequest;
use super::sequence::build_sequence;
use super::style::FormatSpec;
use crate::error::Result;

/// Seed strategy for the generator.
///
/// # Variants
/// - `Fixed(u64)`: reproducible output, the same seed always gives the same sequence.
/// - `Random`: a seed is drawn once from the thread-local entropy source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seed {
	Fixed(u64),
	#[default]
	Random,
}

impl Seed {
	/// Returns the concrete seed value, drawing one if needed.
	pub fn resolve(self) -> u64 {
		match self {
			Seed::Fixed(seed) => seed,
			Seed::Random => rand::rng().random(),
		}
	}

	/// Fixed seed from a signed integer.
	///
	/// The value is reinterpreted bit for bit (`seed as u64`), so `-1` seeds
	/// with `u64::MAX` and `WordGenerator::signed_seed` gives `-1` back.
	pub fn from_signed(seed: i64) -> Self {
		Seed::Fixed(seed as u64)
	}
}

impl From<Option<u64>> for Seed {
	fn from(seed: Option<u64>) -> Self {
		seed.map_or(Seed::Random, Seed::Fixed)
	}
}

/// High-level word-sequence generator.
///
/// # Responsibilities
/// - Own the dictionary and the output format
/// - Own a single seeded pseudo-random generator, seeded exactly once
/// - Build then format sequences for a `SelectionRequest`
///
/// Two generators built from the same seed, dictionary and format produce
/// byte-identical output for the same sequence of requests.
#[derive(Debug)]
pub struct WordGenerator {
	dictionary: Dictionary,
	format: FormatSpec,
	seed: u64,
	rng: StdRng,
}

impl WordGenerator {
	/// Creates a generator, resolving and applying `seed`.
	pub fn new(dictionary: Dictionary, format: FormatSpec, seed: Seed) -> Self {
		let seed = seed.resolve();
		log::debug!("seeding generator with {seed}");
		Self { dictionary, format, seed, rng: StdRng::seed_from_u64(seed) }
	}

	/// The seed actually used by this generator.
	pub fn seed(&self) -> u64 {
		self.seed
	}

	/// The seed as a signed integer, inverse of `Seed::from_signed`.
	///
	/// Feeding this value back through `Seed::from_signed` replays the generator.
	pub fn signed_seed(&self) -> i64 {
		self.seed as i64
	}

	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}

	pub fn format_spec(&self) -> &FormatSpec {
		&self.format
	}

	/// Builds and formats one sequence.
	///
	/// # Errors
	/// - `WordsError::NoWordForLetter` when an initial has no candidates.
	/// - `WordsError::EmptyDictionary` when counting words from an empty dictionary.
	pub fn generate(&mut self, request: &SelectionRequest) -> Result<String> {
		let sequence = build_sequence(&self.dictionary, &mut self.rng, request)?;
		Ok(self.format.format(&sequence))
	}

	/// Shortcut for `generate(&SelectionRequest::Count(count))`.
	pub fn for_count(&mut self, count: usize) -> Result<String> {
		self.generate(&SelectionRequest::Count(count))
	}

	/// Shortcut for `generate(&SelectionRequest::Initials(..))`.
	pub fn for_initials(&mut self, initials: &str) -> Result<String> {
		self.generate(&SelectionRequest::Initials(initials.to_owned()))
	}
}

use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};

use super::dictionary::Dictionary;
use crate::error::{Result, WordsError};

/// Draws one random word from `dictionary`.
///
/// # Behavior
/// - Without `starting_letter`, a letter is first chosen uniformly among
///   the letters present, then a word uniformly among that letter's words.
/// - With `starting_letter`, the lookup is case-insensitive and only the
///   word draw is random.
///
/// Both draws consume `rng`, so results are reproducible for a seeded generator.
///
/// # Errors
/// - `WordsError::NoWordForLetter` if no word starts with `starting_letter`.
/// - `WordsError::EmptyDictionary` if there is nothing to draw from.
pub fn random_word<'d, R>(
	dictionary: &'d Dictionary,
	rng: &mut R,
	starting_letter: Option<char>,
) -> Result<&'d str>
where
	R: Rng + ?Sized,
{
	let letter = match starting_letter {
		Some(letter) => letter,
		None => dictionary.letters().choose(rng).ok_or(WordsError::EmptyDictionary)?,
	};

	let key = letter.to_lowercase().next().unwrap_or(letter);
	dictionary
		.words(key)
		.and_then(|words| words.choose(rng))
		.map(String::as_str)
		.ok_or(WordsError::NoWordForLetter(letter))
}

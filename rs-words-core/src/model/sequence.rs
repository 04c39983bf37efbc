use rand::Rng;

use super::dictionary::Dictionary;
use super::request::SelectionRequest;
use super::selector::random_word;
use crate::error::Result;

/// Builds a space-separated word sequence for `request`.
///
/// - `Count(n)` draws `n` unconstrained words, `Count(0)` yields `""`.
/// - `Initials(s)` draws one word per character of `s`, in order; `""` yields `""`.
///
/// # Errors
/// Fails as a whole on the first failing draw (typically
/// `WordsError::NoWordForLetter`); no partial sequence is returned.
pub fn build_sequence<R>(dictionary: &Dictionary, rng: &mut R, request: &SelectionRequest) -> Result<String>
where
	R: Rng + ?Sized,
{
	let words = match request {
		SelectionRequest::Count(count) => (0..*count)
			.map(|_| random_word(dictionary, rng, None))
			.collect::<Result<Vec<_>>>()?,
		SelectionRequest::Initials(initials) => initials
			.chars()
			.map(|letter| random_word(dictionary, rng, Some(letter)))
			.collect::<Result<Vec<_>>>()?,
	};

	Ok(words.join(" ").trim().to_owned())
}

use super::style::WordStyle;
use crate::error::Result;

/// Restyles a space-separated string.
///
/// Splits `text` on single spaces, applies `style` to every word, then
/// joins them back with `separator` (any string, possibly empty).
///
/// Pure: never touches randomness or I/O.
pub fn format_string(text: &str, style: WordStyle, separator: &str) -> String {
	text.split(' ')
		.enumerate()
		.map(|(index, word)| style.apply(index, word))
		.collect::<Vec<_>>()
		.join(separator)
}

/// Same as `format_string`, parsing the style name first.
///
/// # Errors
/// Returns `WordsError::InvalidWordStyle` if `style` is not recognized.
pub fn format_with(text: &str, style: &str, separator: &str) -> Result<String> {
	Ok(format_string(text, style.parse()?, separator))
}

/// Number of words produced when neither a count nor initials are requested.
pub const DEFAULT_COUNT: usize = 2;

/// Strategy used to pick the words of a sequence.
///
/// # Variants
/// - `Count(n)`: `n` unconstrained random words.
/// - `Initials(s)`: one word per character of `s`, each starting with that character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionRequest {
	Count(usize),
	Initials(String),
}

impl SelectionRequest {
	/// Builds a request from optional count and initials.
	///
	/// Initials take precedence when both are given; the count is then
	/// ignored and an informational notice is logged. The notice fires for
	/// any explicit count, `Some(0)` included, and for empty initials too.
	/// With neither, `DEFAULT_COUNT` words are requested.
	pub fn resolve(count: Option<usize>, initials: Option<String>) -> Self {
		match (count, initials) {
			(Some(count), Some(initials)) => {
				log::info!("count ({count}) and initials ({initials:?}) are mutually exclusive, using initials");
				Self::Initials(initials)
			}
			(_, Some(initials)) => Self::Initials(initials),
			(Some(count), None) => Self::Count(count),
			(None, None) => Self::default(),
		}
	}

	/// Number of words this request will produce.
	pub fn len(&self) -> usize {
		match self {
			Self::Count(count) => *count,
			Self::Initials(initials) => initials.chars().count(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for SelectionRequest {
	fn default() -> Self {
		Self::Count(DEFAULT_COUNT)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_two_words() {
		assert_eq!(SelectionRequest::resolve(None, None), SelectionRequest::Count(2));
	}

	#[test]
	fn initials_win_over_count() {
		let request = SelectionRequest::resolve(Some(4), Some("MHL".to_owned()));
		assert_eq!(request, SelectionRequest::Initials("MHL".to_owned()));
		assert_eq!(request.len(), 3);
	}

	#[test]
	fn zero_count_still_yields_to_initials() {
		let request = SelectionRequest::resolve(Some(0), Some("ab".to_owned()));
		assert_eq!(request, SelectionRequest::Initials("ab".to_owned()));
	}

	#[test]
	fn explicit_zero_count_is_kept() {
		let request = SelectionRequest::resolve(Some(0), None);
		assert_eq!(request, SelectionRequest::Count(0));
		assert!(request.is_empty());
	}
}

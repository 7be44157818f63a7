use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

use crate::error::{NgramError, NgramResult};
use crate::model::key::Token;

/// Default longest n-gram length bound.
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Token count from which each n-gram length is counted on its own thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 50_000;

/// Set of tokens excluded from phrase detection.
///
/// An n-gram made only of stopwords is dropped by the filter. Matching is
/// exact: lowercase the text (see `WordTokenizer::with_lowercase`) when
/// using the built-in lowercase lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stopwords {
	words: HashSet<Token>,
}

impl Stopwords {
	/// Creates an empty set (stopword filtering disabled).
	pub fn empty() -> Self {
		Self::default()
	}

	/// Creates a set from a custom list.
	pub fn from_list(words: &[&str]) -> Self {
		Self { words: words.iter().map(|w| (*w).to_owned()).collect() }
	}

	/// Loads the built-in list of a language.
	///
	/// Supported: en, fr, de, es, it, pt, nl. Unknown codes fall back to English.
	pub fn for_language(language: &str) -> Self {
		let lang = match language.to_lowercase().as_str() {
			"en" | "english" => LANGUAGE::English,
			"fr" | "french" => LANGUAGE::French,
			"de" | "german" => LANGUAGE::German,
			"es" | "spanish" => LANGUAGE::Spanish,
			"it" | "italian" => LANGUAGE::Italian,
			"pt" | "portuguese" => LANGUAGE::Portuguese,
			"nl" | "dutch" => LANGUAGE::Dutch,
			other => {
				log::warn!("No stopword list for language '{other}', using English");
				LANGUAGE::English
			}
		};

		Self { words: get(lang).iter().map(|s| s.to_string()).collect() }
	}

	pub fn add(&mut self, word: &str) {
		self.words.insert(word.to_owned());
	}

	pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
		self.words.extend(words.into_iter().map(str::to_owned));
	}

	pub fn contains(&self, token: &str) -> bool {
		self.words.contains(token)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

/// Parameters of one forest construction.
///
/// # Invariants
/// - `max_length` is always >= 1
#[derive(Clone, Debug)]
pub struct TreeOptions {
	/// Longest n-gram length bound (counting stops at `max_length - 1`).
	max_length: usize,

	/// Tokens that cannot form an n-gram on their own.
	pub stopwords: Stopwords,

	/// Token count from which counting runs one thread per n-gram length.
	pub parallel_threshold: usize,
}

impl Default for TreeOptions {
	fn default() -> Self {
		Self {
			max_length: DEFAULT_MAX_LENGTH,
			stopwords: Stopwords::empty(),
			parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
		}
	}
}

impl TreeOptions {
	/// Creates options with the given length bound and stopwords.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `max_length < 1`.
	pub fn new(max_length: usize, stopwords: Stopwords) -> NgramResult<Self> {
		let mut options = Self { stopwords, ..Self::default() };
		options.set_max_length(max_length)?;
		Ok(options)
	}

	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Sets the longest n-gram length bound.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `max_length < 1`; the options are left unchanged.
	pub fn set_max_length(&mut self, max_length: usize) -> NgramResult<()> {
		validate_max_length(max_length)?;
		self.max_length = max_length;
		Ok(())
	}
}

/// Rejects a length bound below 1.
pub(crate) fn validate_max_length(max_length: usize) -> NgramResult<()> {
	if max_length < 1 {
		return Err(NgramError::InvalidArgument(format!("max_length must be >= 1, got {max_length}")));
	}
	Ok(())
}

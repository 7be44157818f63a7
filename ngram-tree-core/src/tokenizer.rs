use unicode_segmentation::UnicodeSegmentation;

use crate::model::key::Token;

/// Turns raw text into an ordered sequence of tokens.
///
/// Implementations must be deterministic: identical input always yields
/// identical tokens. Casing and punctuation policy belong here, the rest
/// of the pipeline only compares tokens by value.
pub trait Tokenizer {
	fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Splits text on Unicode word boundaries.
///
/// Words and punctuation marks become separate tokens, whitespace is
/// dropped: `"Hello, world!"` → `["Hello", ",", "world", "!"]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordTokenizer {
	/// Lowercase every token.
	pub lowercase: bool,
}

impl WordTokenizer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_lowercase(mut self, lowercase: bool) -> Self {
		self.lowercase = lowercase;
		self
	}
}

impl Tokenizer for WordTokenizer {
	fn tokenize(&self, text: &str) -> Vec<Token> {
		text.split_word_bounds()
			.filter(|segment| !segment.trim().is_empty())
			.map(|segment| {
				if self.lowercase {
					segment.to_lowercase()
				} else {
					segment.to_owned()
				}
			})
			.collect()
	}
}

/// Splits text on whitespace only; punctuation stays attached to words.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
	fn tokenize(&self, text: &str) -> Vec<Token> {
		text.split_whitespace().map(str::to_owned).collect()
	}
}

/// Tokenizes `text` with the default `WordTokenizer` (case preserved).
pub fn tokenize(text: &str) -> Vec<Token> {
	WordTokenizer::default().tokenize(text)
}

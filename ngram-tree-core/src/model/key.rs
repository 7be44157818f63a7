use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// A single word or punctuation mark produced by a tokenizer.
pub type Token = String;

/// An ordered, fixed-length sequence of tokens (an n-gram).
///
/// Two keys are equal iff they hold the same tokens in the same order.
/// Keys are immutable once created.
///
/// ## Invariants
/// - A key always holds at least one token
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NgramKey(Vec<Token>);

impl NgramKey {
	/// Creates a key from a non-empty token sequence.
	///
	/// Returns `None` when `tokens` is empty.
	pub fn new(tokens: Vec<Token>) -> Option<Self> {
		if tokens.is_empty() {
			return None;
		}
		Some(Self(tokens))
	}

	/// Builds a key by cloning a non-empty token slice.
	///
	/// Used by the counter on sliding windows, which are never empty.
	pub(crate) fn from_window(window: &[Token]) -> Self {
		debug_assert!(!window.is_empty());
		Self(window.to_vec())
	}

	/// Convenience constructor from string slices, mostly for tests and glue code.
	///
	/// Returns `None` when `words` is empty.
	pub fn from_words(words: &[&str]) -> Option<Self> {
		Self::new(words.iter().map(|w| (*w).to_owned()).collect())
	}

	/// Number of tokens in the key (the `n` of the n-gram).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always `false`; provided for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn tokens(&self) -> &[Token] {
		&self.0
	}

	/// Returns `true` if `other` occurs as a contiguous run inside `self`
	/// and is strictly shorter.
	///
	/// Example (tokens joined by spaces):
	/// - `"the brown dog"` contains `"brown dog"`
	/// - `"brown dog"` does not contain `"the brown dog"`
	/// - a key never contains itself
	pub fn contains(&self, other: &NgramKey) -> bool {
		other.len() < self.len() && self.0.windows(other.len()).any(|window| window == other.tokens())
	}

	/// Iterates over every proper contiguous sub-sequence of the key:
	/// all lengths `1..len`, all offsets, shortest first.
	///
	/// A unigram yields nothing.
	pub fn sub_keys(&self) -> impl Iterator<Item = &[Token]> + '_ {
		(1..self.len()).flat_map(move |n| self.0.windows(n))
	}
}

// Lets tables be probed with token windows without allocating a key.
// Hash stays consistent: a newtype over `Vec<Token>` hashes like `[Token]`.
impl Borrow<[Token]> for NgramKey {
	fn borrow(&self) -> &[Token] {
		&self.0
	}
}

impl fmt::Display for NgramKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(words: &[&str]) -> NgramKey {
		NgramKey::from_words(words).unwrap()
	}

	#[test]
	fn empty_tokens_are_rejected() {
		assert!(NgramKey::new(Vec::new()).is_none());
	}

	#[test]
	fn contains_requires_strictly_shorter_contiguous_run() {
		let long = key(&["the", "brown", "dog"]);
		assert!(long.contains(&key(&["brown", "dog"])));
		assert!(long.contains(&key(&["the"])));
		assert!(!long.contains(&key(&["the", "dog"])));
		assert!(!long.contains(&long.clone()));
		assert!(!key(&["brown", "dog"]).contains(&long));
	}

	#[test]
	fn sub_keys_cover_all_lengths_and_offsets() {
		let long = key(&["a", "b", "c"]);
		let subs: Vec<String> = long.sub_keys().map(|s| s.join(" ")).collect();
		assert_eq!(subs, vec!["a", "b", "c", "a b", "b c"]);
		assert_eq!(key(&["a"]).sub_keys().count(), 0);
	}

	#[test]
	fn display_joins_with_single_spaces() {
		assert_eq!(key(&["the", "cat", "."]).to_string(), "the cat .");
	}
}

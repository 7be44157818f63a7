use crate::builder::build_forest;
use crate::counter::count_ngrams_with_threshold;
use crate::error::NgramResult;
use crate::filter::filter_ngrams;
use crate::model::node::Forest;
use crate::options::{Stopwords, TreeOptions};
use crate::tokenizer::{Tokenizer, WordTokenizer};

/// Builds the n-gram frequency forest of `text`.
///
/// Tokenizes with the default `WordTokenizer` (case preserved), counts
/// every n-gram shorter than `max_length`, filters them against
/// `stopwords` and assembles the survivors into containment trees.
///
/// # Errors
/// Returns `InvalidArgument` if `max_length < 1`, before any processing.
///
/// # Notes
/// - Returns an empty forest (not an error) when no n-gram survives.
/// - Pure: no shared state, concurrent calls need no locking.
pub fn build_ngram_forest(
	text: &str,
	max_length: usize,
	stopwords: &Stopwords,
) -> NgramResult<Forest> {
	let options = TreeOptions::new(max_length, stopwords.clone())?;
	build_forest_with(&WordTokenizer::default(), text, &options)
}

/// Builds the n-gram frequency forest of `text` with a custom tokenizer and options.
///
/// # Errors
/// Returns `InvalidArgument` if the options hold an invalid length bound.
pub fn build_forest_with<T: Tokenizer + ?Sized>(
	tokenizer: &T,
	text: &str,
	options: &TreeOptions,
) -> NgramResult<Forest> {
	let max_length = options.max_length();

	let tokens = tokenizer.tokenize(text);
	log::debug!("Tokenized {} tokens", tokens.len());

	let counted = count_ngrams_with_threshold(&tokens, max_length, options.parallel_threshold)?;
	let filtered = filter_ngrams(&counted, &options.stopwords);
	Ok(build_forest(&filtered, max_length))
}

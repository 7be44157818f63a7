use std::collections::HashSet;

use crate::model::key::{NgramKey, Token};
use crate::model::table::FrequencyTable;
use crate::options::Stopwords;

/// Prunes a counted table down to the informative n-grams.
///
/// Removes, in this order:
/// 1. n-grams made only of stopwords
/// 2. sub-n-grams occurring exactly as often as a longer n-gram containing
///    them (they never occur outside of it, the longer phrase is kept)
/// 3. n-grams occurring once
///
/// Each pass reads a snapshot taken when it starts, so removals inside a
/// pass never influence the rest of that pass.
///
/// # Notes
/// - An empty stopword set disables pass 1 only.
/// - Running the filter on its own output removes nothing.
pub fn filter_ngrams(table: &FrequencyTable, stopwords: &Stopwords) -> FrequencyTable {
	let mut filtered = table.clone();

	let removed = remove_stopword_only(&mut filtered, stopwords);
	log::debug!("Stopword pass removed {removed} n-grams");

	let removed = remove_redundant(&mut filtered);
	log::debug!("Redundancy pass removed {removed} n-grams");

	let removed = remove_singletons(&mut filtered);
	log::debug!("Singleton pass removed {removed} n-grams, {} left", filtered.len());

	filtered
}

/// Pass 1: drops every key whose tokens are all stopwords.
fn remove_stopword_only(table: &mut FrequencyTable, stopwords: &Stopwords) -> usize {
	if stopwords.is_empty() {
		return 0;
	}
	let before = table.len();
	table.retain(|key, _| !key.tokens().iter().all(|token| stopwords.contains(token)));
	before - table.len()
}

/// Pass 2: drops every proper sub-key whose count equals the count of a key containing it.
///
/// Counts are read from the table as it stands before the pass, so a key
/// absorbed by an even longer key still absorbs its own sub-keys.
fn remove_redundant(table: &mut FrequencyTable) -> usize {
	let mut redundant: HashSet<&[Token]> = HashSet::new();
	for (key, count) in table.iter() {
		for sub_key in key.sub_keys() {
			if table.get(sub_key) == count {
				redundant.insert(sub_key);
			}
		}
	}

	let redundant: Vec<NgramKey> = redundant
		.into_iter()
		.filter_map(|tokens| NgramKey::new(tokens.to_vec()))
		.collect();
	for key in &redundant {
		log::trace!("'{key}' only occurs inside a longer n-gram");
		table.remove(key);
	}
	redundant.len()
}

/// Pass 3: drops every key seen fewer than two times.
fn remove_singletons(table: &mut FrequencyTable) -> usize {
	let before = table.len();
	table.retain(|_, count| count >= 2);
	before - table.len()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::counter::count_ngrams;
	use crate::tokenizer::tokenize;

	fn key(words: &[&str]) -> NgramKey {
		NgramKey::from_words(words).unwrap()
	}

	fn counted(text: &str, max_n: usize) -> FrequencyTable {
		count_ngrams(&tokenize(text), max_n).unwrap()
	}

	#[test]
	fn shorter_phrase_with_same_count_is_absorbed() {
		let counts = counted("the cat sat on the mat the cat ran", 3);
		let filtered = filter_ngrams(&counts, &Stopwords::empty());
		assert_eq!(filtered.get(&key(&["the"])), 3);
		assert_eq!(filtered.get(&key(&["the", "cat"])), 2);
		assert!(!filtered.contains_key(&key(&["cat"])));
		assert_eq!(filtered.len(), 2);
	}

	#[test]
	fn stopword_only_ngrams_are_dropped() {
		let filtered = filter_ngrams(&counted("a a a", 4), &Stopwords::from_list(&["a"]));
		assert!(filtered.is_empty());
	}

	#[test]
	fn mixed_ngrams_survive_stopword_pass() {
		let mut table = FrequencyTable::new();
		table.insert(key(&["of"]), 4);
		table.insert(key(&["of", "mice"]), 3);
		table.insert(key(&["mice"]), 5);

		let filtered = filter_ngrams(&table, &Stopwords::from_list(&["of"]));
		assert!(!filtered.contains_key(&key(&["of"])));
		assert_eq!(filtered.get(&key(&["of", "mice"])), 3);
		assert_eq!(filtered.get(&key(&["mice"])), 5);
	}

	#[test]
	fn absorbed_key_still_absorbs_its_own_sub_keys() {
		let mut table = FrequencyTable::new();
		table.insert(key(&["a", "b", "c"]), 4);
		table.insert(key(&["a", "b"]), 4);
		table.insert(key(&["a"]), 6);
		table.insert(key(&["b"]), 4);

		let filtered = filter_ngrams(&table, &Stopwords::empty());
		assert!(!filtered.contains_key(&key(&["a", "b"])));
		assert!(!filtered.contains_key(&key(&["b"])));
		assert_eq!(filtered.get(&key(&["a"])), 6);
		assert_eq!(filtered.get(&key(&["a", "b", "c"])), 4);
	}

	#[test]
	fn singletons_are_dropped() {
		let filtered = filter_ngrams(&counted("x x z", 2), &Stopwords::empty());
		assert_eq!(filtered.get(&key(&["x"])), 2);
		assert!(!filtered.contains_key(&key(&["z"])));
	}

	#[test]
	fn filtering_is_idempotent() {
		let stopwords = Stopwords::from_list(&["the", "on"]);
		let counts = counted("the cat sat on the mat the cat sat on the hat", 5);
		let once = filter_ngrams(&counts, &stopwords);
		let twice = filter_ngrams(&once, &stopwords);
		assert_eq!(once, twice);
	}
}

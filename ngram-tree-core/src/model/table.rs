use std::collections::HashMap;
use std::collections::hash_map;

use super::key::{NgramKey, Token};

/// Occurrence counts of n-grams found in a text.
///
/// The table has no ordering of its own. `most_common` and `of_length`
/// provide the explicit "most frequent first" views used by the filter
/// and the tree builder.
///
/// ## Invariants
/// - Keys are unique
/// - Every stored count is strictly positive
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	counts: HashMap<NgramKey, usize>,
}

impl FrequencyTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the count of `key`, or 0 when it is absent.
	///
	/// Accepts either an `NgramKey` or a borrowed token window.
	pub fn get<Q>(&self, key: &Q) -> usize
	where
		NgramKey: std::borrow::Borrow<Q>,
		Q: std::hash::Hash + Eq + ?Sized,
	{
		self.counts.get(key).copied().unwrap_or(0)
	}

	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		NgramKey: std::borrow::Borrow<Q>,
		Q: std::hash::Hash + Eq + ?Sized,
	{
		self.counts.contains_key(key)
	}

	/// Sets the count of `key`.
	///
	/// A zero count removes the key, keeping counts strictly positive.
	pub fn insert(&mut self, key: NgramKey, count: usize) {
		if count == 0 {
			self.counts.remove(&key);
		} else {
			self.counts.insert(key, count);
		}
	}

	/// Records one more occurrence of the n-gram held in `window`.
	///
	/// Only allocates a key the first time a window is seen.
	pub fn increment(&mut self, window: &[Token]) {
		if let Some(count) = self.counts.get_mut(window) {
			*count += 1;
		} else {
			self.counts.insert(NgramKey::from_window(window), 1);
		}
	}

	/// Removes `key`, returning its previous count (0 when absent).
	pub fn remove<Q>(&mut self, key: &Q) -> usize
	where
		NgramKey: std::borrow::Borrow<Q>,
		Q: std::hash::Hash + Eq + ?Sized,
	{
		self.counts.remove(key).unwrap_or(0)
	}

	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(key, count)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&NgramKey, usize)> {
		self.counts.iter().map(|(k, v)| (k, *v))
	}

	/// Keeps only the entries for which `keep` returns `true`.
	pub fn retain(&mut self, mut keep: impl FnMut(&NgramKey, usize) -> bool) {
		self.counts.retain(|k, v| keep(k, *v));
	}

	/// Merges another table into this one.
	///
	/// Counts of keys present in both tables are summed.
	pub fn merge(&mut self, other: Self) {
		for (key, count) in other.counts {
			*self.counts.entry(key).or_insert(0) += count;
		}
	}

	/// Length of the longest key in the table (0 when empty).
	pub fn max_key_len(&self) -> usize {
		self.counts.keys().map(NgramKey::len).max().unwrap_or(0)
	}

	/// Returns every entry, most frequent first.
	///
	/// Ties are broken by ascending key order so the view is reproducible
	/// regardless of hashing.
	pub fn most_common(&self) -> Vec<(&NgramKey, usize)> {
		let mut entries: Vec<(&NgramKey, usize)> = self.iter().collect();
		entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		entries
	}

	/// Returns the `most_common` view restricted to keys of exactly `n` tokens.
	pub fn of_length(&self, n: usize) -> Vec<(&NgramKey, usize)> {
		let mut entries: Vec<(&NgramKey, usize)> = self.iter().filter(|(k, _)| k.len() == n).collect();
		entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		entries
	}
}

impl FromIterator<(NgramKey, usize)> for FrequencyTable {
	fn from_iter<I: IntoIterator<Item = (NgramKey, usize)>>(iter: I) -> Self {
		let mut table = Self::new();
		for (key, count) in iter {
			table.insert(key, count);
		}
		table
	}
}

impl IntoIterator for FrequencyTable {
	type Item = (NgramKey, usize);
	type IntoIter = hash_map::IntoIter<NgramKey, usize>;

	fn into_iter(self) -> Self::IntoIter {
		self.counts.into_iter()
	}
}

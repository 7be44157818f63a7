use std::cmp::Reverse;

use crate::model::key::NgramKey;
use crate::model::node::{Forest, NgramNode};
use crate::model::table::FrequencyTable;

/// Arena entry for a node under construction.
struct Slot {
	key: NgramKey,
	frequency: usize,
	/// Arena indices, most frequent first.
	children: Vec<usize>,
}

/// Outcome of scanning one level of the tree for a new key.
enum Placement {
	/// This node contains the key, go one level deeper.
	Descend(usize),
	/// The key is already in the tree.
	Duplicate,
	/// Nothing at this level contains the key, attach it here.
	Attach,
}

/// Incrementally assembles a containment forest.
///
/// Nodes live in an index arena: descending into a subtree is a loop over
/// indices, never a recursive call, so deep chains (a token repeated many
/// times) cannot grow the call stack.
///
/// # Notes
/// - Keys must be inserted longest first: a key can only nest under nodes
///   already present.
/// - Each key lands under at most one root, at the deepest node containing it.
#[derive(Default)]
pub struct ForestBuilder {
	slots: Vec<Slot>,
	roots: Vec<usize>,
}

impl ForestBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Places `key` in the forest.
	///
	/// Returns `false` when an equal key is already present (nothing changes).
	pub fn insert(&mut self, key: NgramKey, frequency: usize) -> bool {
		let mut parent: Option<usize> = None;
		loop {
			match self.scan(self.level(parent), &key) {
				Placement::Descend(id) => parent = Some(id),
				Placement::Duplicate => {
					log::trace!("Skipping duplicate n-gram '{key}'");
					return false;
				}
				Placement::Attach => break,
			}
		}

		match parent {
			Some(id) => log::trace!("'{key}' [{frequency}] placed under '{}'", self.slots[id].key),
			None => log::trace!("'{key}' [{frequency}] placed as a root"),
		}

		let id = self.slots.len();
		self.slots.push(Slot { key, frequency, children: Vec::new() });

		// Stable: the new node goes after every sibling at least as frequent.
		let position = self
			.level(parent)
			.partition_point(|sibling| self.slots[*sibling].frequency >= frequency);
		match parent {
			Some(parent) => self.slots[parent].children.insert(position, id),
			None => self.roots.insert(position, id),
		}
		true
	}

	/// Number of nodes placed so far.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Turns the arena into owned trees.
	///
	/// A child is always created after its parent, so walking the arena
	/// backwards finds every child already built.
	pub fn finish(self) -> Forest {
		let mut built: Vec<Option<NgramNode>> = Vec::with_capacity(self.slots.len());
		built.resize_with(self.slots.len(), || None);

		for (id, slot) in self.slots.into_iter().enumerate().rev() {
			let children = slot.children.iter().filter_map(|child| built[*child].take()).collect();
			built[id] = Some(NgramNode::with_children(slot.key, slot.frequency, children));
		}

		let mut roots: Vec<NgramNode> =
			self.roots.iter().filter_map(|root| built[*root].take()).collect();
		// Already ordered, sorting again is a stable no-op.
		roots.sort_by_key(|root| Reverse(root.frequency()));
		Forest::from_roots(roots)
	}

	/// Children of `parent`, or the roots when `parent` is `None`.
	fn level(&self, parent: Option<usize>) -> &[usize] {
		match parent {
			Some(id) => &self.slots[id].children,
			None => &self.roots,
		}
	}

	/// Looks for the first node of `level` containing or equal to `key`.
	fn scan(&self, level: &[usize], key: &NgramKey) -> Placement {
		for id in level {
			let candidate = &self.slots[*id].key;
			if candidate.contains(key) {
				return Placement::Descend(*id);
			}
			if candidate == key {
				return Placement::Duplicate;
			}
		}
		Placement::Attach
	}
}

/// Assembles the n-grams of a filtered table into a containment forest.
///
/// Keys are placed from length `max_length` down to 1, most frequent first
/// within a length (ties by ascending key). A key nests under the deepest
/// node whose key contains it, in the first tree that contains it; a key no
/// tree contains starts a new tree. Keys longer than `max_length` are ignored.
///
/// Roots and children are ordered by descending frequency, equal
/// frequencies keeping their placement order.
pub fn build_forest(table: &FrequencyTable, max_length: usize) -> Forest {
	let longest = max_length.min(table.max_key_len());

	let mut builder = ForestBuilder::new();
	for n in (1..=longest).rev() {
		for (key, frequency) in table.of_length(n) {
			builder.insert(key.clone(), frequency);
		}
	}

	let forest = builder.finish();
	log::debug!("Built {} trees holding {} n-grams", forest.len(), forest.node_count());
	forest
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(words: &[&str]) -> NgramKey {
		NgramKey::from_words(words).unwrap()
	}

	/// Builds a table from space-separated phrases.
	fn table(entries: &[(&str, usize)]) -> FrequencyTable {
		entries
			.iter()
			.map(|(phrase, count)| (key(&phrase.split(' ').collect::<Vec<_>>()), *count))
			.collect()
	}

	#[test]
	fn shorter_keys_nest_under_the_deepest_container() {
		let table = table(&[
			("the black cat", 2),
			("black cat", 3),
			("cat", 5),
			("dog", 4),
		]);
		let forest = build_forest(&table, 3);

		let roots: Vec<String> = forest.roots().iter().map(|r| r.key().to_string()).collect();
		assert_eq!(roots, vec!["dog", "the black cat"]);

		let phrase = &forest.roots()[1];
		assert_eq!(phrase.children().len(), 1);
		let black_cat = &phrase.children()[0];
		assert_eq!(black_cat.key().to_string(), "black cat");
		assert_eq!(black_cat.children()[0].key().to_string(), "cat");
		assert!(black_cat.children()[0].is_leaf());
	}

	#[test]
	fn siblings_are_sorted_by_descending_frequency() {
		let table = table(&[("a b c", 2), ("a", 3), ("c", 7), ("b", 5)]);
		let forest = build_forest(&table, 3);

		let children: Vec<usize> =
			forest.roots()[0].children().iter().map(NgramNode::frequency).collect();
		assert_eq!(children, vec![7, 5, 3]);
	}

	#[test]
	fn equal_frequency_siblings_keep_placement_order() {
		let table = table(&[("dog", 5), ("cat", 5)]);
		let forest = build_forest(&table, 1);
		let roots: Vec<String> = forest.roots().iter().map(|r| r.key().to_string()).collect();
		assert_eq!(roots, vec!["cat", "dog"]);
	}

	#[test]
	fn key_goes_to_first_containing_root_only() {
		let table = table(&[("x y", 4), ("y z", 3), ("y", 9)]);
		let forest = build_forest(&table, 2);

		assert_eq!(forest.len(), 2);
		assert_eq!(forest.node_count(), 3);
		assert_eq!(forest.roots()[0].children()[0].key().to_string(), "y");
		assert!(forest.roots()[1].is_leaf());
	}

	#[test]
	fn duplicates_are_ignored() {
		let mut builder = ForestBuilder::new();
		assert!(builder.insert(key(&["a", "b"]), 3));
		assert!(builder.insert(key(&["a"]), 4));
		assert!(!builder.insert(key(&["a", "b"]), 3));
		assert!(!builder.insert(key(&["a"]), 4));
		assert_eq!(builder.len(), 2);
		assert_eq!(builder.finish().node_count(), 2);
	}

	#[test]
	fn keys_longer_than_max_length_are_ignored() {
		let table = table(&[("a b", 2), ("a", 3)]);
		let forest = build_forest(&table, 1);
		assert_eq!(forest.node_count(), 1);
		assert_eq!(forest.roots()[0].key().to_string(), "a");
	}

	#[test]
	fn deep_chains_are_built_without_recursion() {
		let table: FrequencyTable = (1..=300)
			.map(|n| (NgramKey::new(vec!["a".to_owned(); n]).unwrap(), 302 - n))
			.collect();
		let forest = build_forest(&table, 300);

		assert_eq!(forest.len(), 1);
		let mut depth = 0;
		let mut node = &forest.roots()[0];
		while let Some(child) = node.children().first() {
			assert_eq!(node.children().len(), 1);
			node = child;
			depth += 1;
		}
		assert_eq!(depth, 299);
		assert_eq!(node.key().len(), 1);
	}

	#[test]
	fn empty_table_builds_empty_forest() {
		assert!(build_forest(&FrequencyTable::new(), 5).is_empty());
	}
}

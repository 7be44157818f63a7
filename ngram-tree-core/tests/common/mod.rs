#![allow(dead_code)]

use std::collections::HashSet;

use ngram_tree_core::{Forest, NgramKey, NgramNode};

/// Key from space-separated words.
pub fn key(phrase: &str) -> NgramKey {
	NgramKey::from_words(&phrase.split(' ').collect::<Vec<_>>()).expect("non-empty phrase")
}

/// Keys of the roots, in order, rendered as text.
pub fn root_phrases(forest: &Forest) -> Vec<String> {
	forest.roots().iter().map(|root| root.key().to_string()).collect()
}

/// Checks every structural invariant of a forest:
/// containment, uniqueness, sort order and independent roots.
pub fn assert_forest_invariants(forest: &Forest) {
	assert_sorted(forest.roots(), "roots");

	for (i, a) in forest.roots().iter().enumerate() {
		for (j, b) in forest.roots().iter().enumerate() {
			if i != j {
				assert!(!a.key().contains(b.key()), "root '{}' contains root '{}'", a.key(), b.key());
			}
		}
	}

	let mut seen = HashSet::new();
	for node in forest.nodes() {
		assert!(seen.insert(node.key().clone()), "duplicate key '{}'", node.key());
		assert_sorted(node.children(), &node.key().to_string());
		for child in node.children() {
			assert!(
				child.key().len() < node.key().len(),
				"child '{}' not shorter than '{}'",
				child.key(),
				node.key()
			);
			assert!(
				node.key().tokens().windows(child.key().len()).any(|w| w == child.key().tokens()),
				"child '{}' not contained in '{}'",
				child.key(),
				node.key()
			);
		}
	}
}

fn assert_sorted(level: &[NgramNode], label: &str) {
	for pair in level.windows(2) {
		assert!(
			pair[0].frequency() >= pair[1].frequency(),
			"{label}: '{}' [{}] before '{}' [{}]",
			pair[0].key(),
			pair[0].frequency(),
			pair[1].key(),
			pair[1].frequency()
		);
	}
}

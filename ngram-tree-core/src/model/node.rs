use serde::Serialize;

use super::key::NgramKey;

/// A node of an n-gram containment tree.
///
/// ## Invariants
/// - Every child key is a strict, contiguous sub-sequence of `key`
/// - `children` is non-increasing by `frequency`, equal frequencies kept
///   in insertion order
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NgramNode {
	key: NgramKey,
	/// Copied from the frequency table at construction, never recomputed.
	frequency: usize,
	children: Vec<NgramNode>,
}

impl NgramNode {
	/// Creates a leaf node.
	pub fn new(key: NgramKey, frequency: usize) -> Self {
		Self { key, frequency, children: Vec::new() }
	}

	/// Assembles a node from already ordered children.
	///
	/// Only the tree builder may do this: it guarantees the containment
	/// and ordering invariants.
	pub(crate) fn with_children(key: NgramKey, frequency: usize, children: Vec<NgramNode>) -> Self {
		Self { key, frequency, children }
	}

	pub fn key(&self) -> &NgramKey {
		&self.key
	}

	pub fn frequency(&self) -> usize {
		self.frequency
	}

	pub fn children(&self) -> &[NgramNode] {
		&self.children
	}

	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// Visits this node and all its descendants, depth-first, parents first.
	pub fn descendants(&self) -> impl Iterator<Item = &NgramNode> {
		let mut stack = vec![self];
		std::iter::from_fn(move || {
			let node = stack.pop()?;
			stack.extend(node.children.iter().rev());
			Some(node)
		})
	}
}

/// Ordered collection of containment trees, most frequent root first.
///
/// ## Invariants
/// - No root key is contained in another root key
/// - No key appears twice across all trees
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Forest {
	roots: Vec<NgramNode>,
}

impl Forest {
	pub(crate) fn from_roots(roots: Vec<NgramNode>) -> Self {
		Self { roots }
	}

	pub fn roots(&self) -> &[NgramNode] {
		&self.roots
	}

	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}

	/// Number of trees in the forest.
	pub fn len(&self) -> usize {
		self.roots.len()
	}

	/// Visits every node of every tree, roots in order, depth-first.
	pub fn nodes(&self) -> impl Iterator<Item = &NgramNode> {
		self.roots.iter().flat_map(|root| root.descendants())
	}

	/// Total number of nodes across all trees.
	pub fn node_count(&self) -> usize {
		self.nodes().count()
	}

	/// Finds the node holding `key`, if any.
	pub fn find(&self, key: &NgramKey) -> Option<&NgramNode> {
		self.nodes().find(|node| node.key == *key)
	}
}

impl<'a> IntoIterator for &'a Forest {
	type Item = &'a NgramNode;
	type IntoIter = std::slice::Iter<'a, NgramNode>;

	fn into_iter(self) -> Self::IntoIter {
		self.roots.iter()
	}
}

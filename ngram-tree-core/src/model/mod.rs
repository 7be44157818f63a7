//! Data model of the n-gram tree.
//!
//! - Token sequences (`NgramKey`) and their containment relation
//! - Occurrence counts (`FrequencyTable`) with explicit frequency ordering
//! - The containment trees themselves (`NgramNode`, `Forest`)

/// N-gram keys, tokens and the containment test.
pub mod key;

/// Mapping from n-gram key to occurrence count.
///
/// Provides the "most common first" views consumed by the filter and
/// the tree builder.
pub mod table;

/// Tree nodes and the ordered forest of roots.
pub mod node;

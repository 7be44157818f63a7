//! N-gram frequency tree library.
//!
//! This crate summarizes the repeated word sequences of a text as a forest
//! of containment trees, including:
//! - Tokenization of raw text into words and punctuation marks
//! - Counting of every contiguous token run up to a length bound
//! - Filtering of stopword-only, redundant and singleton n-grams
//! - Assembly of the survivors into frequency-ordered containment trees
//! - Rendering to Emacs outline text and nested HTML lists
//!
//! `build_ngram_forest` runs the whole pipeline.

/// Pipeline error type.
pub mod error;

/// N-gram keys, frequency tables and tree nodes.
pub mod model;

/// Text to token conversion.
pub mod tokenizer;

/// Pipeline parameters and stopword sets.
pub mod options;

/// Sliding-window n-gram counting.
pub mod counter;

/// Stopword, redundancy and singleton pruning.
pub mod filter;

/// Containment forest assembly.
pub mod builder;

/// Outline and HTML renderings.
pub mod render;

/// End-to-end entry points.
pub mod pipeline;

pub use error::{NgramError, NgramResult};
pub use model::key::{NgramKey, Token};
pub use model::node::{Forest, NgramNode};
pub use model::table::FrequencyTable;
pub use options::{Stopwords, TreeOptions};
pub use pipeline::{build_forest_with, build_ngram_forest};
pub use render::{render_forest_html, render_forest_outline, render_html, render_outline};
pub use tokenizer::{tokenize, Tokenizer, WhitespaceTokenizer, WordTokenizer};

use std::sync::mpsc;
use std::thread;

use crate::error::NgramResult;
use crate::model::key::Token;
use crate::model::table::FrequencyTable;
use crate::options::{validate_max_length, DEFAULT_PARALLEL_THRESHOLD};

/// Counts every contiguous token run of length `1..max_n` (upper bound excluded).
///
/// Each occurrence at each starting offset adds one to the run's count.
/// Lengths longer than the token sequence produce nothing, and an empty
/// sequence produces an empty table.
///
/// Large inputs (see `DEFAULT_PARALLEL_THRESHOLD`) are counted with one
/// worker per n-gram length.
///
/// # Errors
/// Returns `InvalidArgument` if `max_n < 1`.
pub fn count_ngrams(tokens: &[Token], max_n: usize) -> NgramResult<FrequencyTable> {
	count_ngrams_with_threshold(tokens, max_n, DEFAULT_PARALLEL_THRESHOLD)
}

/// Same as `count_ngrams`, switching to parallel counting once `tokens`
/// holds at least `parallel_threshold` tokens.
pub fn count_ngrams_with_threshold(
	tokens: &[Token],
	max_n: usize,
	parallel_threshold: usize,
) -> NgramResult<FrequencyTable> {
	validate_max_length(max_n)?;

	// Lengths above the token count have no window, skip them.
	let lengths: Vec<usize> = (1..max_n).take_while(|n| *n <= tokens.len()).collect();
	let table = if lengths.len() > 1 && tokens.len() >= parallel_threshold {
		count_parallel(tokens, &lengths)
	} else {
		let mut table = FrequencyTable::new();
		for n in &lengths {
			count_length(tokens, *n, &mut table);
		}
		table
	};

	log::debug!(
		"Counted {} distinct n-grams over {} tokens (n < {})",
		table.len(),
		tokens.len(),
		max_n
	);
	Ok(table)
}

/// Adds every window of exactly `n` tokens to `table`.
fn count_length(tokens: &[Token], n: usize, table: &mut FrequencyTable) {
	for window in tokens.windows(n) {
		table.increment(window);
	}
}

/// Spreads n-gram lengths over worker threads and merges their partial tables.
///
/// # Behavior
/// - Uses at most one worker per CPU core and one worker per length.
/// - Lengths are dealt round-robin so long and short lengths mix.
/// - Partial tables hold disjoint keys (distinct lengths), merging is a union.
fn count_parallel(tokens: &[Token], lengths: &[usize]) -> FrequencyTable {
	let workers = num_cpus::get().clamp(1, lengths.len());
	log::debug!("Counting {} n-gram lengths on {} workers", lengths.len(), workers);

	let (tx, rx) = mpsc::channel();
	thread::scope(|scope| {
		for worker in 0..workers {
			let tx = tx.clone();
			scope.spawn(move || {
				let mut partial = FrequencyTable::new();
				for n in lengths.iter().skip(worker).step_by(workers) {
					count_length(tokens, *n, &mut partial);
				}
				// The receiver outlives the scope, sending cannot fail.
				let _ = tx.send(partial);
			});
		}
	});
	drop(tx);

	let mut table = FrequencyTable::new();
	for partial in rx.iter() {
		table.merge(partial);
	}
	table
}

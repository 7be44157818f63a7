use thiserror::Error;

/// Errors raised by the n-gram tree pipeline.
///
/// Only argument validation can fail: every token sequence, stopword set
/// and frequency table is a valid input with a well-defined (possibly empty)
/// output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NgramError {
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
}

pub type NgramResult<T> = Result<T, NgramError>;

use std::io;

use thiserror::Error;

/// Errors raised by model construction, training and sampling.
#[derive(Debug, Error)]
pub enum ModelError {
	/// The model configuration cannot be used (ex. a window of length 0).
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// The training stream ended before the first window was filled.
	#[error("corpus too short: window length is {window_length} but only {available} character(s) are available")]
	CorpusTooShort { window_length: usize, available: usize },

	/// A frequency list was queried before any character was recorded in it.
	#[error("frequency list is empty")]
	EmptyFrequencyList,

	/// The corpus file could not be read.
	#[error("failed to read corpus: {0}")]
	Io(#[from] io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ModelError>;

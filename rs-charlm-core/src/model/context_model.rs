use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::path::Path;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ModelError, Result};
use crate::io::read_chars;
use super::frequency_list::FrequencyList;
use super::model_config::ModelConfig;
use super::probability::normalize;
use super::sampler::Sampler;

/// Character-level language model over a fixed-length context window.
///
/// The `ContextModel` maps every window of `window_length` characters seen
/// during training to the list of characters that followed it, and generates
/// text by walking this table with weighted random picks.
///
/// # Responsibilities
/// - Build the table from a corpus in a single forward pass
/// - Normalize every frequency list once training is over
/// - Generate text from an initial window
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key of `contexts` has exactly `window_length` characters
/// - Every frequency list is non-empty and normalized once `trained` is set
#[derive(Debug)]
pub struct ContextModel<R = StdRng> {
	/// Number of characters in a context window
	window_length: usize,

	/// Mapping from a context window to the characters that followed it
	contexts: HashMap<String, FrequencyList>,

	/// Random source used by `generate`
	sampler: Sampler<R>,

	trained: bool,
}

impl ContextModel<StdRng> {
	/// Creates an untrained model from a configuration.
	///
	/// Seeds the random source with `config.seed()` when present, from the
	/// operating system otherwise.
	pub fn new(config: ModelConfig) -> Result<Self> {
		let rng = match config.seed() {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self::with_rng(config.window_length(), rng)
	}

	/// Creates an unseeded model: every generation differs.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `window_length` is 0.
	pub fn with_window(window_length: usize) -> Result<Self> {
		Self::new(ModelConfig::new(window_length)?)
	}

	/// Creates a seeded model: the same seed, corpus and arguments always
	/// generate the same text.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Self::new(ModelConfig::new(window_length)?.with_seed(seed))
	}
}

impl<R: Rng> ContextModel<R> {
	/// Creates an untrained model drawing from `rng`.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `window_length` is 0.
	pub fn with_rng(window_length: usize, rng: R) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidConfiguration("window length must be >= 1".to_owned()));
		}
		Ok(Self {
			window_length,
			contexts: HashMap::new(),
			sampler: Sampler::new(rng),
			trained: false,
		})
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Whether `train` completed at least once.
	pub fn is_trained(&self) -> bool {
		self.trained
	}

	/// Returns the frequency list learned for `context`.
	///
	/// Returns `None` if `context` was never followed by a character
	/// during training.
	pub fn frequencies(&self, context: &str) -> Option<&FrequencyList> {
		self.contexts.get(context)
	}

	/// Iterates over all learned contexts and their frequency lists,
	/// in no particular order.
	pub fn contexts(&self) -> hash_map::Iter<'_, String, FrequencyList> {
		self.contexts.iter()
	}

	/// Number of learned contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Builds the model from a stream of characters.
	///
	/// The first `window_length` characters form the initial window. Every
	/// following character is recorded in the list of the current window,
	/// then the window slides by one. Once the stream is exhausted, every
	/// list is normalized.
	///
	/// # Notes
	/// - Training an already trained model discards the previous table.
	///   The table is only cleared once the initial window could be read.
	///
	/// # Errors
	/// Returns `CorpusTooShort` if the stream has fewer than
	/// `window_length` characters. The model is left untouched.
	pub fn train<I>(&mut self, corpus: I) -> Result<()>
	where
		I: IntoIterator<Item = char>,
	{
		let mut chars = corpus.into_iter();

		let window: String = chars.by_ref().take(self.window_length).collect();
		let available = window.chars().count();
		if available < self.window_length {
			return Err(ModelError::CorpusTooShort { window_length: self.window_length, available });
		}

		if self.trained {
			warn!("Retraining model, discarding {} learned context(s)", self.contexts.len());
		}
		self.contexts.clear();
		self.trained = false;
		debug!("Initial window: {:?}", window);

		let mut window = window;
		let mut consumed = available;
		for c in chars {
			match self.contexts.get_mut(&window) {
				Some(list) => list.bump(c),
				None => {
					let mut list = FrequencyList::new();
					list.bump(c);
					self.contexts.insert(window.clone(), list);
				}
			}
			window.remove(0);
			window.push(c);
			consumed += 1;
		}

		for list in self.contexts.values_mut() {
			normalize(list);
		}
		debug!("Normalized {} frequency list(s)", self.contexts.len());

		self.trained = true;
		info!(
			"Trained on {} character(s): {} distinct context(s) of length {}",
			consumed,
			self.contexts.len(),
			self.window_length
		);
		Ok(())
	}

	/// Builds the model from the whole content of a text file.
	///
	/// Line breaks are part of the corpus.
	///
	/// # Errors
	/// Returns `Io` if the file cannot be read, `CorpusTooShort` as `train`.
	pub fn train_file<P: AsRef<Path>>(&mut self, filename: P) -> Result<()> {
		let chars = read_chars(&filename)?;
		debug!("Read {} character(s) from {}", chars.len(), filename.as_ref().display());
		self.train(chars)
	}

	/// Generates text following `initial_text`.
	///
	/// The walk starts from the **first** `window_length` characters of
	/// `initial_text`. Each step picks a character from the current
	/// window's list, appends it and slides the window.
	///
	/// # Returns
	/// `initial_text` followed by at most `target_length` characters:
	/// - `initial_text` unchanged if it is shorter than a window
	/// - fewer characters if the walk reaches a window never seen in training
	///
	/// # Errors
	/// Returns `EmptyFrequencyList` if a learned list has no entries,
	/// which training never produces.
	pub fn generate(&mut self, initial_text: &str, target_length: usize) -> Result<String> {
		if initial_text.chars().count() < self.window_length {
			return Ok(initial_text.to_owned());
		}

		let mut generated = initial_text.to_owned();
		let mut window: String = initial_text.chars().take(self.window_length).collect();

		// One extra draw, dropped below
		for _ in 0..=target_length {
			let Some(list) = self.contexts.get(&window) else {
				debug!("No data for window {:?}, stopping early", window);
				return Ok(generated);
			};
			let chr = self.sampler.pick(list)?.chr();
			generated.push(chr);
			window.remove(0);
			window.push(chr);
		}
		generated.pop();

		Ok(generated)
	}
}

impl<R> fmt::Display for ContextModel<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut keys: Vec<&String> = self.contexts.keys().collect();
		keys.sort();
		for key in keys {
			writeln!(f, "{} : {}", key, self.contexts[key])?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	fn trained(window_length: usize, corpus: &str) -> ContextModel {
		let mut model = ContextModel::with_seed(window_length, 20).unwrap();
		model.train(corpus.chars()).unwrap();
		model
	}

	#[test]
	fn zero_window_is_rejected() {
		assert!(matches!(ContextModel::with_window(0), Err(ModelError::InvalidConfiguration(_))));
		assert!(matches!(ContextModel::with_seed(0, 1), Err(ModelError::InvalidConfiguration(_))));
	}

	#[test]
	fn train_builds_one_list_per_window() {
		let model = trained(2, "abab");
		assert_eq!(model.len(), 2);

		let ab = model.frequencies("ab").unwrap();
		assert_eq!(ab.len(), 1);
		assert_eq!(ab.get('a').unwrap().count(), 1);
		assert_abs_diff_eq!(ab.get('a').unwrap().p(), 1.0);
		assert_abs_diff_eq!(ab.get('a').unwrap().cp(), 1.0);

		let ba = model.frequencies("ba").unwrap();
		assert_eq!(ba.get('b').unwrap().count(), 1);
		assert_abs_diff_eq!(ba.get('b').unwrap().cp(), 1.0);
	}

	#[test]
	fn train_counts_in_first_seen_order() {
		let model = trained(1, "abacad");
		let a = model.frequencies("a").unwrap();
		let order: String = a.iter().map(|stat| stat.chr()).collect();
		assert_eq!(order, "bcd");
		assert_eq!(model.frequencies("b").unwrap().get('a').unwrap().count(), 1);
		assert!(model.frequencies("d").is_none());
	}

	#[test]
	fn short_corpus_is_rejected() {
		let mut model = ContextModel::with_seed(3, 1).unwrap();
		let err = model.train("ab".chars()).unwrap_err();
		assert!(matches!(err, ModelError::CorpusTooShort { window_length: 3, available: 2 }));
		assert!(!model.is_trained());
	}

	#[test]
	fn corpus_of_exactly_one_window_learns_nothing() {
		let mut model = trained(2, "xy");
		assert!(model.is_trained());
		assert!(model.is_empty());
		assert_eq!(model.generate("xy", 5).unwrap(), "xy");
	}

	#[test]
	fn generate_follows_the_only_path() {
		let mut model = trained(2, "abab");
		assert_eq!(model.generate("ab", 3).unwrap(), "ababa");
	}

	#[test]
	fn generate_zero_length_returns_initial_text() {
		let mut model = trained(2, "abab");
		assert_eq!(model.generate("ab", 0).unwrap(), "ab");
	}

	#[test]
	fn generate_starts_from_the_first_window() {
		// "zz" is unknown but "ab" is not
		let mut model = trained(2, "abab");
		assert_eq!(model.generate("abzz", 2).unwrap(), "abzzab");
		// "zz" first: nothing can be generated
		assert_eq!(model.generate("zzab", 2).unwrap(), "zzab");
	}

	#[test]
	fn generate_with_short_initial_text_is_a_no_op() {
		let mut model = trained(3, "abcabc");
		assert_eq!(model.generate("ab", 10).unwrap(), "ab");
		assert_eq!(model.generate("", 10).unwrap(), "");
	}

	#[test]
	fn generate_stops_at_unseen_window() {
		// "bc" is never followed by anything
		let mut model = trained(2, "abc");
		assert_eq!(model.generate("ab", 10).unwrap(), "abc");
	}

	#[test]
	fn generate_on_untrained_model_returns_initial_text() {
		let mut model = ContextModel::with_seed(2, 1).unwrap();
		assert_eq!(model.generate("hello", 10).unwrap(), "hello");
	}

	#[test]
	fn generate_handles_multibyte_characters() {
		let mut model = trained(1, "éàéà");
		assert_eq!(model.generate("é", 3).unwrap(), "éàéà");
	}

	#[test]
	fn retrain_replaces_previous_table() {
		let mut model = trained(2, "abab");
		model.train("xyzxyz".chars()).unwrap();
		assert!(model.frequencies("ab").is_none());
		assert_eq!(model.frequencies("xy").unwrap().get('z').unwrap().count(), 2);
	}

	#[test]
	fn failed_retrain_keeps_previous_table() {
		let mut model = trained(2, "abab");
		assert!(model.train("a".chars()).is_err());
		assert!(model.is_trained());
		assert_eq!(model.len(), 2);
	}

	#[test]
	fn display_lists_every_context_sorted() {
		let model = trained(2, "abab");
		assert_eq!(model.to_string(), "ab : ((a 1 1 1))\nba : ((b 1 1 1))\n");
	}
}

use rand::Rng;

use crate::error::Result;
use super::character_stat::CharacterStat;
use super::frequency_list::FrequencyList;

/// Weighted character picker over normalized frequency lists.
///
/// Owns the random source of a model, so two samplers built from the same
/// seed draw the same sequence of characters.
#[derive(Clone, Debug)]
pub struct Sampler<R> {
	rng: R,
}

impl<R: Rng> Sampler<R> {
	/// Wraps a random source.
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	/// Draws a character from `list` proportionally to its probability.
	///
	/// `list` must have been normalized.
	///
	/// # Errors
	/// Returns `EmptyFrequencyList` if `list` has no entries.
	pub fn pick<'a>(&mut self, list: &'a FrequencyList) -> Result<&'a CharacterStat> {
		// Uniform in [0, 1)
		let r: f64 = self.rng.random();
		Self::select(list, r)
	}

	/// Returns the first entry whose cumulative probability is strictly
	/// greater than `r`, or the last entry if none is.
	///
	/// The fallback absorbs rounding when the final `cp` ends up just
	/// below 1.0.
	///
	/// # Errors
	/// Returns `EmptyFrequencyList` if `list` has no entries.
	pub fn select(list: &FrequencyList, r: f64) -> Result<&CharacterStat> {
		match list.iter().find(|stat| r < stat.cp()) {
			Some(stat) => Ok(stat),
			None => list.last(),
		}
	}
}

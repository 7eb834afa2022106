use std::fmt;

/// Statistics of one character observed right after a given context.
///
/// `p` and `cp` are only meaningful once the owning
/// [`FrequencyList`](super::frequency_list::FrequencyList) has been normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterStat {
	/// The observed character.
	chr: char,
	/// How many times `chr` followed the context.
	count: usize,
	/// Probability of `chr` given the context.
	p: f64,
	/// Cumulative probability up to and including this entry.
	cp: f64,
}

impl CharacterStat {
	/// Creates a stat for a first occurrence of `chr`.
	pub(crate) fn new(chr: char) -> Self {
		Self { chr, count: 1, p: 0.0, cp: 0.0 }
	}

	pub fn chr(&self) -> char {
		self.chr
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn p(&self) -> f64 {
		self.p
	}

	pub fn cp(&self) -> f64 {
		self.cp
	}

	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	pub(crate) fn set_probabilities(&mut self, p: f64, cp: f64) {
		self.p = p;
		self.cp = cp;
	}
}

impl fmt::Display for CharacterStat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.chr, self.count, self.p, self.cp)
	}
}

use std::fmt;
use std::slice;

use crate::error::{ModelError, Result};
use super::character_stat::CharacterStat;

/// Characters observed after one context window, in order of first occurrence.
///
/// Conceptually, this is the set of outgoing edges of a Markov chain node,
/// weighted by how many times each was observed.
///
/// ## Invariants
/// - At most one `CharacterStat` per distinct character
/// - Entries never move: new characters are appended at the end
/// - Every count is strictly positive
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyList {
	stats: Vec<CharacterStat>,
}

impl FrequencyList {
	/// Creates a new empty list.
	pub fn new() -> Self {
		Self { stats: Vec::new() }
	}

	/// Records an occurrence of `chr`.
	///
	/// - If `chr` is already listed, its count is increased.
	/// - Otherwise, a new entry with a count of 1 is appended.
	///
	/// Alphabets are small, so the lookup is a linear scan.
	pub fn bump(&mut self, chr: char) {
		match self.stats.iter_mut().find(|stat| stat.chr() == chr) {
			Some(stat) => stat.increment(),
			None => self.stats.push(CharacterStat::new(chr)),
		}
	}

	/// Iterates the entries in insertion order.
	pub fn iter(&self) -> slice::Iter<'_, CharacterStat> {
		self.stats.iter()
	}

	pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, CharacterStat> {
		self.stats.iter_mut()
	}

	/// Returns the first entry.
	///
	/// # Errors
	/// Returns `EmptyFrequencyList` if nothing was ever recorded.
	pub fn first(&self) -> Result<&CharacterStat> {
		self.stats.first().ok_or(ModelError::EmptyFrequencyList)
	}

	/// Returns the last entry.
	///
	/// # Errors
	/// Returns `EmptyFrequencyList` if nothing was ever recorded.
	pub fn last(&self) -> Result<&CharacterStat> {
		self.stats.last().ok_or(ModelError::EmptyFrequencyList)
	}

	/// Returns the entry for `chr`, if it was observed.
	pub fn get(&self, chr: char) -> Option<&CharacterStat> {
		self.stats.iter().find(|stat| stat.chr() == chr)
	}

	/// Returns the position of `chr` in insertion order, if it was observed.
	pub fn index_of(&self, chr: char) -> Option<usize> {
		self.stats.iter().position(|stat| stat.chr() == chr)
	}

	/// Sum of all counts.
	pub fn total_count(&self) -> usize {
		self.stats.iter().map(CharacterStat::count).sum()
	}

	/// Number of distinct characters.
	pub fn len(&self) -> usize {
		self.stats.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stats.is_empty()
	}
}

impl<'a> IntoIterator for &'a FrequencyList {
	type Item = &'a CharacterStat;
	type IntoIter = slice::Iter<'a, CharacterStat>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for FrequencyList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, stat) in self.stats.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", stat)?;
		}
		write!(f, ")")
	}
}

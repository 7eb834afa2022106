use crate::error::{ModelError, Result};

/// Construction parameters of a [`ContextModel`](super::context_model::ContextModel).
///
/// # Invariants
/// - `window_length` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelConfig {
	/// Number of characters in a context window.
	window_length: usize,

	/// Optional seed of the random source.
	/// `None` seeds from the operating system, so every run differs.
	seed: Option<u64>,
}

impl ModelConfig {
	/// Creates an unseeded configuration.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		Self::check_window_length(window_length)?;
		Ok(Self { window_length, seed: None })
	}

	/// Seeds the random source, making generation reproducible.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	pub fn seed(&self) -> Option<u64> {
		self.seed
	}

	/// Sets the window length.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `window_length` is 0.
	pub fn set_window_length(&mut self, window_length: usize) -> Result<()> {
		Self::check_window_length(window_length)?;
		self.window_length = window_length;
		Ok(())
	}

	/// Sets or clears the seed.
	pub fn set_seed(&mut self, seed: Option<u64>) {
		self.seed = seed;
	}

	fn check_window_length(window_length: usize) -> Result<()> {
		if window_length == 0 {
			return Err(ModelError::InvalidConfiguration("window length must be >= 1".to_owned()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_window_is_rejected() {
		assert!(matches!(ModelConfig::new(0), Err(ModelError::InvalidConfiguration(_))));
	}

	#[test]
	fn setter_keeps_previous_value_on_error() {
		let mut config = ModelConfig::new(3).unwrap();
		assert!(config.set_window_length(0).is_err());
		assert_eq!(config.window_length(), 3);
		config.set_window_length(5).unwrap();
		assert_eq!(config.window_length(), 5);
	}

	#[test]
	fn seed() {
		let config = ModelConfig::new(2).unwrap();
		assert_eq!(config.seed(), None);
		let mut config = config.with_seed(9);
		assert_eq!(config.seed(), Some(9));
		config.set_seed(None);
		assert_eq!(config.seed(), None);
	}
}

//! Top-level module for the character language model.
//!
//! This module provides:
//! - Per-character statistics (`CharacterStat`)
//! - Per-context frequency tables (`FrequencyList`)
//! - Count normalization (`probability`)
//! - Weighted character picking (`Sampler`)
//! - Model construction parameters (`ModelConfig`)
//! - The trainable, generating model itself (`ContextModel`)

/// One character's count, probability and cumulative probability.
pub mod character_stat;

/// Insertion-ordered list of the characters following one context window.
pub mod frequency_list;

/// Conversion of raw counts into probabilities and cumulative probabilities.
pub mod probability;

/// Seedable weighted picking over a normalized frequency list.
pub mod sampler;

/// Window length and seed used to build a model.
pub mod model_config;

/// Fixed-window character model.
///
/// Handles training over a character stream, normalization,
/// and generation by random walk.
pub mod context_model;

pub use character_stat::CharacterStat;
pub use context_model::ContextModel;
pub use frequency_list::FrequencyList;
pub use model_config::ModelConfig;
pub use sampler::Sampler;

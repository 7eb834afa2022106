//! Character-level language model library.
//!
//! This crate provides a fixed-window character model including:
//! - Per-context frequency tables of the characters that follow a window
//! - One-time normalization of counts into probabilities
//! - Reproducible weighted sampling for text generation
//! - Internal utilities for corpus loading
//!
//! Only the model API and its error type are exposed publicly.

/// Context-window model, its frequency tables and its sampler.
///
/// Exposes training and generation, plus read-only inspection of the
/// learned tables.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{ModelError, Result};

//! Markov-chain-based text generation library.
//!
//! This crate provides a word-level Markov text generation system including:
//! - Whitespace tokenization with optional normalization
//! - Transition-frequency model construction
//! - Weighted random walk generation with caller-supplied randomness
//! - Sentence-like formatting of generated sequences
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core chain model and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal model representations private.
pub mod model;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;

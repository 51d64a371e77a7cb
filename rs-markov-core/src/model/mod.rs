//! Top-level module for the Markov text generation system.
//!
//! This crate provides a first-order word-chain text generator, including:
//! - Whitespace tokenization with normalization options (`tokenizer`)
//! - A word transition model (`ChainModel`)
//! - Internal per-word transition state (`State`)
//! - Sentence formatting (`formatter`)
//! - A high-level generation interface (`Generator`)

/// High-level interface for generating text from a source corpus.
///
/// Exposes corpus loading, weighted sequence generation with a
/// caller-supplied random source, and sentence output.
pub mod generator;

/// Word transition model.
///
/// Maps each observed word to its weighted successors and supports
/// uniform start-word selection and weighted next-word prediction.
pub mod chain_model;

/// Whitespace tokenization and normalization options.
pub mod tokenizer;

/// Formatting of generated word sequences into sentence-like strings.
pub mod formatter;

/// Internal representation of a single word state.
///
/// Tracks outgoing transitions and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;

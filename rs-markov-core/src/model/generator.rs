use std::path::Path;

use rand::Rng;

use crate::io;
use super::chain_model::ChainModel;
use super::formatter;
use super::tokenizer::{self, TokenizeOptions};

/// High-level interface generating text from a source corpus.
///
/// # Responsibilities
/// - Load a corpus from a file or a string and build its [`ChainModel`]
/// - Generate word sequences of a requested length by weighted random walk
/// - Format generated sequences into sentence-like output
///
/// # Notes
/// - The model is rebuilt from scratch for every `Generator`; nothing is
///   persisted between runs.
/// - All sampling goes through a caller-supplied [`Rng`], so tests can
///   substitute a seeded source.
#[derive(Clone, Debug)]
pub struct Generator {
	model: ChainModel,
}

impl Generator {
	/// Creates a generator by reading and tokenizing a source file.
	///
	/// The whole file is read eagerly into memory before tokenization.
	///
	/// # Errors
	/// - Returns an error if the file cannot be opened or read.
	/// - Returns an error if the file contains no words.
	pub fn from_file<P: AsRef<Path>>(
		filepath: P,
		options: &TokenizeOptions,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let contents = io::read_file(filepath)?;
		Ok(Self::from_text(&contents, options)?)
	}

	/// Creates a generator from source text already in memory.
	///
	/// # Errors
	/// Returns an error if the text contains no words.
	pub fn from_text(text: &str, options: &TokenizeOptions) -> Result<Self, String> {
		let words = tokenizer::tokenize(text, options);
		log::debug!("Tokenized source: {} words", words.len());

		let model = ChainModel::from_tokens(&words)?;
		Ok(Self { model })
	}

	/// Returns the underlying transition model.
	pub fn model(&self) -> &ChainModel {
		&self.model
	}

	/// Generates a sequence of exactly `length` words.
	///
	/// The first word is chosen uniformly at random over the distinct
	/// words of the model; every following word is sampled from its
	/// predecessor's successors, weighted by occurrence count.
	///
	/// # Edge cases
	/// - `length == 0` returns an empty sequence.
	///
	/// # Errors
	/// Returns an error if a chosen word has no recorded successors.
	/// The model construction guarantees this cannot happen, so hitting
	/// it means the model invariant is broken.
	pub fn generate_words<R: Rng + ?Sized>(
		&self,
		length: usize,
		rng: &mut R,
	) -> Result<Vec<String>, String> {
		if length == 0 {
			return Ok(Vec::new());
		}

		// Randomly choose a word to start with
		let start = match self.model.random_start(rng) {
			Some(word) => word.to_owned(),
			None => return Err("No words available to start generation".to_owned()),
		};

		let mut generated = Vec::with_capacity(length);
		generated.push(start);

		for _ in 1..length {
			// Guaranteed non-empty: one word was pushed above
			let current = &generated[generated.len() - 1];
			let next = match self.model.predict(current, rng) {
				Some(word) => word.to_owned(),
				None => {
					return Err(format!(
						"Chain model is inconsistent: no successors recorded for '{current}'"
					));
				}
			};
			generated.push(next);
		}

		Ok(generated)
	}

	/// Generates `length` words and formats them as a sentence.
	///
	/// # Errors
	/// Same failure modes as [`Generator::generate_words`].
	pub fn generate<R: Rng + ?Sized>(
		&self,
		length: usize,
		rng: &mut R,
	) -> Result<String, String> {
		let words = self.generate_words(length, rng)?;
		Ok(formatter::format_sentence(&words))
	}
}

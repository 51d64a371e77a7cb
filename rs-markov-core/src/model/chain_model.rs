use std::collections::HashMap;

use rand::Rng;
use rand::prelude::IteratorRandom;

use super::state::State;

/// First-order word transition model.
///
/// The `ChainModel` stores one [`State`] per observed word and allows
/// probabilistic prediction of the next word based on observed adjacency
/// in the source text.
///
/// # Responsibilities
/// - Build the model from an ordered token sequence
/// - Accumulate transition counts for each word
/// - Select a uniformly random start word
/// - Predict the next word given the current one
///
/// # Invariants
/// - Every stored word has at least one successor with a count >= 1
/// - The globally-last token always has an entry: if it never appears
///   as a "current" word, it receives a single synthetic transition to
///   the first token of the sequence
#[derive(Clone, Debug, Default)]
pub struct ChainModel {
	/// Mapping from a word to its corresponding state.
	states: HashMap<String, State>,
}

impl ChainModel {
	/// Builds a model from an ordered token sequence.
	///
	/// Iterates every consecutive `(current, next)` pair once and
	/// increments the matching transition count. Afterwards, if the last
	/// token of the sequence was never observed as a "current" word, it
	/// is given a single transition back to the first token so that every
	/// reachable word has at least one outgoing transition.
	///
	/// # Edge cases
	/// - A single-token sequence has no pairs; the sole token ends up
	///   mapping to itself with a count of 1.
	///
	/// # Errors
	/// Returns an error if `tokens` is empty.
	pub fn from_tokens(tokens: &[String]) -> Result<Self, String> {
		let (first, last) = match (tokens.first(), tokens.last()) {
			(Some(first), Some(last)) => (first, last),
			_ => return Err("Cannot build a chain model from an empty token sequence".to_owned()),
		};

		let mut states: HashMap<String, State> = HashMap::new();
		for pair in tokens.windows(2) {
			let state = states.entry(pair[0].clone()).or_insert_with(State::new);
			state.add_transition(&pair[1]);
		}

		// If the last word appears only at the end, route it back to the start
		if !states.contains_key(last) {
			states
				.entry(last.clone())
				.or_insert_with(State::new)
				.add_transition(first);
		}

		log::debug!(
			"Built chain model: {} tokens, {} distinct words",
			tokens.len(),
			states.len()
		);

		Ok(Self { states })
	}

	/// Returns the number of distinct words in the model.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Returns `true` if the model contains no words.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns `true` if `word` is present as a "current" word.
	pub fn contains(&self, word: &str) -> bool {
		self.states.contains_key(word)
	}

	/// Returns an iterator over the distinct words of the model.
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.states.keys().map(String::as_str)
	}

	/// Returns the `(successor, occurrence_count)` pairs recorded for `word`.
	///
	/// Returns `None` if the word is unknown to the model.
	pub fn successors(&self, word: &str) -> Option<impl Iterator<Item = (&str, usize)>> {
		self.states.get(word).map(State::transitions)
	}

	/// Chooses a start word uniformly at random over the distinct words.
	///
	/// Every word carries the same probability regardless of how often it
	/// appears in the source text. Returns `None` if the model is empty.
	pub fn random_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.states.keys().choose(rng).map(String::as_str)
	}

	/// Predicts the next word after `word` using weighted random sampling.
	///
	/// Returns `None` if the word is unknown or has no transitions.
	pub fn predict<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Option<&str> {
		self.states.get(word)?.predict(rng)
	}
}

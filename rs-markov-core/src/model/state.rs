use std::collections::HashMap;

use rand::Rng;

/// Represents the state of a single word in the chain model.
///
/// A `State` stores all observed transitions from one word to the words
/// that followed it in the source text. The owning model keys states by
/// their word, so the word itself is not duplicated here.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during model construction
/// - Predict the next word using weighted random sampling
///
/// ## Invariants
/// - Each transition occurrence count is strictly positive
#[derive(Clone, Debug, Default)]
pub struct State {
	/// Outgoing transitions indexed by the next word.
	/// The value represents how many times this transition was observed.
	/// Example: { "cat" => 42, "dog" => 3 }
	transitions: HashMap<String, usize>,
}

impl State {
	/// Creates a new state with no recorded transitions.
	pub fn new() -> Self {
		Self {
			transitions: HashMap::new(),
		}
	}

	/// Records an occurrence of a transition toward `next_word`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is created with an initial count of 1.
	pub fn add_transition(&mut self, next_word: &str) {
		*self.transitions.entry(next_word.to_owned()).or_insert(0) += 1;
	}

	/// Returns an iterator over `(next_word, occurrence_count)` pairs.
	pub fn transitions(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Returns the total number of recorded occurrences.
	pub fn total_occurrences(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Predicts the next word using weighted random sampling.
	///
	/// The probability of selecting a word is proportional to its
	/// occurrence count.
	///
	/// This method performs:
	/// - an O(n) scan over the transitions
	/// - a cumulative subtraction to select a bucket
	///
	/// Returns `None` if the state has no transitions.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.transitions.is_empty() {
			return None;
		}

		// Compute the total number of occurrences
		let total = self.total_occurrences();
		if total == 0 {
			// Should not happen due to invariants, but kept for safety
			return None;
		}

		// Randomly select a word
		let mut r = rng.random_range(0..total);

		let mut fallback: Option<&str> = None;
		for (next_word, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(next_word);
			}
			r -= occurrence;
			fallback = Some(next_word);
		}

		// Fallback: should not happen, but kept for safety.
		fallback
	}
}

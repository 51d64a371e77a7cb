/// Formats a generated word sequence into a sentence-like string.
///
/// Joins the words with single spaces, uppercases the first character of
/// the joined text and appends a period. A sequence of `k` words always
/// yields exactly `k - 1` separating spaces.
///
/// If the joined text is empty (no words, or only empty tokens produced
/// from all-punctuation input), the result is just `"."`.
pub fn format_sentence(words: &[String]) -> String {
	let sentence = words.join(" ");

	let mut chars = sentence.chars();
	match chars.next() {
		Some(first) => {
			// UTF-8 safe: uppercasing may expand to several characters
			let mut formatted: String = first.to_uppercase().collect();
			formatted.push_str(chars.as_str());
			formatted.push('.');
			formatted
		}
		None => ".".to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn words(items: &[&str]) -> Vec<String> {
		items.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn test_capitalizes_and_terminates() {
		assert_eq!(format_sentence(&words(&["the", "cat", "sat"])), "The cat sat.");
	}

	#[test]
	fn test_single_word() {
		assert_eq!(format_sentence(&words(&["hello"])), "Hello.");
	}

	#[test]
	fn test_space_count_is_word_count_minus_one() {
		let sentence = format_sentence(&words(&["a", "b", "c", "d"]));
		assert_eq!(sentence.matches(' ').count(), 3);
		assert!(sentence.ends_with('.'));
		assert_eq!(sentence.matches('.').count(), 1);
	}

	#[test]
	fn test_already_capitalized_stays_put() {
		assert_eq!(format_sentence(&words(&["Paris", "is", "big"])), "Paris is big.");
	}

	#[test]
	fn test_first_character_not_uppercasable() {
		assert_eq!(format_sentence(&words(&["1984", "was", "grim"])), "1984 was grim.");
	}

	#[test]
	fn test_empty_sequence_yields_bare_period() {
		assert_eq!(format_sentence(&[]), ".");
	}

	#[test]
	fn test_empty_tokens_yield_bare_spaces() {
		// Three empty tokens join into two spaces; nothing to uppercase
		// until the first non-empty character, which does not exist.
		assert_eq!(format_sentence(&words(&["", "", ""])), "  .");
	}
}

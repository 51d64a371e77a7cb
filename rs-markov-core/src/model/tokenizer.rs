/// Normalization options applied while tokenizing source text.
///
/// Both options default to off: words are kept exactly as they appear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizeOptions {
	/// Force every token to lowercase.
	pub lowercase: bool,
	/// Remove every ASCII punctuation character from each word.
	pub strip_punctuation: bool,
}

/// Splits source text into normalized word tokens.
///
/// Words are separated by any run of whitespace, including line breaks.
/// Punctuation stripping (when enabled) runs before lowercase folding and
/// preserves the relative order of the remaining characters.
///
/// A word made entirely of punctuation becomes an empty token and is kept,
/// so the token count always equals the whitespace-word count of the input.
pub fn tokenize(text: &str, options: &TokenizeOptions) -> Vec<String> {
	text.split_whitespace()
		.map(|word| {
			let mut token = if options.strip_punctuation {
				word.chars().filter(|c| !c.is_ascii_punctuation()).collect()
			} else {
				word.to_owned()
			};
			if options.lowercase {
				token = token.to_lowercase();
			}
			token
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_splits_on_any_whitespace() {
		let tokens = tokenize("the cat\tsat\n  the dog\r\nran", &TokenizeOptions::default());
		assert_eq!(tokens, ["the", "cat", "sat", "the", "dog", "ran"]);
	}

	#[test]
	fn test_no_normalization_keeps_words_verbatim() {
		let tokens = tokenize("The cat, sat.", &TokenizeOptions::default());
		assert_eq!(tokens, ["The", "cat,", "sat."]);
	}

	#[test]
	fn test_strip_punctuation() {
		let options = TokenizeOptions {
			strip_punctuation: true,
			..Default::default()
		};
		let tokens = tokenize("don't stop-me now!", &options);
		assert_eq!(tokens, ["dont", "stopme", "now"]);
	}

	#[test]
	fn test_lowercase_applies_after_stripping() {
		let options = TokenizeOptions {
			lowercase: true,
			strip_punctuation: true,
		};
		let tokens = tokenize("The CAT, Sat.", &options);
		assert_eq!(tokens, ["the", "cat", "sat"]);
	}

	#[test]
	fn test_all_punctuation_word_becomes_empty_token() {
		let options = TokenizeOptions {
			strip_punctuation: true,
			..Default::default()
		};
		let tokens = tokenize("wait --- what", &options);
		assert_eq!(tokens, ["wait", "", "what"]);
	}

	#[test]
	fn test_token_count_is_flag_independent() {
		let text = "One, TWO; three... four!";
		let plain = tokenize(text, &TokenizeOptions::default());
		let normalized = tokenize(
			text,
			&TokenizeOptions {
				lowercase: true,
				strip_punctuation: true,
			},
		);
		assert_eq!(plain.len(), 4);
		assert_eq!(plain.len(), normalized.len());
	}

	#[test]
	fn test_empty_input_has_no_tokens() {
		assert!(tokenize("  \n\t ", &TokenizeOptions::default()).is_empty());
		assert!(tokenize("", &TokenizeOptions::default()).is_empty());
	}
}

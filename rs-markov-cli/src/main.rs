use std::path::PathBuf;

use clap::Parser;

use rs_markov_core::model::generator::Generator;
use rs_markov_core::model::tokenizer::TokenizeOptions;

/// Generates text using a Markov text generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// The file to read in as source.
	file: PathBuf,

	/// The length of text to output, in words.
	#[arg(long, default_value_t = 100)]
	length: usize,

	/// y/yes/true: force all words to lowercase.
	#[arg(long, default_value = "False")]
	lower: String,

	/// y/yes/true: keep punctuation from the input file.
	#[arg(long, default_value = "True")]
	punct: String,
}

/// Coerces a textual flag value to a boolean.
///
/// Only `y`, `yes` and `true` count as true, case-insensitively;
/// anything else is false.
fn parse_flag(value: &str) -> bool {
	matches!(value.to_lowercase().as_str(), "y" | "yes" | "true")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let args = Args::parse();
	let options = TokenizeOptions {
		lowercase: parse_flag(&args.lower),
		// The flag selects keeping punctuation; the tokenizer strips it
		strip_punctuation: !parse_flag(&args.punct),
	};

	let generator = Generator::from_file(&args.file, &options)?;

	let mut rng = rand::rng();
	println!("{}", generator.generate(args.length, &mut rng)?);

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_flag_coercion_accepts_known_truths() {
		for value in ["y", "yes", "true", "Y", "YES", "True", "tRuE"] {
			assert!(parse_flag(value), "{value} should coerce to true");
		}
	}

	#[test]
	fn test_flag_coercion_rejects_everything_else() {
		for value in ["", "n", "no", "false", "False", "1", "on", "oui"] {
			assert!(!parse_flag(value), "{value} should coerce to false");
		}
	}

	#[test]
	fn test_defaults_keep_punctuation_and_case() {
		let args = Args::parse_from(["rs-markov", "corpus.txt"]);
		assert_eq!(args.length, 100);
		assert!(!parse_flag(&args.lower));
		assert!(parse_flag(&args.punct));
	}

	#[test]
	fn test_negative_length_is_rejected_early() {
		assert!(Args::try_parse_from(["rs-markov", "corpus.txt", "--length", "-3"]).is_err());
	}
}

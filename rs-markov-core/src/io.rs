use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and returns its whole contents as a `String`.
///
/// - Reads the entire file into memory
/// - The file handle is released on every path, including read errors
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

/// Reads a text file and returns its content as a sequence of characters.
///
/// - Reads the entire file into memory
/// - Keeps every character, line breaks included
pub(crate) fn read_chars<P: AsRef<Path>>(filename: P) -> io::Result<Vec<char>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.chars().collect())
}

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Writes `lines` to `filename`, one per line, replacing any previous content.
///
/// Every line, including the last one, is terminated by `\n`.
pub(crate) fn write_lines<P, I, S>(filename: P, lines: I) -> io::Result<()>
where
	P: AsRef<Path>,
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut writer = BufWriter::new(File::create(filename)?);
	for line in lines {
		writer.write_all(line.as_ref().as_bytes())?;
		writer.write_all(b"\n")?;
	}
	writer.flush()
}

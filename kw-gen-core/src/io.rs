use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a whole text file into a `String`.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Normalize a folder path.
///
/// - `""`, `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input.as_os_str().is_empty() || input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Writes `contents` to `filename` inside `folder` and returns the full path.
///
/// # Errors
/// Returns an error if `folder` is not an existing directory or if the
/// write fails.
pub(crate) fn write_in_folder<P: AsRef<Path>>(folder: P, filename: &str, contents: &str) -> io::Result<PathBuf> {
	let folder = normalize_folder(folder);
	if !folder.is_dir() {
		return Err(io::Error::new(
			io::ErrorKind::NotFound,
			format!("Expected a directory, got: {}", folder.display()),
		));
	}

	let output = folder.join(filename);
	fs::write(&output, contents)?;
	Ok(output)
}

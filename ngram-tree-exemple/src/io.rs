use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a whole text file into memory.
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	fs::read_to_string(filename)
}

/// Path of the rendering written next to a text file.
///
/// `corpus/poem.txt` rendered as an outline lands in `corpus/poem.org`.
pub(crate) fn rendering_path(text_path: &Path, format_extension: &str) -> io::Result<PathBuf> {
	if text_path.file_stem().is_none() {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, "Text path has no filename"));
	}
	Ok(text_path.with_extension(format_extension))
}

/// Resolves the CLI input; a bare `.` means the working directory.
pub(crate) fn resolve_input(input: &Path) -> PathBuf {
	match input.to_str() {
		Some(".") | Some("./") => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
		_ => input.to_path_buf(),
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns full paths; subdirectories are ignored.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rendering_sits_next_to_the_text() {
		let output = rendering_path(Path::new("corpus/poem.txt"), "org").unwrap();
		assert_eq!(output, PathBuf::from("corpus/poem.org"));
	}

	#[test]
	fn rendering_path_requires_a_filename() {
		assert!(rendering_path(Path::new("/"), "html").is_err());
	}

	#[test]
	fn list_files_filters_by_extension() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "b").unwrap();
		fs::write(dir.path().join("a.txt"), "a").unwrap();
		fs::write(dir.path().join("a.html"), "<ul></ul>").unwrap();
		fs::create_dir(dir.path().join("nested.txt")).unwrap();

		let files = list_files(dir.path(), "txt").unwrap();
		let names: Vec<String> =
			files.iter().map(|p| p.file_name().unwrap().to_string_lossy().to_string()).collect();
		assert_eq!(names, vec!["a.txt", "b.txt"]);
		assert_eq!(read_text(&files[0]).unwrap(), "a");
	}

	#[test]
	fn relative_inputs_are_kept() {
		assert_eq!(resolve_input(Path::new("corpus")), PathBuf::from("corpus"));
	}
}

use std::path::Path;

use libencsniff::{Category, Error};

/// The line printed for a successfully classified file, e.g. `notes.txt: ASCII text`. Paths that are not valid UTF-8 are
/// printed lossily
pub fn category_line(path: &Path, category: Category) -> String {
	format!("{}: {}", path.display(), category)
}

/// The line printed when a file could not be opened or read, e.g. `missing.txt: cannot determine (No such file or directory)`
pub fn cannot_determine_line(path: &Path, error: &Error) -> String {
	format!("{}: cannot determine ({})", path.display(), error.system_message())
}

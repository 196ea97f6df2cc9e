use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;

use crate::Sem3Result;
use crate::markup::Markup;
use crate::markup::markup_from_block;
use crate::scanner::scan_blocks;

/// The sentinel marker that authorizes a fenced block for extraction. It
/// must appear on the first content line inside the fence; ordinary code
/// samples without it are never extracted.
pub const DEFAULT_MARKER: &str = "🌐🕸";

/// Extracts semantic annotation markup from text, files, and glob patterns.
#[derive(Clone, Debug)]
pub struct Extractor {
	marker: String,
}

impl Default for Extractor {
	fn default() -> Self {
		Self::new(DEFAULT_MARKER)
	}
}

impl Extractor {
	pub fn new(marker: impl Into<String>) -> Self {
		Self {
			marker: marker.into(),
		}
	}

	pub fn marker(&self) -> &str {
		&self.marker
	}

	/// Extract all markup snippets from `text`, in order of appearance.
	///
	/// A buffer that does not contain the marker anywhere is rejected with a
	/// plain substring check before the fence scan runs.
	pub fn extract_from_text(&self, text: &str, source_path: Option<&Path>) -> Vec<Markup> {
		if !text.contains(&self.marker) {
			return Vec::new();
		}

		let markups: Vec<Markup> = scan_blocks(text)
			.iter()
			.filter_map(|raw| markup_from_block(raw, &self.marker, source_path))
			.collect();

		if !markups.is_empty() {
			debug!(
				count = markups.len(),
				source = ?source_path,
				"found markup snippets"
			);
		}

		markups
	}

	/// Extract markup snippets from a single file. A read or decode failure
	/// is logged as a warning and yields an empty result; it never aborts a
	/// multi-file run.
	pub fn extract_from_file(&self, path: &Path) -> Vec<Markup> {
		match std::fs::read_to_string(path) {
			Ok(content) => self.extract_from_text(&content, Some(path)),
			Err(e) => {
				warn!("error reading {}: {e}", path.display());
				Vec::new()
			}
		}
	}

	/// Extract markup snippets from all files matching a glob pattern.
	/// Recursive `**` patterns are supported. An invalid pattern is a hard
	/// error; per-file failures are not.
	pub fn extract_from_glob(&self, pattern: &str) -> Sem3Result<Vec<Markup>> {
		let files = expand_glob(pattern)?;
		debug!("glob pattern '{pattern}' found {} files", files.len());

		let mut all = Vec::new();
		for file in &files {
			all.extend(self.extract_from_file(file));
		}

		Ok(all)
	}

	/// Extract markup snippets from files matching multiple glob patterns,
	/// concatenated in pattern order. A file matched by more than one
	/// pattern is processed once per match; deduplication is the caller's
	/// concern.
	pub fn extract_from_glob_list(&self, patterns: &[String]) -> Sem3Result<Vec<Markup>> {
		let mut all = Vec::new();
		for pattern in patterns {
			all.extend(self.extract_from_glob(pattern)?);
		}

		Ok(all)
	}
}

/// Expand a glob pattern to the matching file paths, in the stable order the
/// expansion produces. Directories are skipped; unreadable entries are
/// warned about and skipped.
pub fn expand_glob(pattern: &str) -> Sem3Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in glob::glob(pattern)? {
		match entry {
			Ok(path) if path.is_file() => files.push(path),
			Ok(_) => {}
			Err(e) => warn!("skipping unreadable path: {e}"),
		}
	}

	Ok(files)
}

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::scanner::RawBlock;

/// The closed set of fence language tags the scanner accepts. The tag only
/// tells a downstream consumer how to read the payload; the extractor never
/// parses the payload itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupLang {
	Yaml,
	Sidif,
}

impl MarkupLang {
	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"yaml" => Some(Self::Yaml),
			"sidif" => Some(Self::Sidif),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Yaml => "yaml",
			Self::Sidif => "sidif",
		}
	}
}

impl fmt::Display for MarkupLang {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single extracted markup snippet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Markup {
	/// Language tag of the fence the snippet was found in.
	pub lang: MarkupLang,
	/// Cleaned payload: prefix-stripped, marker line removed, trimmed.
	/// Never empty.
	pub code: String,
	/// `"<path>:<line>"` of the opening fence when the originating file is
	/// known, empty otherwise.
	pub source: String,
}

/// Turn one raw scanner match into a validated [`Markup`], or reject it.
///
/// Each content line loses the captured prefix: an exact match is stripped,
/// a right-trimmed match covers blank comment lines that omit the trailing
/// space, and anything else is kept as is. The first non-blank cleaned line
/// must contain `marker`; everything after it becomes the payload. Blocks
/// that are blank, unmarked, or left with an empty payload yield `None` —
/// rejection is silent and expected, never an error.
pub fn markup_from_block(raw: &RawBlock, marker: &str, source_path: Option<&Path>) -> Option<Markup> {
	let prefix = raw.prefix.as_str();
	let bare_prefix = prefix.trim_end();

	let cleaned: Vec<&str> = raw
		.content
		.split('\n')
		.map(|line| {
			if let Some(rest) = line.strip_prefix(prefix) {
				rest
			} else if let Some(rest) = line.strip_prefix(bare_prefix) {
				rest
			} else {
				line
			}
		})
		.collect();

	let header_idx = cleaned.iter().position(|line| !line.trim().is_empty())?;

	if !cleaned[header_idx].trim().contains(marker) {
		return None;
	}

	let payload = cleaned[header_idx + 1..].join("\n");
	let code = payload.trim();
	if code.is_empty() {
		return None;
	}

	let source = match source_path {
		Some(path) => format!("{}:{}", path.display(), raw.line),
		None => String::new(),
	};

	Some(Markup {
		lang: raw.lang,
		code: code.to_string(),
		source,
	})
}

/// Convert records into plain field-name → value mapping rows for the RDF
/// builder. Field order inside a row is stable (sorted by name).
pub fn markups_to_lod(markups: &[Markup]) -> Vec<serde_json::Map<String, serde_json::Value>> {
	markups
		.iter()
		.filter_map(|markup| {
			match serde_json::to_value(markup) {
				Ok(serde_json::Value::Object(map)) => Some(map),
				_ => None,
			}
		})
		.collect()
}

use crate::markup::MarkupLang;

const FENCE: &str = "```";

/// One raw fenced block found by [`scan_blocks`]. The inner content still
/// carries whatever indentation or comment prefix each line had; cleaning is
/// a separate step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBlock {
	/// Lines between the opening and closing fences, joined with `\n`.
	pub content: String,
	/// The accepted language tag of the opening fence.
	pub lang: MarkupLang,
	/// The exact whitespace/comment text captured before the opening
	/// backticks. The closing fence must repeat it verbatim.
	pub prefix: String,
	/// 1-based line number of the opening fence.
	pub line: usize,
}

/// Find every fenced block with an accepted language tag in `text`.
///
/// A block opens at a line of the shape `[ \t]*` + optional `#` or `//` +
/// `[ \t]*` + three backticks + tag, and closes at the first later line that
/// starts with the opening prefix followed by three backticks. Requiring the
/// same literal prefix lets a block nested in a comment close correctly even
/// when an unrelated fence appears inside it at different indentation.
///
/// Unclosed blocks at end of input are discarded. Matches never overlap:
/// scanning resumes on the line after a closing fence.
pub fn scan_blocks(text: &str) -> Vec<RawBlock> {
	let mut blocks = Vec::new();
	let mut open: Option<(String, MarkupLang, usize, Vec<&str>)> = None;

	for (idx, line) in text.split('\n').enumerate() {
		match open.take() {
			None => {
				if let Some((prefix, lang)) = parse_opening_fence(line) {
					open = Some((prefix, lang, idx + 1, Vec::new()));
				}
			}
			Some((prefix, lang, start_line, mut content)) => {
				if is_closing_fence(line, &prefix) {
					blocks.push(RawBlock {
						content: content.join("\n"),
						lang,
						prefix,
						line: start_line,
					});
				} else {
					content.push(line);
					open = Some((prefix, lang, start_line, content));
				}
			}
		}
	}

	blocks
}

/// Try to read `line` as an opening fence. Returns the captured prefix (the
/// literal text before the backticks) and the accepted language tag.
fn parse_opening_fence(line: &str) -> Option<(String, MarkupLang)> {
	let mut rest = line.trim_start_matches([' ', '\t']);

	if !rest.starts_with(FENCE) {
		// A single line comment token may sit between the indentation and
		// the fence, optionally followed by more whitespace.
		let after = rest.strip_prefix("//").or_else(|| rest.strip_prefix('#'))?;
		rest = after.trim_start_matches([' ', '\t']);
	}

	let tag = rest.strip_prefix(FENCE)?;
	let lang = MarkupLang::from_tag(tag.trim_end())?;
	let prefix = &line[..line.len() - rest.len()];

	Some((prefix.to_string(), lang))
}

/// A closing fence is the opening prefix repeated verbatim, immediately
/// followed by three backticks. Anything after the backticks is ignored.
fn is_closing_fence(line: &str, prefix: &str) -> bool {
	line.strip_prefix(prefix)
		.is_some_and(|rest| rest.starts_with(FENCE))
}

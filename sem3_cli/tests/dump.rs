use assert_cmd::Command;
use predicates::prelude::*;
use sem3_core::AnyEmptyResult;

const MARKED_YAML: &str = "```yaml\n# 🌐🕸\nfoo:\n  isA: Bar\n```\n";

#[test]
fn dump_turtle_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("note.md"), MARKED_YAML)?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("dump")
		.arg(tmp.path().join("note.md"))
		.assert()
		.success()
		.stdout(predicates::str::contains("@prefix ex: <http://example.org/> ."))
		.stdout(predicates::str::contains("ex:markup_0 a ex:Markup"))
		.stdout(predicates::str::contains("ex:lang \"yaml\""));

	Ok(())
}

#[test]
fn dump_ntriples_format() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("note.md"), MARKED_YAML)?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("dump")
		.arg("--format")
		.arg("ntriples")
		.arg(tmp.path().join("note.md"))
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"<http://example.org/markup_0> \
			 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \
			 <http://example.org/Markup> .",
		));

	Ok(())
}

#[test]
fn dump_jsonld_is_valid_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("note.md"), MARKED_YAML)?;

	let mut cmd = Command::cargo_bin("sem3")?;
	let assert = cmd
		.arg("dump")
		.arg("--format")
		.arg("json-ld")
		.arg(tmp.path().join("note.md"))
		.assert()
		.success();

	let doc: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(doc["@graph"][0]["@id"], "http://example.org/markup_0");
	assert_eq!(doc["@graph"][0]["@type"], "http://example.org/Markup");

	Ok(())
}

#[test]
fn dump_deduplicates_overlapping_patterns() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("note.md"), MARKED_YAML)?;

	// The same file is named directly and matched by a glob pattern; it must
	// contribute its record once.
	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("dump")
		.arg("--input")
		.arg(format!("{}/*.md", tmp.path().display()))
		.arg(tmp.path().join("note.md"))
		.assert()
		.success()
		.stdout(predicates::str::contains("markup_0"))
		.stdout(predicates::str::contains("markup_1").not());

	Ok(())
}

#[test]
fn dump_writes_output_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("note.md"), MARKED_YAML)?;
	let out_path = tmp.path().join("graph.ttl");

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("dump")
		.arg("--output")
		.arg(&out_path)
		.arg(tmp.path().join("note.md"))
		.assert()
		.success();

	let content = std::fs::read_to_string(&out_path)?;
	assert!(content.contains("@prefix ex: <http://example.org/> ."));

	Ok(())
}

#[test]
fn dump_custom_base_uri_and_type() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("note.md"), MARKED_YAML)?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("dump")
		.arg("--base-uri")
		.arg("https://semantify3.example/code/")
		.arg("--ns-prefix")
		.arg("sem3")
		.arg("--type-name")
		.arg("Snippet")
		.arg(tmp.path().join("note.md"))
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"@prefix sem3: <https://semantify3.example/code/> .",
		))
		.stdout(predicates::str::contains("sem3:snippet_0 a sem3:Snippet"));

	Ok(())
}

#[test]
fn dump_empty_input_set_is_success() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("plain.md"), "no annotations here\n")?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("dump")
		.arg(tmp.path().join("plain.md"))
		.assert()
		.success()
		.stdout(predicates::str::contains("@prefix"));

	Ok(())
}

#[test]
fn dump_rejects_unknown_format() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("dump")
		.arg("--format")
		.arg("graphml")
		.arg("whatever.md")
		.assert()
		.failure();

	Ok(())
}

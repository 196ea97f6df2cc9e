use assert_cmd::Command;
use sem3_core::AnyEmptyResult;

const MARKED_YAML: &str = "```yaml\n# 🌐🕸\nfoo:\n  isA: Bar\n```\n";

#[test]
fn list_prints_extracted_markups() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("note.md"), MARKED_YAML)?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("list")
		.arg(tmp.path().join("note.md"))
		.assert()
		.success()
		.stdout(predicates::str::contains("1: yaml in note.md"))
		.stdout(predicates::str::contains("isA: Bar"));

	Ok(())
}

#[test]
fn list_without_markup_is_silent_success() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("plain.md"), "# Just a readme\n")?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("list")
		.arg(tmp.path().join("plain.md"))
		.assert()
		.success()
		.stdout(predicates::str::is_empty());

	Ok(())
}

#[test]
fn list_verbose_reports_count() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("note.md"), MARKED_YAML)?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("list")
		.arg("--verbose")
		.arg(tmp.path().join("note.md"))
		.assert()
		.success()
		.stdout(predicates::str::contains("Found 1 markups"));

	Ok(())
}

#[test]
fn list_accepts_glob_patterns() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("a.md"), MARKED_YAML)?;
	std::fs::write(
		tmp.path().join("b.py"),
		"# ```sidif\n# 🌐🕸\n# b isA Module\n# ```\n",
	)?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("list")
		.arg("--input")
		.arg(format!("{}/*.md", tmp.path().display()))
		.arg("--input")
		.arg(format!("{}/*.py", tmp.path().display()))
		.assert()
		.success()
		.stdout(predicates::str::contains("yaml in a.md"))
		.stdout(predicates::str::contains("sidif in b.py"))
		.stdout(predicates::str::contains("b isA Module"));

	Ok(())
}

#[test]
fn list_with_custom_marker() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("note.md"),
		"```yaml\nMARK\nfoo: 1\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("list")
		.arg("--marker")
		.arg("MARK")
		.arg(tmp.path().join("note.md"))
		.assert()
		.success()
		.stdout(predicates::str::contains("foo: 1"));

	Ok(())
}

#[test]
fn list_without_input_fails() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.arg("list")
		.assert()
		.failure()
		.stderr(predicates::str::contains("no input files"));

	Ok(())
}

#[test]
fn no_subcommand_hints_at_help() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("sem3")?;
	cmd.assert()
		.failure()
		.stderr(predicates::str::contains("sem3 --help"));

	Ok(())
}
